// ============================================================================
// Numeric Errors
// Error types for exact aggregation and percentage derivation
// ============================================================================

use std::fmt;

/// Errors that can occur while aggregating dominance values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Result exceeded the decimal domain's range
    Overflow,
    /// Attempted division by zero
    DivisionByZero,
    /// Scale factor was zero or negative
    InvalidScale,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum value")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::InvalidScale => write!(f, "scale factor must be positive"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
