// ============================================================================
// Decode Errors
// Typed failures and non-fatal warnings for the account decoders
// ============================================================================

use crate::domain::AccountHeader;
use smallvec::SmallVec;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Structural failures while decoding an account buffer.
///
/// Any of these aborts the decode as a whole; no partially decoded account
/// is ever handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeError {
    /// Buffer shorter than the fixed account header.
    BufferTooShort { actual: usize },
    /// A record would read past the end of the buffer.
    TruncatedRecord {
        index: usize,
        expected: usize,
        remaining: usize,
    },
    /// A text field held bytes that are not valid UTF-8.
    InvalidText { field: &'static str, index: usize },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::BufferTooShort { actual } => write!(
                f,
                "buffer too short for account header: need {} bytes, got {}",
                AccountHeader::LEN,
                actual
            ),
            DecodeError::TruncatedRecord {
                index,
                expected,
                remaining,
            } => write!(
                f,
                "record {} truncated: need {} bytes, {} remaining",
                index, expected, remaining
            ),
            DecodeError::InvalidText { field, index } => {
                write!(f, "record {} field `{}` is not valid UTF-8", index, field)
            },
        }
    }
}

impl std::error::Error for DecodeError {}

/// Result type alias for decode operations
pub type DecodeResult<T> = Result<T, DecodeError>;

// ============================================================================
// Warnings
// ============================================================================

/// Non-fatal observations recorded during a decode.
///
/// Warnings ride alongside the decoded account instead of failing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DecodeWarning {
    /// The header's two candidate record counts disagree; the smaller one
    /// drove decoding.
    CountMismatch {
        total_count: u32,
        vector_length: u32,
    },
}

impl fmt::Display for DecodeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeWarning::CountMismatch {
                total_count,
                vector_length,
            } => write!(
                f,
                "header counts disagree: total_count={}, vector_length={}; decoded the smaller",
                total_count, vector_length
            ),
        }
    }
}

/// Warning list for one decode; empty in the common case, one entry when
/// the counts disagree.
pub type DecodeWarnings = SmallVec<[DecodeWarning; 1]>;
