// ============================================================================
// Account Address
// Fixed-width ledger identifier with base58 text encoding
// ============================================================================

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 32-byte account address.
///
/// Addresses identify both programs and the accounts they own. The canonical
/// text form is base58; `Display` produces it and `FromStr` consumes it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Address([u8; 32]);

impl Address {
    /// Width of an address in bytes.
    pub const LEN: usize = 32;

    /// Create an address from raw bytes.
    #[inline]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Compile-time construction from a base58 literal.
    ///
    /// Intended for declaring program identities as constants:
    ///
    /// ```ignore
    /// const PROGRAM_ID: Address =
    ///     Address::from_base58("DP9kZHS77pbTuTHKNsaxqFjrUboFLGXvyCQsxYvWM26c");
    /// ```
    pub const fn from_base58(encoded: &str) -> Self {
        Self(five8_const::decode_32_const(encoded))
    }

    /// Raw byte view.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Read an address from a byte window. Returns `None` unless the window
    /// is exactly 32 bytes.
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        let bytes: [u8; 32] = slice.try_into().ok()?;
        Some(Self(bytes))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bs58::encode(&self.0).into_string())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self)
    }
}

/// Error returned when parsing an address from its base58 text form fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseAddressError;

impl fmt::Display for ParseAddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid base58 address: expected 32 decoded bytes")
    }
}

impl std::error::Error for ParseAddressError {}

impl FromStr for Address {
    type Err = ParseAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decoded = bs58::decode(s).into_vec().map_err(|_| ParseAddressError)?;
        let bytes: [u8; 32] = decoded.try_into().map_err(|_| ParseAddressError)?;
        Ok(Self(bytes))
    }
}
