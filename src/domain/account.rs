// ============================================================================
// Aggregator Account Domain Model
// ============================================================================

use crate::domain::Address;
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Account Header
// ============================================================================

/// Fixed 48-byte header at the start of every aggregator account.
///
/// Layout: discriminator(8) + authority(32) + total_count(u32 LE)
/// + vector_length(u32 LE). The discriminator is carried through verbatim
/// and never checked against an expected tag; callers that want a stricter
/// policy can compare it themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AccountHeader {
    pub discriminator: [u8; 8],
    pub authority: Address,
    /// Count of active records as maintained by the program.
    pub total_count: u32,
    /// Length prefix of the on-chain record vector.
    pub vector_length: u32,
}

impl AccountHeader {
    /// Header width in bytes; record data begins at this offset.
    pub const LEN: usize = 48;

    /// The record count that drives decoding.
    ///
    /// The two header counts can disagree (the vector prefix sometimes
    /// reflects capacity rather than the active count). The smaller of the
    /// two can never read past valid data, so it wins.
    #[inline]
    pub fn resolved_count(&self) -> u32 {
        self.total_count.min(self.vector_length)
    }

    /// Whether the two candidate counts disagree.
    #[inline]
    pub fn counts_disagree(&self) -> bool {
        self.total_count != self.vector_length
    }
}

// ============================================================================
// Token Record
// ============================================================================

/// One decoded dominance record.
///
/// Produced only by the record decoder and never mutated afterward. The
/// dominance magnitude stays an exact `u64` end to end; it is wide enough
/// that routing it through an `f64` would silently round above 2^53.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TokenRecord {
    /// Token ticker, e.g. "BTC".
    pub symbol: String,
    /// Dominance magnitude relative to the configured scale factor.
    pub dominance: u64,
    /// Mint address of the token, as stored (text form).
    pub token_address: String,
    /// Oracle price feed identifier.
    pub price_feed_id: String,
    /// Unix seconds of the last on-chain update; absent in compact records.
    pub timestamp: Option<i64>,
}

impl TokenRecord {
    /// The update instant in calendar form, when the record carries one and
    /// the stored seconds map to a representable instant.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.timestamp
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
    }
}

// ============================================================================
// Decoded Account
// ============================================================================

/// A fully decoded aggregator account: the header plus every record the
/// count policy resolved.
///
/// Never constructed partially: a failure while decoding any record
/// discards the whole attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecodedAccount {
    pub header: AccountHeader,
    pub records: Vec<TokenRecord>,
}

impl DecodedAccount {
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
