// ============================================================================
// View Pipeline
// One fetch-decode cycle: derive, fetch, verify, decode, aggregate
// ============================================================================

use crate::aggregate::{self, AggregateResult, NumericError};
use crate::codec::{AccountDecoder, DecodeError, DecodeWarnings};
use crate::domain::{Address, DecodeConfig};
use crate::interfaces::{AddressDerivation, LedgerClient, LedgerError};
use chrono::{DateTime, Utc};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Errors
// ============================================================================

/// Failures of a whole fetch-decode cycle.
///
/// Returned as values; nothing in the pipeline unwinds across the boundary
/// to the presentation layer, which owns all user-visible messaging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// Rejected configuration.
    Config(String),
    /// No account exists at the derived address.
    AccountNotFound { address: Address },
    /// The account exists but is owned by another program.
    OwnerMismatch { expected: Address, actual: Address },
    /// The ledger client failed to produce an answer.
    Ledger(LedgerError),
    /// The account data did not decode.
    Decode(DecodeError),
    /// Aggregation failed.
    Numeric(NumericError),
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewError::Config(detail) => write!(f, "invalid configuration: {}", detail),
            ViewError::AccountNotFound { address } => {
                write!(f, "aggregator account {} not found; has it been initialized?", address)
            },
            ViewError::OwnerMismatch { expected, actual } => write!(
                f,
                "account owner {} does not match program identity {}",
                actual, expected
            ),
            ViewError::Ledger(error) => write!(f, "{}", error),
            ViewError::Decode(error) => write!(f, "{}", error),
            ViewError::Numeric(error) => write!(f, "{}", error),
        }
    }
}

impl std::error::Error for ViewError {}

impl From<LedgerError> for ViewError {
    fn from(error: LedgerError) -> Self {
        ViewError::Ledger(error)
    }
}

impl From<DecodeError> for ViewError {
    fn from(error: DecodeError) -> Self {
        ViewError::Decode(error)
    }
}

impl From<NumericError> for ViewError {
    fn from(error: NumericError) -> Self {
        ViewError::Numeric(error)
    }
}

// ============================================================================
// View
// ============================================================================

/// What one successful cycle hands to the presentation layer.
///
/// Rendering, link construction and formatting happen downstream; this is
/// the complete structured result.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DominanceView {
    /// Derived address the account was fetched from.
    pub address: Address,
    /// Authority recorded in the account header.
    pub authority: Address,
    pub aggregate: AggregateResult,
    /// Non-fatal observations from the decode.
    pub warnings: DecodeWarnings,
    /// Instant this view was decoded.
    pub decoded_at: DateTime<Utc>,
}

/// Run one fetch-decode cycle.
///
/// Callers that expose a manual trigger or a timer should hold a
/// [`RefreshGate`](crate::utils::RefreshGate) permit around this call so
/// cycles never overlap.
pub fn refresh(
    client: &dyn LedgerClient,
    derivation: &dyn AddressDerivation,
    config: &DecodeConfig,
) -> Result<DominanceView, ViewError> {
    config.validate().map_err(ViewError::Config)?;

    let address = derivation.derive(config.aggregator_seed.as_bytes(), &config.program_id);
    tracing::debug!(%address, "fetching aggregator account");

    let raw = client
        .fetch_account(&address)?
        .ok_or(ViewError::AccountNotFound { address })?;

    if raw.owner != config.program_id {
        return Err(ViewError::OwnerMismatch {
            expected: config.program_id,
            actual: raw.owner,
        });
    }

    let decoded = AccountDecoder::new(config.schema).decode(&raw.data)?;
    let aggregate = aggregate::aggregate(&decoded.account, config.scale_factor)?;

    tracing::info!(
        %address,
        records = aggregate.shares.len(),
        warnings = decoded.warnings.len(),
        "aggregator account decoded"
    );

    Ok(DominanceView {
        address,
        authority: decoded.account.header.authority,
        aggregate,
        warnings: decoded.warnings,
        decoded_at: Utc::now(),
    })
}
