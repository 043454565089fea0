// ============================================================================
// Numeric Aggregator
// Exact dominance summation and percentage derivation
// ============================================================================

use crate::aggregate::errors::{NumericError, NumericResult};
use crate::domain::{DecodedAccount, TokenRecord};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One record with its derived share of the scale factor.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RecordShare {
    pub record: TokenRecord,
    /// `dominance / scale_factor * 100`, exact in the decimal domain.
    pub percent: Decimal,
}

/// Aggregate over a decoded account: the exact dominance total plus derived
/// percentages. Recomputed from scratch on every decode, never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AggregateResult {
    pub shares: Vec<RecordShare>,
    /// Exact sum of every record's dominance. A u128 holds the worst case
    /// (u32::MAX records of u64::MAX each stays below 2^96).
    pub total_dominance: u128,
    pub total_percent: Decimal,
}

/// Sum the account's dominance values exactly and derive percentages.
///
/// The summation stays in integer domain the whole way; the decimal domain
/// is entered once per output value, for the final division. Summing
/// already-converted approximations would make the result depend on record
/// order, which exact integer addition does not.
pub fn aggregate(
    account: &DecodedAccount,
    scale_factor: Decimal,
) -> NumericResult<AggregateResult> {
    if scale_factor <= Decimal::ZERO {
        return Err(NumericError::InvalidScale);
    }

    let mut total: u128 = 0;
    for record in &account.records {
        total += u128::from(record.dominance);
    }

    let mut shares = Vec::with_capacity(account.records.len());
    for record in &account.records {
        let percent = percent_of_scale(Decimal::from(record.dominance), scale_factor)?;
        shares.push(RecordShare {
            record: record.clone(),
            percent,
        });
    }

    let total_percent = percent_of_scale(decimal_from_u128(total)?, scale_factor)?;

    Ok(AggregateResult {
        shares,
        total_dominance: total,
        total_percent,
    })
}

/// `value / scale * 100` in the decimal domain.
fn percent_of_scale(value: Decimal, scale_factor: Decimal) -> NumericResult<Decimal> {
    if scale_factor.is_zero() {
        return Err(NumericError::DivisionByZero);
    }
    let ratio = value
        .checked_div(scale_factor)
        .ok_or(NumericError::Overflow)?;
    ratio
        .checked_mul(Decimal::ONE_HUNDRED)
        .ok_or(NumericError::Overflow)
}

/// Lossless u128 -> Decimal conversion.
///
/// Fails only past the decimal mantissa range (2^96), which no account can
/// reach; the check is still made rather than assumed.
fn decimal_from_u128(value: u128) -> NumericResult<Decimal> {
    if value > i128::MAX as u128 {
        return Err(NumericError::Overflow);
    }
    Decimal::try_from_i128_with_scale(value as i128, 0).map_err(|_| NumericError::Overflow)
}
