// ============================================================================
// Decode Configuration
// Explicit configuration value threaded through every decode call
// ============================================================================

use crate::domain::Address;
use crate::schema::SchemaVersion;
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Program identity the deployed aggregator runs under.
pub const DEFAULT_PROGRAM_ID: Address =
    Address::from_base58("DP9kZHS77pbTuTHKNsaxqFjrUboFLGXvyCQsxYvWM26c");

/// Derivation seed of the aggregator account.
pub const DEFAULT_AGGREGATOR_SEED: &str = "aggregator_v2";

/// Raw dominance units that correspond to 100%.
const DEFAULT_SCALE_FACTOR: u64 = 10_000_000_000;

// ============================================================================
// Configuration
// ============================================================================

/// Everything a fetch-decode cycle needs to know, passed in explicitly.
///
/// There is deliberately no process-wide default instance: callers own the
/// value and hand it to each call, so two pipelines with different programs
/// or schema versions can coexist.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecodeConfig {
    /// Program identity expected to own the aggregator account.
    pub program_id: Address,

    /// Seed string the aggregator address is derived from.
    pub aggregator_seed: String,

    /// Record layout version to decode with.
    pub schema: SchemaVersion,

    /// Raw dominance units corresponding to 100%.
    pub scale_factor: Decimal,
}

impl DecodeConfig {
    /// Create a configuration with the default seed, schema and scale.
    pub fn new(program_id: Address) -> Self {
        Self {
            program_id,
            aggregator_seed: DEFAULT_AGGREGATOR_SEED.to_string(),
            schema: SchemaVersion::default(),
            scale_factor: Decimal::from(DEFAULT_SCALE_FACTOR),
        }
    }

    /// Builder method: set the derivation seed.
    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.aggregator_seed = seed.into();
        self
    }

    /// Builder method: set the record layout version.
    pub fn with_schema(mut self, schema: SchemaVersion) -> Self {
        self.schema = schema;
        self
    }

    /// Builder method: set the scale factor.
    pub fn with_scale_factor(mut self, scale_factor: Decimal) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.aggregator_seed.is_empty() {
            return Err("aggregator seed cannot be empty".to_string());
        }
        if self.scale_factor <= Decimal::ZERO {
            return Err("scale factor must be positive".to_string());
        }
        Ok(())
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl DecodeConfig {
    /// The deployed aggregator: default program, seed and scale, extended
    /// record layout.
    pub fn deployed_aggregator() -> Self {
        Self::new(DEFAULT_PROGRAM_ID)
    }

    /// Same deployment read with the pre-timestamp compact layout.
    pub fn compact_aggregator() -> Self {
        Self::new(DEFAULT_PROGRAM_ID).with_schema(SchemaVersion::Compact)
    }
}
