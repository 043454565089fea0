// ============================================================================
// Domain Models Module
// Contains all core domain entities and value objects
// ============================================================================

pub mod account;
pub mod address;
pub mod config;

pub use account::{AccountHeader, DecodedAccount, TokenRecord};
pub use address::{Address, ParseAddressError};
pub use config::{DecodeConfig, DEFAULT_AGGREGATOR_SEED, DEFAULT_PROGRAM_ID};
