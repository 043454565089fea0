// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod derivation;
mod ledger;

pub use derivation::{AddressDerivation, FixedDerivation};
pub use ledger::{InMemoryLedger, LedgerClient, LedgerError, RawAccount};
