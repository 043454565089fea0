// ============================================================================
// Address Derivation Interface
// Opaque capability producing canonical account addresses
// ============================================================================

use crate::domain::Address;

/// Deterministic derivation of an account address from a seed and a program
/// identity.
///
/// The collision-probing algorithm behind this is cryptographic and lives
/// outside this crate; implementations wrap whatever capability provides it
/// (an SDK call, a precomputed table, a remote service).
pub trait AddressDerivation: Send + Sync {
    /// Derive the canonical address for `seed` under `program_id`.
    fn derive(&self, seed: &[u8], program_id: &Address) -> Address;
}

/// Derivation double that always yields a preset address, for tests and
/// demos where the real algorithm is irrelevant.
#[derive(Debug, Clone, Copy)]
pub struct FixedDerivation {
    address: Address,
}

impl FixedDerivation {
    pub fn new(address: Address) -> Self {
        Self { address }
    }
}

impl AddressDerivation for FixedDerivation {
    fn derive(&self, _seed: &[u8], _program_id: &Address) -> Address {
        self.address
    }
}
