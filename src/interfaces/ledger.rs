// ============================================================================
// Ledger Client Interface
// Read access to remotely stored accounts
// ============================================================================

use crate::domain::Address;
use std::collections::HashMap;
use std::fmt;

/// Raw account state as returned by a ledger fetch.
///
/// The decode pipeline treats `data` as immutable input; it is never
/// modified or retained past the cycle that fetched it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAccount {
    /// Program identity that owns the account.
    pub owner: Address,
    /// The account's data buffer, verbatim.
    pub data: Vec<u8>,
}

/// Errors surfaced by a ledger client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// The transport failed before an answer was obtained.
    Transport(String),
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerError::Transport(detail) => write!(f, "ledger transport failure: {}", detail),
        }
    }
}

impl std::error::Error for LedgerError {}

/// Fetches account state from a ledger.
///
/// `Ok(None)` means the ledger answered and no account exists at the
/// address; transport problems are errors. Retry policy, commitment levels
/// and connection management all live behind implementations of this trait.
pub trait LedgerClient: Send + Sync {
    fn fetch_account(&self, address: &Address) -> Result<Option<RawAccount>, LedgerError>;
}

// ============================================================================
// In-Memory Ledger (test double)
// ============================================================================

/// Ledger backed by a map, for tests and demos.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    accounts: HashMap<Address, RawAccount>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place an account at an address, replacing any previous one.
    pub fn insert(&mut self, address: Address, account: RawAccount) {
        self.accounts.insert(address, account);
    }
}

impl LedgerClient for InMemoryLedger {
    fn fetch_account(&self, address: &Address) -> Result<Option<RawAccount>, LedgerError> {
        Ok(self.accounts.get(address).cloned())
    }
}
