// ============================================================================
// Refresh Gate
// Mutual exclusion at the fetch-decode trigger
// ============================================================================

use parking_lot::{Mutex, MutexGuard};

/// Serializes fetch-decode cycles: at most one permit exists at a time.
///
/// Acquisition is non-blocking. A denied permit means a cycle is already in
/// flight and the caller should skip this trigger (a manual refresh while
/// one is running, a timer tick overlapping a slow fetch) rather than queue
/// behind it.
#[derive(Debug, Default)]
pub struct RefreshGate {
    inner: Mutex<()>,
}

impl RefreshGate {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(()),
        }
    }

    /// Try to start a cycle. The permit holds the gate until dropped.
    pub fn try_acquire(&self) -> Option<RefreshPermit<'_>> {
        self.inner.try_lock().map(|guard| RefreshPermit { _guard: guard })
    }
}

/// Held for the duration of one fetch-decode cycle.
#[derive(Debug)]
pub struct RefreshPermit<'a> {
    _guard: MutexGuard<'a, ()>,
}
