use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::AccountingUnderflow;

/// Running total of live heap bytes.
///
/// Releases are checked: asking to release more than is tracked leaves the
/// total untouched and reports [`AccountingUnderflow`].
#[derive(Debug, Default)]
pub struct AllocationCounter {
    bytes: AtomicUsize,
}

impl AllocationCounter {
    pub const fn new() -> Self {
        Self { bytes: AtomicUsize::new(0) }
    }

    /// Returns the new total.
    pub fn record_alloc(&self, size: usize) -> usize {
        self.bytes.fetch_add(size, Ordering::Relaxed) + size
    }

    /// Returns the new total.
    pub fn record_dealloc(&self, size: usize) -> Result<usize, AccountingUnderflow> {
        self.bytes
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |tracked| tracked.checked_sub(size))
            .map(|previous| previous - size)
            .map_err(|tracked| AccountingUnderflow { requested: size, tracked })
    }

    pub fn current(&self) -> usize {
        self.bytes.load(Ordering::Relaxed)
    }
}
