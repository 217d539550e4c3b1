/**
 *
 * Heap accounting: a tracking allocator, its counter and byte formatting
 *
 */

mod allocator;
mod counter;
mod format;

use std::sync::OnceLock;

pub use allocator::TrackingAllocator;
pub use counter::AllocationCounter;
pub use format::format_human;

/// Read side of an installed allocation tracker.
pub trait MemoryTracker: Sync {
    fn current_usage(&self) -> usize;
    fn set_verbose(&self, verbose: bool);
    fn is_verbose(&self) -> bool;
}

static TRACKER: OnceLock<&'static dyn MemoryTracker> = OnceLock::new();

/// Makes `tracker` the source for [`current_usage`]. Only the first call wins.
pub fn install(tracker: &'static dyn MemoryTracker) -> bool {
    TRACKER.set(tracker).is_ok()
}

/// Bytes currently live on the heap, or `0` if no tracker is installed.
pub fn current_usage() -> usize {
    TRACKER.get().map_or(0, |tracker| tracker.current_usage())
}

/// Returns the new setting, or `None` if no tracker is installed.
pub fn toggle_verbose() -> Option<bool> {
    TRACKER.get().map(|tracker| {
        let verbose = !tracker.is_verbose();
        tracker.set_verbose(verbose);
        verbose
    })
}

pub fn usage_report() -> String {
    format!("Memory used: {}", format_human(current_usage() as u64))
}
