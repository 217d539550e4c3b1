use std::{
    alloc::{GlobalAlloc, Layout, System},
    cell::Cell,
    sync::atomic::{AtomicBool, Ordering},
};

use log::{error, trace};

use super::counter::AllocationCounter;
use super::MemoryTracker;
use crate::config::{ALLOCATION_LOG_TARGET, LOG_ALLOCATIONS_DEFAULT};

thread_local! {
    static IN_HOOK: Cell<bool> = const { Cell::new(false) };
}

/// Runs `f` unless this thread is already inside it, so allocations made by
/// the logger itself are counted but not logged again.
fn outside_hook(f: impl FnOnce()) {
    let _ = IN_HOOK.try_with(|busy| {
        if busy.replace(true) {
            return;
        }
        f();
        busy.set(false);
    });
}

/// A [`GlobalAlloc`] wrapper that keeps every block it hands out on an
/// [`AllocationCounter`].
pub struct TrackingAllocator<A = System> {
    inner: A,
    counter: AllocationCounter,
    verbose: AtomicBool,
}

impl<A> TrackingAllocator<A> {
    pub const fn new(inner: A) -> Self {
        Self {
            inner,
            counter: AllocationCounter::new(),
            verbose: AtomicBool::new(LOG_ALLOCATIONS_DEFAULT),
        }
    }

    pub fn counter(&self) -> &AllocationCounter {
        &self.counter
    }

    fn charge(&self, size: usize) {
        let total = self.counter.record_alloc(size);
        if self.verbose.load(Ordering::Relaxed) {
            outside_hook(|| trace!(target: ALLOCATION_LOG_TARGET, "Allocated: {} Total: {}", size, total));
        }
    }

    fn release(&self, size: usize) {
        match self.counter.record_dealloc(size) {
            Ok(total) => {
                if self.verbose.load(Ordering::Relaxed) {
                    outside_hook(|| trace!(target: ALLOCATION_LOG_TARGET, "Deallocated: {} Total: {}", size, total));
                }
            }
            Err(underflow) => {
                outside_hook(|| error!("Allocation accounting broke: {}", underflow));
                std::process::abort();
            }
        }
    }
}

impl<A> MemoryTracker for TrackingAllocator<A>
where
    A: Sync,
{
    fn current_usage(&self) -> usize {
        self.counter.current()
    }

    fn set_verbose(&self, verbose: bool) {
        self.verbose.store(verbose, Ordering::Relaxed);
    }

    fn is_verbose(&self) -> bool {
        self.verbose.load(Ordering::Relaxed)
    }
}

unsafe impl<A: GlobalAlloc> GlobalAlloc for TrackingAllocator<A> {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = self.inner.alloc(layout);
        if !ptr.is_null() {
            self.charge(layout.size());
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = self.inner.alloc_zeroed(layout);
        if !ptr.is_null() {
            self.charge(layout.size());
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        self.release(layout.size());
        self.inner.dealloc(ptr, layout);
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = self.inner.realloc(ptr, layout, new_size);
        if !new_ptr.is_null() {
            self.release(layout.size());
            self.charge(new_size);
        }
        new_ptr
    }
}

#[cfg(test)]
mod tests {
    use log::{LevelFilter, Log, Metadata, Record};
    use parking_lot::{const_mutex, Mutex};

    use super::*;

    #[test]
    fn tracks_blocks_until_released() {
        let allocator = TrackingAllocator::new(System);
        let small = Layout::from_size_align(24, 8).unwrap();
        let large = Layout::from_size_align(4096, 16).unwrap();

        unsafe {
            let a = allocator.alloc(small);
            let b = allocator.alloc_zeroed(large);
            assert!(!a.is_null() && !b.is_null());
            assert_eq!(allocator.current_usage(), 24 + 4096);
            assert_eq!(*b.add(100), 0);

            allocator.dealloc(a, small);
            assert_eq!(allocator.current_usage(), 4096);
            allocator.dealloc(b, large);
        }
        assert_eq!(allocator.current_usage(), 0);
    }

    #[test]
    fn realloc_moves_the_charge() {
        let allocator = TrackingAllocator::new(System);
        let layout = Layout::from_size_align(32, 8).unwrap();

        unsafe {
            let ptr = allocator.alloc(layout);
            let grown = allocator.realloc(ptr, layout, 256);
            assert!(!grown.is_null());
            assert_eq!(allocator.current_usage(), 256);

            allocator.dealloc(grown, Layout::from_size_align(256, 8).unwrap());
        }
        assert_eq!(allocator.current_usage(), 0);
    }

    struct CaptureLogger {
        lines: Mutex<Vec<String>>,
    }

    impl Log for CaptureLogger {
        fn enabled(&self, _: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            if record.target() == ALLOCATION_LOG_TARGET {
                self.lines.lock().push(record.args().to_string());
            }
        }

        fn flush(&self) {}
    }

    static CAPTURE: CaptureLogger = CaptureLogger { lines: const_mutex(Vec::new()) };

    fn captured_lines() -> Vec<String> {
        let _ = log::set_logger(&CAPTURE);
        log::set_max_level(LevelFilter::Trace);
        CAPTURE.lines.lock().clone()
    }

    #[test]
    fn verbose_mode_emits_a_line_per_block() {
        captured_lines();
        let allocator = TrackingAllocator::new(System);
        allocator.set_verbose(true);

        let layout = Layout::from_size_align(48, 8).unwrap();
        unsafe {
            let ptr = allocator.alloc(layout);
            allocator.dealloc(ptr, layout);
        }

        let lines = captured_lines();
        assert!(lines.iter().any(|line| line == "Allocated: 48 Total: 48"));
        assert!(lines.iter().any(|line| line == "Deallocated: 48 Total: 0"));
    }

    #[test]
    fn quiet_mode_emits_nothing() {
        captured_lines();
        let allocator = TrackingAllocator::new(System);
        allocator.set_verbose(false);

        let layout = Layout::from_size_align(52, 4).unwrap();
        unsafe {
            let ptr = allocator.alloc(layout);
            allocator.dealloc(ptr, layout);
        }

        assert!(!captured_lines().iter().any(|line| line.starts_with("Allocated: 52 ")));
    }

    #[test]
    fn verbose_flag_toggles() {
        let allocator = TrackingAllocator::new(System);
        assert_eq!(allocator.is_verbose(), LOG_ALLOCATIONS_DEFAULT);
        allocator.set_verbose(true);
        assert!(allocator.is_verbose());

        let layout = Layout::from_size_align(8, 8).unwrap();
        unsafe {
            let ptr = allocator.alloc(layout);
            allocator.dealloc(ptr, layout);
        }
        assert_eq!(allocator.counter().current(), 0);
    }
}
