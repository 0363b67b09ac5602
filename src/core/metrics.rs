//! Store metrics for observability
//!
//! File-system failures never reach the caller of `log`; these counters are
//! where they become visible.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters describing what the store did with each `log` call
///
/// # Example
///
/// ```
/// use debug_log_system::StoreMetrics;
///
/// let metrics = StoreMetrics::new();
/// metrics.record_logged();
/// metrics.record_suppressed();
///
/// assert_eq!(metrics.entries_logged(), 1);
/// assert_eq!(metrics.suppressed(), 1);
/// ```
#[derive(Debug)]
pub struct StoreMetrics {
    /// Entries appended to memory (internal notices included)
    entries_logged: AtomicU64,

    /// Calls ignored because the store was disabled
    suppressed: AtomicU64,

    /// Lines written to the active file
    file_writes: AtomicU64,

    /// Lines that could not be written
    file_write_failures: AtomicU64,

    /// Internal error notices (directory or file creation failures)
    internal_errors: AtomicU64,
}

impl StoreMetrics {
    pub const fn new() -> Self {
        Self {
            entries_logged: AtomicU64::new(0),
            suppressed: AtomicU64::new(0),
            file_writes: AtomicU64::new(0),
            file_write_failures: AtomicU64::new(0),
            internal_errors: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn entries_logged(&self) -> u64 {
        self.entries_logged.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn suppressed(&self) -> u64 {
        self.suppressed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn file_writes(&self) -> u64 {
        self.file_writes.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn file_write_failures(&self) -> u64 {
        self.file_write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn internal_errors(&self) -> u64 {
        self.internal_errors.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_logged(&self) -> u64 {
        self.entries_logged.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_suppressed(&self) -> u64 {
        self.suppressed.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_file_write(&self) -> u64 {
        self.file_writes.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_file_write_failure(&self) -> u64 {
        self.file_write_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_internal_error(&self) -> u64 {
        self.internal_errors.fetch_add(1, Ordering::Relaxed)
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.entries_logged.store(0, Ordering::Relaxed);
        self.suppressed.store(0, Ordering::Relaxed);
        self.file_writes.store(0, Ordering::Relaxed);
        self.file_write_failures.store(0, Ordering::Relaxed);
        self.internal_errors.store(0, Ordering::Relaxed);
    }
}

impl Default for StoreMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for StoreMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            entries_logged: AtomicU64::new(self.entries_logged()),
            suppressed: AtomicU64::new(self.suppressed()),
            file_writes: AtomicU64::new(self.file_writes()),
            file_write_failures: AtomicU64::new(self.file_write_failures()),
            internal_errors: AtomicU64::new(self.internal_errors()),
        }
    }
}
