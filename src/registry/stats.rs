/*!
 * Lock-Free Registry Statistics
 * Atomic counters for zero-contention stats tracking in hot paths
 */

use super::types::RegistryStats;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// Atomic registry statistics for lock-free updates
///
/// # Performance
/// - Cache-line aligned to prevent false sharing
/// - All operations use relaxed ordering for maximum performance
/// - Read-only snapshot requires no synchronization
#[repr(C, align(64))]
pub struct AtomicRegistryStats {
    total_registered: AtomicU64,
    total_replaced: AtomicU64,
    total_unregistered: AtomicU64,
    total_emitted: AtomicU64,
    total_delivered: AtomicU64,
    total_dropped: AtomicU64,
    total_delegate_panics: AtomicU64,
    delegates_registered: AtomicUsize,
}

impl AtomicRegistryStats {
    /// Create new atomic stats
    #[inline]
    pub const fn new() -> Self {
        Self {
            total_registered: AtomicU64::new(0),
            total_replaced: AtomicU64::new(0),
            total_unregistered: AtomicU64::new(0),
            total_emitted: AtomicU64::new(0),
            total_delivered: AtomicU64::new(0),
            total_dropped: AtomicU64::new(0),
            total_delegate_panics: AtomicU64::new(0),
            delegates_registered: AtomicUsize::new(0),
        }
    }

    /// Increment fresh registrations (lock-free)
    #[inline(always)]
    pub fn inc_registered(&self) {
        self.total_registered.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment in-place replacements (lock-free)
    #[inline(always)]
    pub fn inc_replaced(&self) {
        self.total_replaced.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment unregistrations (lock-free)
    #[inline(always)]
    pub fn inc_unregistered(&self) {
        self.total_unregistered.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment emit calls (lock-free)
    ///
    /// # Performance
    /// Hot path - called on every emit
    #[inline(always)]
    pub fn inc_emitted(&self) {
        self.total_emitted.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment delivered signals (lock-free)
    ///
    /// # Performance
    /// Hot path - called on every successful delivery
    #[inline(always)]
    pub fn inc_delivered(&self) {
        self.total_delivered.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment signals dropped for want of a listener (lock-free)
    #[inline(always)]
    pub fn inc_dropped(&self) {
        self.total_dropped.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment delegate panics caught during emission (lock-free)
    #[inline(always)]
    pub fn inc_delegate_panics(&self) {
        self.total_delegate_panics.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment registered delegate gauge (lock-free)
    #[inline(always)]
    pub fn inc_delegates(&self) {
        self.delegates_registered.fetch_add(1, Ordering::Relaxed);
    }

    /// Decrement registered delegate gauge (lock-free)
    #[inline(always)]
    pub fn dec_delegates(&self, count: usize) {
        self.delegates_registered.fetch_sub(count, Ordering::Relaxed);
    }

    /// Get snapshot of current stats (no locks required)
    ///
    /// # Note
    /// Values may not be perfectly consistent with each other due to concurrent
    /// updates, but each individual value is accurate. This is acceptable for
    /// monitoring.
    #[inline]
    pub fn snapshot(&self) -> RegistryStats {
        RegistryStats {
            total_registered: self.total_registered.load(Ordering::Relaxed),
            total_replaced: self.total_replaced.load(Ordering::Relaxed),
            total_unregistered: self.total_unregistered.load(Ordering::Relaxed),
            total_emitted: self.total_emitted.load(Ordering::Relaxed),
            total_delivered: self.total_delivered.load(Ordering::Relaxed),
            total_dropped: self.total_dropped.load(Ordering::Relaxed),
            total_delegate_panics: self.total_delegate_panics.load(Ordering::Relaxed),
            delegates_registered: self.delegates_registered.load(Ordering::Relaxed),
        }
    }
}

impl Default for AtomicRegistryStats {
    fn default() -> Self {
        Self::new()
    }
}
