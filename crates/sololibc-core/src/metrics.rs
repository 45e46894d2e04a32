//! Atomic counters for shim observability.
//!
//! All counters use relaxed ordering. They are advisory/diagnostic, never
//! consulted by the shim itself, and never change a return value.

use std::sync::atomic::{AtomicU64, Ordering};

/// Global shim operation counters.
pub struct ShimMetrics {
    /// Aligned allocations that produced an address.
    pub aligned_allocations: AtomicU64,
    /// Aligned allocations refused by the underlying allocator.
    pub aligned_exhaustions: AtomicU64,
    /// Exit and thread-exit destructors accepted and then discarded.
    pub exit_destructors_dropped: AtomicU64,
    /// Condition waits that returned without waiting.
    pub cond_waits_elided: AtomicU64,
    /// TLS key creations.
    pub tls_keys_created: AtomicU64,
    /// TLS key destructors accepted and then discarded.
    pub tls_destructors_dropped: AtomicU64,
    /// Writes to the shared TLS cell.
    pub tls_writes: AtomicU64,
}

impl ShimMetrics {
    /// Create a new zeroed metrics instance.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            aligned_allocations: AtomicU64::new(0),
            aligned_exhaustions: AtomicU64::new(0),
            exit_destructors_dropped: AtomicU64::new(0),
            cond_waits_elided: AtomicU64::new(0),
            tls_keys_created: AtomicU64::new(0),
            tls_destructors_dropped: AtomicU64::new(0),
            tls_writes: AtomicU64::new(0),
        }
    }

    /// Increment a counter by 1.
    pub fn inc(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Read a counter value.
    pub fn get(counter: &AtomicU64) -> u64 {
        counter.load(Ordering::Relaxed)
    }

    /// Snapshot all counters.
    #[must_use]
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            aligned_allocations: Self::get(&self.aligned_allocations),
            aligned_exhaustions: Self::get(&self.aligned_exhaustions),
            exit_destructors_dropped: Self::get(&self.exit_destructors_dropped),
            cond_waits_elided: Self::get(&self.cond_waits_elided),
            tls_keys_created: Self::get(&self.tls_keys_created),
            tls_destructors_dropped: Self::get(&self.tls_destructors_dropped),
            tls_writes: Self::get(&self.tls_writes),
        }
    }
}

impl Default for ShimMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Point-in-time copy of [`ShimMetrics`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub aligned_allocations: u64,
    pub aligned_exhaustions: u64,
    pub exit_destructors_dropped: u64,
    pub cond_waits_elided: u64,
    pub tls_keys_created: u64,
    pub tls_destructors_dropped: u64,
    pub tls_writes: u64,
}

/// Process-wide counters.
pub static METRICS: ShimMetrics = ShimMetrics::new();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_metrics_snapshot_is_zero() {
        let metrics = ShimMetrics::new();
        assert_eq!(metrics.snapshot(), MetricsSnapshot::default());
    }

    #[test]
    fn inc_is_visible_in_snapshot() {
        let metrics = ShimMetrics::new();
        ShimMetrics::inc(&metrics.cond_waits_elided);
        ShimMetrics::inc(&metrics.cond_waits_elided);
        ShimMetrics::inc(&metrics.tls_writes);
        let snap = metrics.snapshot();
        assert_eq!(snap.cond_waits_elided, 2);
        assert_eq!(snap.tls_writes, 1);
        assert_eq!(snap.aligned_allocations, 0);
    }
}
