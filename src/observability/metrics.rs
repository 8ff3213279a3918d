//! Metrics registry for biblidx
//!
//! - Counters only
//! - Monotonic increase
//! - Reset only by building a new registry

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Counters describing what a simulation run did to its library
///
/// All counters use Relaxed atomics; values are exact once the run ends.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Books successfully added
    books_added: AtomicU64,
    /// Adds rejected as duplicates
    duplicates_rejected: AtomicU64,
    /// Books removed
    books_removed: AtomicU64,
    /// Books replaced by an update
    books_updated: AtomicU64,
    /// Updates that changed nothing
    updates_rejected: AtomicU64,
    /// Lookups that found at least one book
    searches_hit: AtomicU64,
    /// Lookups that found nothing
    searches_missed: AtomicU64,
    /// Events skipped because the library was empty
    events_skipped: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new metrics registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_books_added(&self) {
        self.books_added.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_duplicates_rejected(&self) {
        self.duplicates_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_books_removed(&self) {
        self.books_removed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_books_updated(&self) {
        self.books_updated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_updates_rejected(&self) {
        self.updates_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup outcome
    pub fn record_search(&self, hit: bool) {
        if hit {
            self.searches_hit.fetch_add(1, Ordering::Relaxed);
        } else {
            self.searches_missed.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn increment_events_skipped(&self) {
        self.events_skipped.fetch_add(1, Ordering::Relaxed);
    }

    /// Get all metrics as a snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            books_added: self.books_added.load(Ordering::Relaxed),
            duplicates_rejected: self.duplicates_rejected.load(Ordering::Relaxed),
            books_removed: self.books_removed.load(Ordering::Relaxed),
            books_updated: self.books_updated.load(Ordering::Relaxed),
            updates_rejected: self.updates_rejected.load(Ordering::Relaxed),
            searches_hit: self.searches_hit.load(Ordering::Relaxed),
            searches_missed: self.searches_missed.load(Ordering::Relaxed),
            events_skipped: self.events_skipped.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time snapshot of all metrics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub books_added: u64,
    pub duplicates_rejected: u64,
    pub books_removed: u64,
    pub books_updated: u64,
    pub updates_rejected: u64,
    pub searches_hit: u64,
    pub searches_missed: u64,
    pub events_skipped: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_registry_has_zero_values() {
        assert_eq!(MetricsRegistry::new().snapshot(), MetricsSnapshot::default());
    }

    #[test]
    fn test_increment_counters() {
        let registry = MetricsRegistry::new();

        registry.increment_books_added();
        registry.increment_books_added();
        registry.increment_duplicates_rejected();
        registry.increment_books_removed();
        registry.increment_books_updated();
        registry.increment_updates_rejected();
        registry.record_search(true);
        registry.record_search(false);
        registry.record_search(false);
        registry.increment_events_skipped();

        let snapshot = registry.snapshot();
        assert_eq!(snapshot.books_added, 2);
        assert_eq!(snapshot.duplicates_rejected, 1);
        assert_eq!(snapshot.books_removed, 1);
        assert_eq!(snapshot.books_updated, 1);
        assert_eq!(snapshot.updates_rejected, 1);
        assert_eq!(snapshot.searches_hit, 1);
        assert_eq!(snapshot.searches_missed, 2);
        assert_eq!(snapshot.events_skipped, 1);
    }

    #[test]
    fn test_snapshot_serializes() {
        let registry = MetricsRegistry::new();
        registry.increment_books_added();

        let parsed = serde_json::to_value(registry.snapshot()).unwrap();
        assert_eq!(parsed["books_added"], 1);
        assert_eq!(parsed["searches_missed"], 0);
    }

    #[test]
    fn test_thread_safety() {
        use std::sync::Arc;
        use std::thread;

        let registry = Arc::new(MetricsRegistry::new());
        let mut handles = vec![];

        for _ in 0..10 {
            let reg = Arc::clone(&registry);
            handles.push(thread::spawn(move || {
                for _ in 0..100 {
                    reg.increment_books_added();
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(registry.snapshot().books_added, 1000);
    }
}
