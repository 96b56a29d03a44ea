//! Resolution statistics tracking.
//!
//! Thread-safe counters for provider failures and fallback events,
//! accumulated over a search session and logged as an end-of-run summary.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::ProviderFailureKind;

/// Thread-safe availability-resolution statistics.
///
/// Tracks provider failures by kind, how often the chain fell through to a
/// lower-priority provider, and how often a whole batch had to fail closed.
/// Shareable across tasks via `Arc`.
pub struct ResolutionStats {
    failures: HashMap<ProviderFailureKind, AtomicUsize>,
    fallbacks: AtomicUsize,
    fail_closed_batches: AtomicUsize,
}

impl ResolutionStats {
    pub fn new() -> Self {
        let mut failures = HashMap::new();
        for kind in ProviderFailureKind::iter() {
            failures.insert(kind, AtomicUsize::new(0));
        }
        ResolutionStats {
            failures,
            fallbacks: AtomicUsize::new(0),
            fail_closed_batches: AtomicUsize::new(0),
        }
    }

    /// Counts one provider failure.
    ///
    /// All kinds are pre-initialized in `new()`; an unknown kind indicates
    /// a missing enum variant in initialization and is logged, not panicked.
    pub fn record_failure(&self, kind: ProviderFailureKind) {
        if let Some(counter) = self.failures.get(&kind) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to count provider failure {kind:?} which is not in the map. \
                 This indicates a bug in ResolutionStats initialization."
            );
        }
    }

    /// Counts one fallback hop to a lower-priority provider.
    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Counts one batch that exhausted the chain and failed closed.
    pub fn record_fail_closed(&self) {
        self.fail_closed_batches.fetch_add(1, Ordering::Relaxed);
    }

    /// Count for one failure kind.
    pub fn failure_count(&self, kind: ProviderFailureKind) -> usize {
        self.failures
            .get(&kind)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Total failures across all kinds.
    pub fn total_failures(&self) -> usize {
        self.failures
            .values()
            .map(|c| c.load(Ordering::SeqCst))
            .sum()
    }

    /// Fallback hop count.
    pub fn fallback_count(&self) -> usize {
        self.fallbacks.load(Ordering::SeqCst)
    }

    /// Fail-closed batch count.
    pub fn fail_closed_count(&self) -> usize {
        self.fail_closed_batches.load(Ordering::SeqCst)
    }

    /// Logs a summary of non-zero counters at info level.
    pub fn log_summary(&self) {
        if self.total_failures() == 0 && self.fail_closed_count() == 0 {
            return;
        }
        log::info!("Provider failure summary:");
        for kind in ProviderFailureKind::iter() {
            let count = self.failure_count(kind);
            if count > 0 {
                log::info!("  {}: {}", kind.as_str(), count);
            }
        }
        if self.fallback_count() > 0 {
            log::info!("  Fallback hops: {}", self.fallback_count());
        }
        if self.fail_closed_count() > 0 {
            log::info!(
                "  Batches failed closed (no provider answered): {}",
                self.fail_closed_count()
            );
        }
    }
}

impl Default for ResolutionStats {
    fn default() -> Self {
        Self::new()
    }
}
