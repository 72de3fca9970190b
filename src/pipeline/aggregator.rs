//! Result counters shared by all link workers.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::{LinkOutcome, OutcomeKind, ResultCounters, Summary};

/// Atomic created/existing/failed counters. Written concurrently by workers, read once after join.
#[derive(Debug, Default)]
pub struct ResultAggregator {
    created: AtomicUsize,
    existing: AtomicUsize,
    failed: AtomicUsize,
}

impl ResultAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&self, kind: OutcomeKind) {
        let counter = match kind {
            OutcomeKind::Created => &self.created,
            OutcomeKind::Existing => &self.existing,
            OutcomeKind::Failed => &self.failed,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record(&self, outcome: &LinkOutcome) {
        self.increment(outcome.kind());
    }

    /// Current values. Exact once every worker has been joined.
    pub fn snapshot(&self) -> ResultCounters {
        ResultCounters {
            created: self.created.load(Ordering::Relaxed),
            existing: self.existing.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
        }
    }

    /// Combine the counters with run timing into the final [`Summary`].
    pub fn finish(&self, elapsed: Duration, skipped_dirs: usize, cancelled: bool) -> Summary {
        let ResultCounters {
            created,
            existing,
            failed,
        } = self.snapshot();
        Summary {
            elapsed_secs: elapsed.as_secs_f64(),
            total_processed: created + existing,
            created,
            existing,
            failed,
            skipped_dirs,
            cancelled,
        }
    }
}
