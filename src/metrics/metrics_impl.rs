use crate::metrics::cell::MetricsCell;
use crate::metrics::traits::{MetricsReset, QueueMetricsRecorder};

/// Live operation counters embedded in every queue when the `metrics`
/// feature is enabled.
#[derive(Debug, Default, Clone)]
pub struct QueueMetrics {
    pub enqueue_calls: MetricsCell,
    pub appended: MetricsCell,
    pub evicted: MetricsCell,
    pub discarded: MetricsCell,
    pub dequeue_calls: MetricsCell,
    pub dequeue_hits: MetricsCell,
    pub dequeue_empty: MetricsCell,
    pub contains_calls: MetricsCell,
    pub contains_hits: MetricsCell,
    pub snapshot_calls: MetricsCell,
    pub drain_calls: MetricsCell,
    pub drained_entries: MetricsCell,
}

impl QueueMetricsRecorder for QueueMetrics {
    fn record_enqueue_call(&self) {
        self.enqueue_calls.incr();
    }

    fn record_appended(&self) {
        self.appended.incr();
    }

    fn record_evicted(&self) {
        self.evicted.incr();
    }

    fn record_discarded(&self) {
        self.discarded.incr();
    }

    fn record_dequeue_call(&self) {
        self.dequeue_calls.incr();
    }

    fn record_dequeue_hit(&self) {
        self.dequeue_hits.incr();
    }

    fn record_dequeue_empty(&self) {
        self.dequeue_empty.incr();
    }

    fn record_contains_call(&self) {
        self.contains_calls.incr();
    }

    fn record_contains_hit(&self) {
        self.contains_hits.incr();
    }

    fn record_snapshot_call(&self) {
        self.snapshot_calls.incr();
    }

    fn record_drain_call(&self) {
        self.drain_calls.incr();
    }

    fn record_drained_entries(&self, n: u64) {
        self.drained_entries.add(n);
    }
}

impl MetricsReset for QueueMetrics {
    fn reset_metrics(&self) {
        for cell in [
            &self.enqueue_calls,
            &self.appended,
            &self.evicted,
            &self.discarded,
            &self.dequeue_calls,
            &self.dequeue_hits,
            &self.dequeue_empty,
            &self.contains_calls,
            &self.contains_hits,
            &self.snapshot_calls,
            &self.drain_calls,
            &self.drained_entries,
        ] {
            cell.reset();
        }
    }
}
