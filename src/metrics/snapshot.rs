use std::fmt;

use crate::metrics::metrics_impl::QueueMetrics;

/// Point-in-time copy of a queue's counters plus gauges captured at snapshot
/// time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct QueueMetricsSnapshot {
    pub enqueue_calls: u64,
    pub appended: u64,
    pub evicted: u64,
    pub discarded: u64, // zero-capacity inserts

    pub dequeue_calls: u64,
    pub dequeue_hits: u64,
    pub dequeue_empty: u64,

    pub contains_calls: u64,
    pub contains_hits: u64,
    pub snapshot_calls: u64,

    pub drain_calls: u64,
    pub drained_entries: u64,

    // gauges captured at snapshot time
    pub len: usize,
    pub capacity: usize,
}

impl QueueMetricsSnapshot {
    pub(crate) fn capture(metrics: &QueueMetrics, len: usize, capacity: usize) -> Self {
        Self {
            enqueue_calls: metrics.enqueue_calls.get(),
            appended: metrics.appended.get(),
            evicted: metrics.evicted.get(),
            discarded: metrics.discarded.get(),
            dequeue_calls: metrics.dequeue_calls.get(),
            dequeue_hits: metrics.dequeue_hits.get(),
            dequeue_empty: metrics.dequeue_empty.get(),
            contains_calls: metrics.contains_calls.get(),
            contains_hits: metrics.contains_hits.get(),
            snapshot_calls: metrics.snapshot_calls.get(),
            drain_calls: metrics.drain_calls.get(),
            drained_entries: metrics.drained_entries.get(),
            len,
            capacity,
        }
    }

    /// Fraction of enqueue calls that displaced an older element.
    pub fn eviction_rate(&self) -> f64 {
        if self.enqueue_calls == 0 {
            0.0
        } else {
            self.evicted as f64 / self.enqueue_calls as f64
        }
    }
}

impl fmt::Display for QueueMetricsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "QueueMetrics {{ enqueues: {}, appended: {}, evicted: {}, eviction_rate: {:.2}%, \
             discarded: {}, dequeues: {} ({} empty), drained: {}, len: {}/{} }}",
            self.enqueue_calls,
            self.appended,
            self.evicted,
            self.eviction_rate() * 100.0,
            self.discarded,
            self.dequeue_calls,
            self.dequeue_empty,
            self.drained_entries,
            self.len,
            self.capacity,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::traits::QueueMetricsRecorder;

    #[test]
    fn capture_copies_counters_and_gauges() {
        let m = QueueMetrics::default();
        m.record_enqueue_call();
        m.record_evicted();
        let snap = QueueMetricsSnapshot::capture(&m, 4, 8);
        assert_eq!(snap.enqueue_calls, 1);
        assert_eq!(snap.evicted, 1);
        assert_eq!(snap.len, 4);
        assert_eq!(snap.capacity, 8);
    }

    #[test]
    fn eviction_rate_handles_no_calls() {
        let snap = QueueMetricsSnapshot::default();
        assert_eq!(snap.eviction_rate(), 0.0);
    }

    #[test]
    fn display_reports_rate_and_fill() {
        let snap = QueueMetricsSnapshot {
            enqueue_calls: 4,
            evicted: 1,
            len: 2,
            capacity: 2,
            ..Default::default()
        };
        let text = snap.to_string();
        assert!(text.contains("eviction_rate: 25.00%"));
        assert!(text.contains("len: 2/2"));
    }
}
