//! # Metrics Traits
//!
//! Recording, snapshotting, and export are separate responsibilities so queue
//! logic never depends on how counters are consumed.
//!
//! ```text
//!        ┌──────────────────────────────┐
//!        │     QueueMetricsRecorder     │   written by BoundedQueue operations
//!        │  enqueue/evict/discard       │
//!        │  dequeue/contains/drain      │
//!        └──────────────┬───────────────┘
//!                       │
//!   Consumption (decoupled from recording):
//!   ┌──────────────────────────────┐    ┌──────────────────────────────┐
//!   │ MetricsSnapshotProvider<S>   │    │ MetricsExporter<S>           │
//!   │ (bench/test)                 │    │ (production monitoring)      │
//!   └──────────────────────────────┘    └──────────────────────────────┘
//! ```
//!
//! Every recorder method takes `&self`: counters are atomic cells, so
//! read-only queue operations can record without a mutable borrow.

/// Counters written by [`BoundedQueue`](crate::ds::BoundedQueue) operations.
pub trait QueueMetricsRecorder {
    fn record_enqueue_call(&self);
    fn record_appended(&self);
    fn record_evicted(&self);
    fn record_discarded(&self);
    fn record_dequeue_call(&self);
    fn record_dequeue_hit(&self);
    fn record_dequeue_empty(&self);
    fn record_contains_call(&self);
    fn record_contains_hit(&self);
    fn record_snapshot_call(&self);
    fn record_drain_call(&self);
    fn record_drained_entries(&self, n: u64);
}

/// Snapshot provider for bench/testing.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Reset metrics between tests or benchmark iterations.
pub trait MetricsReset {
    fn reset_metrics(&self);
}

/// Export/publish metrics to production monitoring backends.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
