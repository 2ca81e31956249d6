//! Operation counters for [`BoundedQueue`](crate::ds::BoundedQueue), enabled
//! by the `metrics` feature.
//!
//! ## Example Usage
//!
//! ```
//! use boundq::BoundedQueue;
//! use boundq::metrics::exporter::PrometheusTextExporter;
//! use boundq::metrics::traits::{MetricsExporter, MetricsSnapshotProvider};
//!
//! let mut queue = BoundedQueue::new(2);
//! queue.enqueue_all([1, 2, 3]);
//!
//! let snap = queue.snapshot_metrics();
//! assert_eq!(snap.evicted, 1);
//! assert_eq!(MetricsSnapshotProvider::snapshot(&queue), snap);
//!
//! let exporter = PrometheusTextExporter::new("boundq", Vec::new());
//! exporter.export(&snap);
//! ```

pub mod cell;
pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;

pub use metrics_impl::QueueMetrics;
pub use snapshot::QueueMetricsSnapshot;
