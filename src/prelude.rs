//! Common imports for queue callers.
//!
//! Metrics traits other than `MetricsExporter` and `MetricsReset` stay in
//! `boundq::metrics::traits`: `MetricsSnapshotProvider::snapshot` shares its
//! name with [`BoundedQueue::snapshot`], so a glob import would let a queue of
//! non-`Clone` elements silently resolve `snapshot()` to the metrics method.
//!
//! ```compile_fail
//! use boundq::prelude::*;
//!
//! struct Token(u32);
//!
//! let mut queue = BoundedQueue::new(2);
//! queue.enqueue(Token(1));
//! let _ = queue.snapshot(); // `Token` is not `Clone`
//! ```

pub use crate::builder::QueueBuilder;
pub use crate::ds::{BoundedQueue, DEFAULT_CAPACITY, Enqueued};
pub use crate::error::{ConfigError, InvariantError};

#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::QueueMetricsSnapshot;
#[cfg(feature = "metrics")]
pub use crate::metrics::traits::{MetricsExporter, MetricsReset};
