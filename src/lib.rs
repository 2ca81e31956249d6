//! boundq: a bounded FIFO queue with drop-oldest eviction.
//!
//! [`BoundedQueue`] keeps at most `capacity` elements in arrival order and
//! evicts the oldest one when a new element arrives at a full queue, so it
//! also serves as a circular buffer over the latest inserts.
//!
//! ```
//! use boundq::prelude::*;
//!
//! let mut queue = BoundedQueue::new(2);
//! queue.enqueue_all([1, 2, 3]);
//! assert_eq!(queue.snapshot(), vec![2, 3]);
//! ```

pub mod builder;
pub mod ds;
pub mod error;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;

pub use crate::builder::QueueBuilder;
pub use crate::ds::{BoundedQueue, DEFAULT_CAPACITY, Enqueued};
pub use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::QueueMetricsSnapshot;
