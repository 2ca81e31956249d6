//! Builder for configuring [`BoundedQueue`] instances.
//!
//! Collects the capacity request (unsigned or signed) and the preallocation
//! hint, then builds either leniently, normalizing a non-positive capacity
//! to 0, or strictly, rejecting it with a [`ConfigError`].
//!
//! ## Example
//!
//! ```rust
//! use boundq::builder::QueueBuilder;
//!
//! let mut queue = QueueBuilder::new().capacity(3).prealloc(1).build::<&str>();
//! queue.enqueue("a");
//! assert_eq!(queue.capacity(), 3);
//!
//! // Defaults to DEFAULT_CAPACITY
//! let queue = QueueBuilder::default().build::<u8>();
//! assert_eq!(queue.capacity(), 100);
//! ```

use crate::ds::bounded_queue::{DEFAULT_CAPACITY, MAX_PREALLOC, normalize_capacity};
use crate::ds::BoundedQueue;
use crate::error::ConfigError;

/// Builder for creating queue instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueBuilder {
    // Wide enough for any `usize` or `i64` request.
    requested: i128,
    prealloc: Option<usize>,
}

impl QueueBuilder {
    /// Creates a builder requesting [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self {
            requested: DEFAULT_CAPACITY as i128,
            prealloc: None,
        }
    }

    /// Requests a capacity of `capacity` elements.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.requested = capacity as i128;
        self
    }

    /// Requests a capacity from a signed value; `<= 0` means capacity 0 for
    /// [`build`](Self::build) and an error for [`try_build`](Self::try_build).
    pub fn signed_capacity(mut self, capacity: i64) -> Self {
        self.requested = i128::from(capacity);
        self
    }

    /// Sets how many slots to allocate up front (clamped to the capacity).
    ///
    /// Defaults to `min(capacity, MAX_PREALLOC)`.
    pub fn prealloc(mut self, slots: usize) -> Self {
        self.prealloc = Some(slots);
        self
    }

    /// Builds a queue, normalizing a non-positive capacity to 0.
    ///
    /// # Example
    ///
    /// ```rust
    /// use boundq::builder::QueueBuilder;
    ///
    /// let mut queue = QueueBuilder::new().signed_capacity(-5).build::<i32>();
    /// assert_eq!(queue.capacity(), 0);
    /// queue.enqueue(1);
    /// assert!(queue.is_empty());
    /// ```
    pub fn build<T>(self) -> BoundedQueue<T> {
        let capacity = normalize_capacity(self.requested);
        let prealloc = self.prealloc.unwrap_or(capacity.min(MAX_PREALLOC));
        BoundedQueue::with_prealloc(capacity, prealloc)
    }

    /// Builds a queue, rejecting a capacity that is not positive.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the requested capacity is `<= 0`.
    pub fn try_build<T>(self) -> Result<BoundedQueue<T>, ConfigError> {
        if self.requested <= 0 {
            return Err(ConfigError::new(format!(
                "capacity must be > 0, got {}",
                self.requested
            )));
        }
        Ok(self.build())
    }
}

impl Default for QueueBuilder {
    fn default() -> Self {
        Self::new()
    }
}
