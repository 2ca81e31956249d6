//! Error types for the boundq library.
//!
//! Queue operations themselves never fail: a non-positive capacity is
//! normalized to zero, an empty dequeue yields `None`, and enqueue either
//! appends, evicts, or discards. The types here cover the two places where a
//! caller explicitly asks for a verdict.
//!
//! ## Key Components
//!
//! - [`InvariantError`]: Returned by
//!   [`BoundedQueue::check_invariants`](crate::ds::BoundedQueue::check_invariants)
//!   when the length counter, capacity bound, or zero-capacity rule is broken.
//! - [`ConfigError`]: Returned by the strict
//!   [`QueueBuilder::try_build`](crate::builder::QueueBuilder::try_build)
//!   when the requested capacity is not positive.
//!
//! ## Example Usage
//!
//! ```
//! use boundq::builder::QueueBuilder;
//! use boundq::error::ConfigError;
//! use boundq::BoundedQueue;
//!
//! // Strict construction rejects a capacity that would make the queue inert
//! let strict: Result<BoundedQueue<u32>, ConfigError> =
//!     QueueBuilder::new().signed_capacity(-3).try_build();
//! assert!(strict.is_err());
//!
//! // The lenient path normalizes instead
//! let lenient: BoundedQueue<u32> = QueueBuilder::new().signed_capacity(-3).build();
//! assert_eq!(lenient.capacity(), 0);
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal queue invariants are violated.
///
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when queue configuration is rejected by a strict builder.
///
/// # Example
///
/// ```
/// use boundq::builder::QueueBuilder;
///
/// let err = QueueBuilder::new().capacity(0).try_build::<u8>().unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
