//! Bounded FIFO queue with drop-oldest eviction.
//!
//! Holds at most `capacity` elements in arrival order. Inserting into a full
//! queue evicts exactly one element, the oldest, so the queue doubles as a
//! circular buffer over the most recent `capacity` inserts. A queue built
//! with capacity 0 accepts nothing and stays empty forever.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────────┐
//! │                      BoundedQueue<T> (capacity = 4)                         │
//! │                                                                             │
//! │   items: VecDeque<T>          len: maintained on every push/pop             │
//! │                                                                             │
//! │        front                              back                              │
//! │      ┌───────┬───────┬───────┬───────┐                                      │
//! │      │  A    │  B    │  C    │  D    │   len = 4 = capacity                 │
//! │      └───────┴───────┴───────┴───────┘                                      │
//! │       oldest                   newest                                       │
//! │                                                                             │
//! │   enqueue(E) on a full queue:                                               │
//! │     1. pop_front()  → A is evicted and handed back                          │
//! │     2. push_back(E)                                                         │
//! │      ┌───────┬───────┬───────┬───────┐                                      │
//! │      │  B    │  C    │  D    │  E    │   len stays 4                        │
//! │      └───────┴───────┴───────┴───────┘                                      │
//! │                                                                             │
//! │   dequeue():          pop_front() → Some(B), len = 3                        │
//! │   drain_and_reset():  [C, D, E] returned, len = 0, capacity kept            │
//! │                                                                             │
//! └─────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Components
//!
//! - [`BoundedQueue`]: The queue itself
//! - [`Enqueued`]: What happened to the queue on a single insert
//! - [`Iter`] / [`IntoIter`]: Oldest-to-newest iterators
//!
//! ## Operations
//!
//! | Operation             | Description                              | Complexity |
//! |-----------------------|------------------------------------------|------------|
//! | [`enqueue`]           | Append, evicting the oldest when full    | O(1)*      |
//! | [`enqueue_all`]       | Fold `enqueue` over a batch              | O(n)*      |
//! | [`dequeue`]           | Remove the oldest                        | O(1)       |
//! | [`contains`]          | Linear membership scan                   | O(len)     |
//! | [`snapshot`]          | Clone contents, oldest first             | O(len)     |
//! | [`drain_and_reset`]   | Take contents, keep capacity             | O(len)     |
//!
//! \* amortized
//!
//! [`enqueue`]: BoundedQueue::enqueue
//! [`enqueue_all`]: BoundedQueue::enqueue_all
//! [`dequeue`]: BoundedQueue::dequeue
//! [`contains`]: BoundedQueue::contains
//! [`snapshot`]: BoundedQueue::snapshot
//! [`drain_and_reset`]: BoundedQueue::drain_and_reset
//!
//! ## Example Usage
//!
//! ```
//! use boundq::BoundedQueue;
//!
//! let mut queue = BoundedQueue::new(2);
//! queue.enqueue(1);
//! queue.enqueue(2);
//! queue.enqueue(3); // evicts 1
//!
//! assert_eq!(queue.snapshot(), vec![2, 3]);
//! assert_eq!(queue.dequeue(), Some(2));
//! assert_eq!(queue.drain_and_reset(), vec![3]);
//! assert!(queue.is_empty());
//! assert_eq!(queue.capacity(), 2);
//! ```
//!
//! ## Value-Threading Style
//!
//! Every mutator also has a by-value form that consumes the queue and returns
//! the updated one, for callers that thread queue values through a pipeline:
//!
//! ```
//! use boundq::BoundedQueue;
//!
//! let queue = BoundedQueue::new(15).enqueued_all([1, 2, 3]).enqueued(4);
//! let (first, queue) = queue.dequeued();
//! assert_eq!(first, Some(1));
//!
//! let (rest, queue) = queue.drained();
//! assert_eq!(rest, vec![2, 3, 4]);
//! assert!(queue.is_empty());
//! ```
//!
//! ## Thread Safety
//!
//! `BoundedQueue` has no internal synchronization. It is `Send`/`Sync`
//! exactly when `T` is; callers sharing one queue must serialize access
//! themselves (single owner task, external lock).
//!
//! ## Implementation Notes
//!
//! - Backed by `VecDeque<T>`, so push-back and pop-front never shift elements
//! - `len` is a counter updated by each operation, never recomputed
//! - Construction preallocates at most [`MAX_PREALLOC`] slots
//! - `debug_validate_invariants()` available in debug/test builds

use std::collections::VecDeque;
use std::collections::vec_deque;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;

use crate::error::InvariantError;
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::QueueMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::QueueMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{MetricsReset, MetricsSnapshotProvider, QueueMetricsRecorder};

/// Capacity used by [`BoundedQueue::default`].
pub const DEFAULT_CAPACITY: usize = 100;

/// Upper bound on slots allocated up front; larger queues grow on demand.
pub const MAX_PREALLOC: usize = 1024;

/// Maps a requested capacity of any sign onto a stored capacity.
///
/// Every non-positive request becomes 0. Requests beyond `usize::MAX`
/// saturate.
pub(crate) fn normalize_capacity(requested: i128) -> usize {
    if requested <= 0 {
        0
    } else {
        usize::try_from(requested).unwrap_or(usize::MAX)
    }
}

// ---------------------------------------------------------------------------
// Enqueued
// ---------------------------------------------------------------------------

/// Outcome of a single [`BoundedQueue::enqueue`].
///
/// Values pushed out of (or refused by) the queue are handed back rather than
/// dropped, so callers can log, count, or recycle them. Ignoring the outcome
/// is fine; the queue is already updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Enqueued<T> {
    /// The item was appended and the queue grew by one.
    Appended,
    /// The queue was full; the oldest element was evicted to make room.
    Evicted(T),
    /// The queue has capacity 0; the item itself was discarded.
    Discarded(T),
}

impl<T> Enqueued<T> {
    /// Returns `true` if the new item is now stored in the queue.
    pub fn is_stored(&self) -> bool {
        !matches!(self, Enqueued::Discarded(_))
    }

    /// Returns the evicted element, if this insert displaced one.
    pub fn evicted(self) -> Option<T> {
        match self {
            Enqueued::Evicted(old) => Some(old),
            _ => None,
        }
    }

    /// Returns whichever value did not end up in the queue: the evicted
    /// element or the discarded item.
    pub fn into_displaced(self) -> Option<T> {
        match self {
            Enqueued::Appended => None,
            Enqueued::Evicted(v) | Enqueued::Discarded(v) => Some(v),
        }
    }
}

// ---------------------------------------------------------------------------
// BoundedQueue
// ---------------------------------------------------------------------------

/// FIFO queue of at most `capacity` elements that evicts its oldest element
/// on overflow.
///
/// Capacity is fixed at construction. All operations are total: enqueue
/// never fails, dequeue on an empty queue returns `None`.
///
/// Implements [`Clone`], [`Debug`], [`Default`], [`PartialEq`], [`Eq`],
/// [`Hash`], [`Extend`], and [`IntoIterator`]. Equality and hashing consider
/// the capacity and the logical contents only.
///
/// # Example
///
/// ```
/// use boundq::BoundedQueue;
///
/// let mut recent = BoundedQueue::new(3);
/// for reading in [10, 20, 30, 40, 50] {
///     recent.enqueue(reading);
/// }
///
/// // Only the last three readings survive, oldest first
/// assert_eq!(recent.snapshot(), vec![30, 40, 50]);
/// assert!(recent.contains(&40));
/// assert!(!recent.contains(&10));
/// ```
#[derive(Debug, Clone)]
pub struct BoundedQueue<T> {
    items: VecDeque<T>,
    capacity: usize,
    len: usize,
    #[cfg(feature = "metrics")]
    metrics: QueueMetrics,
}

impl<T> BoundedQueue<T> {
    /// Creates an empty queue holding at most `capacity` elements.
    ///
    /// A capacity of 0 produces a queue that discards every insert.
    ///
    /// # Example
    ///
    /// ```
    /// use boundq::BoundedQueue;
    ///
    /// let queue: BoundedQueue<u64> = BoundedQueue::new(15);
    /// assert_eq!(queue.capacity(), 15);
    /// assert!(queue.is_empty());
    /// ```
    pub fn new(capacity: usize) -> Self {
        Self::with_prealloc(capacity, capacity.min(MAX_PREALLOC))
    }

    /// Creates a queue from a signed capacity request.
    ///
    /// Any value `<= 0` yields capacity 0, whatever its magnitude. No error
    /// is raised.
    ///
    /// # Example
    ///
    /// ```
    /// use boundq::BoundedQueue;
    ///
    /// let mut queue = BoundedQueue::from_signed(-7);
    /// assert_eq!(queue.capacity(), 0);
    /// queue.enqueue("dropped");
    /// assert_eq!(queue.dequeue(), None);
    /// ```
    pub fn from_signed(capacity: i64) -> Self {
        Self::new(normalize_capacity(i128::from(capacity)))
    }

    /// Creates a queue with an explicit number of slots allocated up front.
    ///
    /// `prealloc` is clamped to `capacity`; the queue grows on demand past it.
    pub fn with_prealloc(capacity: usize, prealloc: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(prealloc.min(capacity)),
            capacity,
            len: 0,
            #[cfg(feature = "metrics")]
            metrics: QueueMetrics::default(),
        }
    }

    /// Returns the maximum number of elements retained.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of elements currently stored (`<= capacity`).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no elements are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the next enqueue will evict.
    ///
    /// A zero-capacity queue is never full: it discards instead of evicting.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.capacity > 0 && self.len >= self.capacity
    }

    /// Returns how many more elements fit before eviction starts.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.capacity - self.len
    }

    /// Appends `item` at the back.
    ///
    /// - capacity 0: `item` is discarded and returned in
    ///   [`Enqueued::Discarded`].
    /// - full: the single oldest element is evicted first and returned in
    ///   [`Enqueued::Evicted`]; `len` stays at `capacity`.
    /// - otherwise: `item` is appended and `len` grows by one.
    ///
    /// Afterwards `len == min(capacity, old_len + 1)`.
    ///
    /// # Example
    ///
    /// ```
    /// use boundq::{BoundedQueue, Enqueued};
    ///
    /// let mut queue = BoundedQueue::new(2);
    /// assert_eq!(queue.enqueue(1), Enqueued::Appended);
    /// assert_eq!(queue.enqueue(2), Enqueued::Appended);
    /// assert_eq!(queue.enqueue(3), Enqueued::Evicted(1));
    /// assert_eq!(queue.len(), 2);
    ///
    /// let mut closed = BoundedQueue::new(0);
    /// assert_eq!(closed.enqueue(9), Enqueued::Discarded(9));
    /// ```
    pub fn enqueue(&mut self, item: T) -> Enqueued<T> {
        #[cfg(feature = "metrics")]
        self.metrics.record_enqueue_call();

        if self.capacity == 0 {
            #[cfg(feature = "metrics")]
            self.metrics.record_discarded();
            return Enqueued::Discarded(item);
        }

        if self.len >= self.capacity
            && let Some(oldest) = self.items.pop_front()
        {
            self.items.push_back(item);
            #[cfg(feature = "metrics")]
            self.metrics.record_evicted();
            return Enqueued::Evicted(oldest);
        }

        self.items.push_back(item);
        self.len += 1;
        #[cfg(feature = "metrics")]
        self.metrics.record_appended();
        Enqueued::Appended
    }

    /// Enqueues every item of `items` in order, returning how many stored
    /// elements were evicted along the way.
    ///
    /// Each item goes through [`enqueue`](Self::enqueue) individually, so a
    /// batch larger than the free space evicts once per overflowing item and
    /// may evict its own earlier items.
    ///
    /// # Example
    ///
    /// ```
    /// use boundq::BoundedQueue;
    ///
    /// let mut queue = BoundedQueue::new(3);
    /// queue.enqueue_all([1, 2]);
    ///
    /// // 1, 2 and then 3 (from this batch) are pushed out
    /// let evicted = queue.enqueue_all([3, 4, 5, 6]);
    /// assert_eq!(evicted, 3);
    /// assert_eq!(queue.snapshot(), vec![4, 5, 6]);
    /// ```
    pub fn enqueue_all<I>(&mut self, items: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let mut evicted = 0;
        for item in items {
            if let Enqueued::Evicted(_) = self.enqueue(item) {
                evicted += 1;
            }
        }
        evicted
    }

    /// Removes and returns the oldest element, or `None` when the queue is
    /// empty (always the case at capacity 0).
    ///
    /// # Example
    ///
    /// ```
    /// use boundq::BoundedQueue;
    ///
    /// let mut queue = BoundedQueue::new(1000);
    /// queue.enqueue(1);
    /// assert_eq!(queue.dequeue(), Some(1));
    /// assert_eq!(queue.dequeue(), None);
    /// ```
    pub fn dequeue(&mut self) -> Option<T> {
        #[cfg(feature = "metrics")]
        self.metrics.record_dequeue_call();

        if self.capacity == 0 || self.len == 0 {
            #[cfg(feature = "metrics")]
            self.metrics.record_dequeue_empty();
            return None;
        }

        let item = self.items.pop_front()?;
        self.len -= 1;
        #[cfg(feature = "metrics")]
        self.metrics.record_dequeue_hit();
        Some(item)
    }

    /// Returns the oldest element without removing it.
    #[inline]
    pub fn peek_oldest(&self) -> Option<&T> {
        self.items.front()
    }

    /// Returns the newest element without removing it.
    #[inline]
    pub fn peek_newest(&self) -> Option<&T> {
        self.items.back()
    }

    /// Removes every element and returns them oldest-to-newest, leaving an
    /// empty queue with the same capacity.
    ///
    /// The backing allocation is kept for reuse.
    ///
    /// # Example
    ///
    /// ```
    /// use boundq::BoundedQueue;
    ///
    /// let mut queue = BoundedQueue::new(15);
    /// queue.enqueue_all([1, 2, 3]);
    ///
    /// assert_eq!(queue.drain_and_reset(), vec![1, 2, 3]);
    /// assert_eq!(queue.len(), 0);
    /// assert_eq!(queue.snapshot(), Vec::<i32>::new());
    /// assert_eq!(queue.capacity(), 15);
    /// ```
    pub fn drain_and_reset(&mut self) -> Vec<T> {
        let drained: Vec<T> = self.items.drain(..).collect();
        self.len = 0;
        #[cfg(feature = "metrics")]
        {
            self.metrics.record_drain_call();
            self.metrics.record_drained_entries(drained.len() as u64);
        }
        drained
    }

    /// Drops every element, keeping the capacity.
    pub fn clear(&mut self) {
        self.items.clear();
        self.len = 0;
    }

    /// Returns an iterator over stored elements, oldest first.
    ///
    /// # Example
    ///
    /// ```
    /// use boundq::BoundedQueue;
    ///
    /// let queue = BoundedQueue::new(4).enqueued_all(["a", "b", "c"]);
    /// let joined: String = queue.iter().copied().collect();
    /// assert_eq!(joined, "abc");
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.items.iter(),
        }
    }

    /// Consumes the queue, returning its contents oldest-to-newest.
    pub fn into_vec(self) -> Vec<T> {
        self.items.into()
    }

    /// Consuming form of [`enqueue`](Self::enqueue).
    #[must_use = "the updated queue is returned; the original is consumed"]
    pub fn enqueued(mut self, item: T) -> Self {
        self.enqueue(item);
        self
    }

    /// Consuming form of [`enqueue_all`](Self::enqueue_all).
    #[must_use = "the updated queue is returned; the original is consumed"]
    pub fn enqueued_all<I>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.enqueue_all(items);
        self
    }

    /// Consuming form of [`dequeue`](Self::dequeue).
    pub fn dequeued(mut self) -> (Option<T>, Self) {
        let item = self.dequeue();
        (item, self)
    }

    /// Consuming form of [`drain_and_reset`](Self::drain_and_reset).
    pub fn drained(mut self) -> (Vec<T>, Self) {
        let items = self.drain_and_reset();
        (items, self)
    }

    /// Returns an approximate memory footprint in bytes, counting the full
    /// backing allocation rather than only occupied slots.
    pub fn approx_bytes(&self) -> usize {
        std::mem::size_of::<Self>() + self.items.capacity() * std::mem::size_of::<T>()
    }

    /// Verifies the queue's internal invariants.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantError`] if the length counter disagrees with the
    /// stored elements, the queue holds more than `capacity` elements, or a
    /// zero-capacity queue holds anything.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.len != self.items.len() {
            return Err(InvariantError::new(format!(
                "len counter {} != stored elements {}",
                self.len,
                self.items.len()
            )));
        }
        if self.len > self.capacity {
            return Err(InvariantError::new(format!(
                "len {} exceeds capacity {}",
                self.len, self.capacity
            )));
        }
        if self.capacity == 0 && !self.items.is_empty() {
            return Err(InvariantError::new("zero-capacity queue holds elements"));
        }
        Ok(())
    }

    /// Panics if any structural invariant is broken.
    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        assert_eq!(self.len, self.items.len());
        assert!(self.len <= self.capacity);
        if self.capacity == 0 {
            assert!(self.items.is_empty());
        }
    }

    /// Returns a copy of the operation counters with current gauges.
    #[cfg(feature = "metrics")]
    pub fn snapshot_metrics(&self) -> QueueMetricsSnapshot {
        QueueMetricsSnapshot::capture(&self.metrics, self.len, self.capacity)
    }

    /// Returns the live operation counters.
    #[cfg(feature = "metrics")]
    #[inline]
    pub fn metrics(&self) -> &QueueMetrics {
        &self.metrics
    }
}

impl<T: PartialEq> BoundedQueue<T> {
    /// Returns `true` if any stored element equals `item`.
    ///
    /// Scans linearly from the oldest element.
    pub fn contains(&self, item: &T) -> bool {
        let found = self.items.iter().any(|stored| stored == item);
        #[cfg(feature = "metrics")]
        {
            self.metrics.record_contains_call();
            if found {
                self.metrics.record_contains_hit();
            }
        }
        found
    }
}

impl<T: Clone> BoundedQueue<T> {
    /// Returns the stored elements oldest-to-newest without modifying the
    /// queue. Repeated calls return equal sequences.
    ///
    /// # Example
    ///
    /// ```
    /// use boundq::BoundedQueue;
    ///
    /// let queue = BoundedQueue::new(2).enqueued_all([1, 2, 3]);
    /// assert_eq!(queue.snapshot(), vec![2, 3]);
    /// assert_eq!(queue.snapshot(), queue.snapshot());
    /// ```
    pub fn snapshot(&self) -> Vec<T> {
        #[cfg(feature = "metrics")]
        self.metrics.record_snapshot_call();
        self.items.iter().cloned().collect()
    }
}

impl<T> Default for BoundedQueue<T> {
    /// Creates an empty queue with [`DEFAULT_CAPACITY`].
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// PartialEq, Eq, Hash: capacity plus logical contents (metrics excluded)
// ---------------------------------------------------------------------------

impl<T: PartialEq> PartialEq for BoundedQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.capacity == other.capacity && self.items == other.items
    }
}

impl<T: Eq> Eq for BoundedQueue<T> {}

impl<T: Hash> Hash for BoundedQueue<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.capacity.hash(state);
        self.items.hash(state);
    }
}

impl<T> Extend<T> for BoundedQueue<T> {
    /// Same semantics as [`BoundedQueue::enqueue_all`].
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.enqueue_all(iter);
    }
}

#[cfg(feature = "metrics")]
impl<T> MetricsSnapshotProvider<QueueMetricsSnapshot> for BoundedQueue<T> {
    fn snapshot(&self) -> QueueMetricsSnapshot {
        self.snapshot_metrics()
    }
}

#[cfg(feature = "metrics")]
impl<T> MetricsReset for BoundedQueue<T> {
    fn reset_metrics(&self) {
        self.metrics.reset_metrics();
    }
}

// ---------------------------------------------------------------------------
// Iterator types
// ---------------------------------------------------------------------------

/// Borrowed iterator over a [`BoundedQueue`], oldest first.
///
/// Created by [`BoundedQueue::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: vec_deque::Iter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over a [`BoundedQueue`], oldest first.
///
/// Created by calling [`IntoIterator::into_iter`] on a `BoundedQueue`.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: vec_deque::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for BoundedQueue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.items.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a BoundedQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
