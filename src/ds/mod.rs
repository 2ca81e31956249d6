pub mod bounded_queue;

pub use bounded_queue::{BoundedQueue, DEFAULT_CAPACITY, Enqueued, IntoIter, Iter, MAX_PREALLOC};
