#![no_main]

use boundq::BoundedQueue;
use libfuzzer_sys::fuzz_target;

// Fuzz property-based tests for BoundedQueue
//
// Tests specific properties:
// - len == min(capacity, inserts) for pure insert streams
// - batch enqueue equals a fold of single enqueues
// - drain returns the snapshot and keeps capacity
// - dequeue order equals snapshot order
fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }

    let capacity = (data[0] % 32) as usize;
    let test_type = data[1] % 4;
    let items = &data[2..];

    match test_type {
        0 => test_length_saturates(capacity, items),
        1 => test_batch_equals_fold(capacity, items),
        2 => test_drain_matches_snapshot(capacity, items),
        3 => test_dequeue_order(capacity, items),
        _ => unreachable!(),
    }
});

// Property: length grows one per insert until capacity, then stays
fn test_length_saturates(capacity: usize, items: &[u8]) {
    let mut queue = BoundedQueue::new(capacity);
    for (n, &item) in items.iter().enumerate() {
        queue.enqueue(item);
        assert_eq!(queue.len(), capacity.min(n + 1));
    }
    let keep = capacity.min(items.len());
    assert_eq!(queue.snapshot(), items[items.len() - keep..].to_vec());
}

// Property: enqueue_all over a split point equals one-by-one enqueues
fn test_batch_equals_fold(capacity: usize, items: &[u8]) {
    let split = items.len() / 2;
    let mut batched = BoundedQueue::new(capacity);
    batched.enqueue_all(items[..split].iter().copied());
    batched.enqueue_all(items[split..].iter().copied());

    let mut folded = BoundedQueue::new(capacity);
    for &item in items {
        folded.enqueue(item);
    }

    assert_eq!(batched, folded);
    batched.debug_validate_invariants();
}

// Property: drain returns exactly the snapshot and leaves an empty queue
fn test_drain_matches_snapshot(capacity: usize, items: &[u8]) {
    let mut queue = BoundedQueue::new(capacity);
    queue.enqueue_all(items.iter().copied());

    let snapshot = queue.snapshot();
    assert_eq!(queue.drain_and_reset(), snapshot);
    assert!(queue.is_empty());
    assert_eq!(queue.capacity(), capacity);
    assert!(queue.drain_and_reset().is_empty());
}

// Property: dequeuing to empty yields the snapshot order, then None
fn test_dequeue_order(capacity: usize, items: &[u8]) {
    let mut queue = BoundedQueue::new(capacity);
    queue.enqueue_all(items.iter().copied());

    let expected = queue.snapshot();
    let mut popped = Vec::with_capacity(expected.len());
    while let Some(item) = queue.dequeue() {
        popped.push(item);
    }
    assert_eq!(popped, expected);
    assert_eq!(queue.dequeue(), None);
    queue.debug_validate_invariants();
}
