#![no_main]

use boundq::{BoundedQueue, Enqueued};
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary operation sequences on BoundedQueue
//
// Tests random sequences of enqueue, enqueue_all, dequeue, contains,
// snapshot, and drain_and_reset against a Vec model, checking invariants
// after every step.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    // First byte picks a signed capacity in [-8, 23]; non-positive means 0
    let requested = i64::from(data[0] % 32) - 8;
    let capacity = requested.max(0) as usize;
    let mut queue = BoundedQueue::from_signed(requested);
    let mut model: Vec<u8> = Vec::new();

    let push = |model: &mut Vec<u8>, item: u8| {
        if capacity == 0 {
            return;
        }
        if model.len() >= capacity {
            model.remove(0);
        }
        model.push(item);
    };

    let mut idx = 1;
    while idx + 1 < data.len() {
        let op = data[idx] % 6;
        let value = data[idx + 1];

        match op {
            0 => {
                let outcome = queue.enqueue(value);
                let was_full = capacity > 0 && model.len() >= capacity;
                match outcome {
                    Enqueued::Discarded(v) => assert!(capacity == 0 && v == value),
                    Enqueued::Evicted(old) => {
                        assert!(was_full);
                        assert_eq!(Some(&old), model.first());
                    }
                    Enqueued::Appended => assert!(!was_full && capacity > 0),
                }
                push(&mut model, value);
            }
            1 => {
                // Batch of up to 15 copies of a rising sequence
                let batch: Vec<u8> = (0..value % 16).map(|i| value.wrapping_add(i)).collect();
                for &item in &batch {
                    push(&mut model, item);
                }
                queue.enqueue_all(batch);
            }
            2 => {
                let expected = if model.is_empty() { None } else { Some(model.remove(0)) };
                assert_eq!(queue.dequeue(), expected);
            }
            3 => {
                assert_eq!(queue.contains(&value), model.contains(&value));
            }
            4 => {
                let first = queue.snapshot();
                assert_eq!(first, queue.snapshot());
                assert_eq!(first, model);
            }
            5 => {
                assert_eq!(queue.drain_and_reset(), std::mem::take(&mut model));
                assert!(queue.is_empty());
                assert_eq!(queue.capacity(), capacity);
            }
            _ => unreachable!(),
        }

        queue.debug_validate_invariants();
        assert_eq!(queue.len(), model.len());
        assert!(queue.len() <= queue.capacity());

        idx += 2;
    }
});
