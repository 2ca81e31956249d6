use std::hint::black_box;

use boundq::BoundedQueue;
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};

const CAPACITY: usize = 1024;

fn filled(capacity: usize) -> BoundedQueue<u64> {
    BoundedQueue::new(capacity).enqueued_all(0..capacity as u64)
}

fn bench_enqueue_below_capacity(c: &mut Criterion) {
    c.bench_function("queue_enqueue_below_capacity", |b| {
        b.iter_batched(
            || BoundedQueue::new(CAPACITY),
            |mut queue| {
                for i in 0..CAPACITY as u64 {
                    let _ = black_box(queue.enqueue(black_box(i)));
                }
                queue
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_enqueue_eviction_churn(c: &mut Criterion) {
    c.bench_function("queue_enqueue_eviction_churn", |b| {
        b.iter_batched(
            || filled(CAPACITY),
            |mut queue| {
                for i in 0..4 * CAPACITY as u64 {
                    let _ = black_box(queue.enqueue(black_box(10_000 + i)));
                }
                queue
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_enqueue_all_oversized_batch(c: &mut Criterion) {
    let batch: Vec<u64> = (0..4 * CAPACITY as u64).collect();
    c.bench_function("queue_enqueue_all_oversized_batch", |b| {
        b.iter_batched(
            || filled(CAPACITY),
            |mut queue| black_box(queue.enqueue_all(batch.iter().copied())),
            BatchSize::SmallInput,
        )
    });
}

fn bench_dequeue_until_empty(c: &mut Criterion) {
    c.bench_function("queue_dequeue_until_empty", |b| {
        b.iter_batched(
            || filled(CAPACITY),
            |mut queue| {
                while let Some(v) = queue.dequeue() {
                    black_box(v);
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_contains_scan(c: &mut Criterion) {
    let queue = filled(CAPACITY);
    c.bench_function("queue_contains_scan", |b| {
        b.iter(|| {
            let _ = black_box(queue.contains(&black_box(CAPACITY as u64 / 2)));
            let _ = black_box(queue.contains(&black_box(u64::MAX)));
        })
    });
}

fn bench_drain_and_reset(c: &mut Criterion) {
    c.bench_function("queue_drain_and_reset", |b| {
        b.iter_batched(
            || filled(CAPACITY),
            |mut queue| black_box(queue.drain_and_reset()),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_enqueue_below_capacity,
    bench_enqueue_eviction_churn,
    bench_enqueue_all_oversized_batch,
    bench_dequeue_until_empty,
    bench_contains_scan,
    bench_drain_and_reset
);
criterion_main!(benches);
