use boundq::prelude::*;

fn main() {
    // Keep the 3 most recent readings
    let mut recent = BoundedQueue::new(3);

    for reading in [12, 15, 11, 18, 20] {
        if let Enqueued::Evicted(old) = recent.enqueue(reading) {
            println!("dropped stale reading {}", old);
        }
    }

    println!("latest readings: {:?}", recent.snapshot());

    // Hand the batch to a consumer and start over with the same capacity
    let batch = recent.drain_and_reset();
    println!("flushed {} readings, queue now holds {}", batch.len(), recent.len());
}
