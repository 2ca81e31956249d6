//! Workload generators for queue benchmarks.
//!
//! Models producer/consumer mixes as deterministic operation streams so every
//! benchmark run sees the same sequence for a given seed.

use boundq::{BoundedQueue, Enqueued};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone, Copy)]
pub enum Workload {
    /// Every step produces one value; none are consumed.
    ProducerOnly,
    /// Every step produces one value, then consumes one with `consume_prob`.
    Steady { consume_prob: f64 },
    /// Produces batches of `1..=max_burst` values and drains the whole queue
    /// with `drain_prob` after each batch.
    Bursty { max_burst: usize, drain_prob: f64 },
    /// Like `Steady`, with a membership probe over a small value window
    /// before each produce.
    Dedup { consume_prob: f64, window: u64 },
}

#[derive(Debug, Clone, Copy)]
pub struct WorkloadSpec {
    pub workload: Workload,
    pub seed: u64,
}

impl WorkloadSpec {
    pub fn generator(self) -> WorkloadGenerator {
        WorkloadGenerator::new(self.workload, self.seed)
    }
}

#[derive(Debug, Clone)]
pub enum QueueOp {
    Enqueue(u64),
    EnqueueAll(Vec<u64>),
    Dequeue,
    Contains(u64),
    Drain,
}

#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    workload: Workload,
    rng: SmallRng,
    next_value: u64,
}

impl WorkloadGenerator {
    pub fn new(workload: Workload, seed: u64) -> Self {
        Self {
            workload,
            rng: SmallRng::seed_from_u64(seed),
            next_value: 0,
        }
    }

    fn produce(&mut self) -> u64 {
        let value = self.next_value;
        self.next_value += 1;
        value
    }

    /// Pushes the operations for one workload step onto `out`.
    pub fn next_step(&mut self, out: &mut Vec<QueueOp>) {
        match self.workload {
            Workload::ProducerOnly => {
                let v = self.produce();
                out.push(QueueOp::Enqueue(v));
            },
            Workload::Steady { consume_prob } => {
                let v = self.produce();
                out.push(QueueOp::Enqueue(v));
                if self.rng.random::<f64>() < consume_prob {
                    out.push(QueueOp::Dequeue);
                }
            },
            Workload::Bursty {
                max_burst,
                drain_prob,
            } => {
                let len = self.rng.random_range(1..=max_burst.max(1));
                let batch = (0..len).map(|_| self.produce()).collect();
                out.push(QueueOp::EnqueueAll(batch));
                if self.rng.random::<f64>() < drain_prob {
                    out.push(QueueOp::Drain);
                }
            },
            Workload::Dedup {
                consume_prob,
                window,
            } => {
                let probe = self.next_value.saturating_sub(self.rng.random_range(0..window.max(1)));
                out.push(QueueOp::Contains(probe));
                let v = self.produce();
                out.push(QueueOp::Enqueue(v));
                if self.rng.random::<f64>() < consume_prob {
                    out.push(QueueOp::Dequeue);
                }
            },
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WorkloadStats {
    pub enqueued: u64,
    pub evicted: u64,
    pub dequeued: u64,
    pub empty_polls: u64,
    pub drained: u64,
    pub contains_hits: u64,
}

impl WorkloadStats {
    /// Fraction of produced values lost to eviction.
    pub fn loss_rate(self) -> f64 {
        if self.enqueued == 0 {
            0.0
        } else {
            self.evicted as f64 / self.enqueued as f64
        }
    }
}

/// Run `steps` workload steps against `queue`.
pub fn run_workload(
    queue: &mut BoundedQueue<u64>,
    generator: &mut WorkloadGenerator,
    steps: usize,
) -> WorkloadStats {
    let mut stats = WorkloadStats::default();
    let mut ops = Vec::with_capacity(4);

    for _ in 0..steps {
        ops.clear();
        generator.next_step(&mut ops);
        for op in ops.drain(..) {
            match op {
                QueueOp::Enqueue(v) => {
                    stats.enqueued += 1;
                    if let Enqueued::Evicted(_) = queue.enqueue(v) {
                        stats.evicted += 1;
                    }
                },
                QueueOp::EnqueueAll(batch) => {
                    stats.enqueued += batch.len() as u64;
                    stats.evicted += queue.enqueue_all(batch) as u64;
                },
                QueueOp::Dequeue => match queue.dequeue() {
                    Some(_) => stats.dequeued += 1,
                    None => stats.empty_polls += 1,
                },
                QueueOp::Contains(v) => {
                    if queue.contains(&v) {
                        stats.contains_hits += 1;
                    }
                },
                QueueOp::Drain => {
                    stats.drained += queue.drain_and_reset().len() as u64;
                },
            }
        }
    }

    stats
}
