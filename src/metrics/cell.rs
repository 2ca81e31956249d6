use std::sync::atomic::{AtomicU64, Ordering};

/// A metrics-only counter cell.
///
/// Counters are observational and never feed back into queue behavior, so
/// every access uses `Relaxed` ordering. Being atomic lets read-only queue
/// operations (`contains`, `snapshot`) record through `&self` while the queue
/// stays `Sync` whenever its element type is.
#[repr(transparent)]
#[derive(Debug, Default)]
pub struct MetricsCell(AtomicU64);

impl MetricsCell {
    #[inline]
    pub fn new() -> Self {
        Self(AtomicU64::new(0))
    }

    #[inline]
    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn incr(&self) {
        self.add(1);
    }

    #[inline]
    pub fn add(&self, n: u64) {
        self.0.fetch_add(n, Ordering::Relaxed);
    }

    #[inline]
    pub fn reset(&self) {
        self.0.store(0, Ordering::Relaxed);
    }
}

impl Clone for MetricsCell {
    fn clone(&self) -> Self {
        Self(AtomicU64::new(self.get()))
    }
}
