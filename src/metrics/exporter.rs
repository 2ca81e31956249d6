use std::io::Write;
use std::sync::Mutex;

use crate::metrics::snapshot::QueueMetricsSnapshot;
use crate::metrics::traits::MetricsExporter;

/// Prometheus text exporter for queue metrics snapshots.
///
/// Writes the Prometheus text exposition format so output can be scraped by
/// Prometheus or forwarded to an OpenTelemetry collector. Write failures are
/// ignored; metrics export never disturbs the caller.
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write + Send> {
    prefix: String,
    writer: Mutex<W>,
}

impl<W: Write + Send> PrometheusTextExporter<W> {
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the exporter and returns the underlying writer.
    pub fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(w) => w,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_metric(&self, kind: &str, suffix: &str, value: u64) {
        let name = self.metric_name(suffix);
        let mut writer = match self.writer.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let _ = writeln!(writer, "# TYPE {} {}", name, kind);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn write_counter(&self, suffix: &str, value: u64) {
        self.write_metric("counter", suffix, value);
    }

    fn write_gauge(&self, suffix: &str, value: u64) {
        self.write_metric("gauge", suffix, value);
    }

    fn metric_name(&self, suffix: &str) -> String {
        if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }
}

impl<W: Write + Send> MetricsExporter<QueueMetricsSnapshot> for PrometheusTextExporter<W> {
    fn export(&self, snapshot: &QueueMetricsSnapshot) {
        self.write_counter("enqueue_calls_total", snapshot.enqueue_calls);
        self.write_counter("appended_total", snapshot.appended);
        self.write_counter("evicted_total", snapshot.evicted);
        self.write_counter("discarded_total", snapshot.discarded);
        self.write_counter("dequeue_calls_total", snapshot.dequeue_calls);
        self.write_counter("dequeue_hits_total", snapshot.dequeue_hits);
        self.write_counter("dequeue_empty_total", snapshot.dequeue_empty);
        self.write_counter("contains_calls_total", snapshot.contains_calls);
        self.write_counter("contains_hits_total", snapshot.contains_hits);
        self.write_counter("snapshot_calls_total", snapshot.snapshot_calls);
        self.write_counter("drain_calls_total", snapshot.drain_calls);
        self.write_counter("drained_entries_total", snapshot.drained_entries);
        self.write_gauge("len", snapshot.len as u64);
        self.write_gauge("capacity", snapshot.capacity as u64);
    }
}
