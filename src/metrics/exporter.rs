use std::io::Write;
use std::sync::{Mutex, MutexGuard};

use crate::metrics::snapshot::StoreMetricsSnapshot;
use crate::metrics::traits::MetricsExporter;

/// Prometheus text exporter for store metrics snapshots.
///
/// Writes the Prometheus text exposition format so the output can be scraped
/// by Prometheus or forwarded to an OpenTelemetry collector.
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
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    // A panic mid-write only loses part of one export; keep writing.
    fn lock(&self) -> MutexGuard<'_, W> {
        self.writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_counter(&self, name: &str, value: u64) {
        let mut writer = self.lock();
        let _ = writeln!(writer, "# TYPE {} counter", name);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn write_gauge(&self, name: &str, value: u64) {
        let mut writer = self.lock();
        let _ = writeln!(writer, "# TYPE {} gauge", name);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn metric_name(&self, suffix: &str) -> String {
        if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }
}

impl<W: Write + Send> MetricsExporter<StoreMetricsSnapshot> for PrometheusTextExporter<W> {
    fn export(&self, snapshot: &StoreMetricsSnapshot) {
        let counters = [
            ("insert_calls_total", snapshot.insert_calls),
            ("insert_new_total", snapshot.insert_new),
            ("evicted_entries_total", snapshot.evicted_entries),
            ("touch_calls_total", snapshot.touch_calls),
            ("touch_hits_total", snapshot.touch_hits),
            ("touch_misses_total", snapshot.touch_misses),
            ("lookup_calls_total", snapshot.lookup_calls),
            ("lookup_hits_total", snapshot.lookup_hits),
            ("lookup_misses_total", snapshot.lookup_misses),
            ("scan_steps_total", snapshot.scan_steps),
            ("front_calls_total", snapshot.front_calls),
            ("front_found_total", snapshot.front_found),
            ("back_calls_total", snapshot.back_calls),
            ("back_found_total", snapshot.back_found),
            ("clear_calls_total", snapshot.clear_calls),
        ];
        for (suffix, value) in counters {
            self.write_counter(&self.metric_name(suffix), value);
        }
        self.write_gauge(&self.metric_name("len"), snapshot.len as u64);
        self.write_gauge(&self.metric_name("capacity"), snapshot.capacity as u64);
    }
}
