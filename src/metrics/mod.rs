//! Store counters, snapshots and exporters (feature `metrics`).

pub mod cell;
pub mod exporter;
pub mod snapshot;
pub mod store_metrics;
pub mod traits;

pub use exporter::PrometheusTextExporter;
pub use snapshot::StoreMetricsSnapshot;
pub use store_metrics::StoreMetrics;
