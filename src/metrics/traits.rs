//! # Metrics Trait Hierarchy
//!
//! Recording, snapshotting and export are split into small traits so the
//! store only ever writes counters, while tests and monitoring read them.
//!
//! ```text
//!   ┌──────────────────────────┐      ┌──────────────────────────────┐
//!   │   CoreMetricsRecorder    │      │  StoreMetricsReadRecorder    │
//!   │  insert/evict/clear      │      │  front/back peeks (&self)    │
//!   └────────────┬─────────────┘      └──────────────────────────────┘
//!                │
//!                ▼
//!   ┌──────────────────────────┐
//!   │   StoreMetricsRecorder   │
//!   │  touch/lookup hit+miss   │
//!   │  scan steps              │
//!   └──────────────────────────┘
//!
//!   Consumption (decoupled from recording):
//!   ┌──────────────────────────────┐    ┌──────────────────────────────┐
//!   │ MetricsSnapshotProvider<S>   │    │ MetricsExporter<S>           │
//!   │ (bench/test)                 │    │ (production monitoring)      │
//!   └──────────────────────────────┘    └──────────────────────────────┘
//! ```

/// Counters shared by every store operation that changes contents.
pub trait CoreMetricsRecorder {
    fn record_insert_call(&mut self);
    fn record_insert_new(&mut self);
    fn record_evicted_entry(&mut self);
    fn record_clear(&mut self);
}

/// Counters for the scanning operations.
pub trait StoreMetricsRecorder: CoreMetricsRecorder {
    fn record_touch_hit(&mut self);
    fn record_touch_miss(&mut self);
    fn record_lookup_hit(&mut self);
    fn record_lookup_miss(&mut self);
    fn record_scan_steps(&mut self, steps: u64);
}

/// Read-only counters for `&self` methods (uses interior mutability).
pub trait StoreMetricsReadRecorder {
    fn record_front_call(&self);
    fn record_front_found(&self);
    fn record_back_call(&self);
    fn record_back_found(&self);
}

/// Snapshot provider for bench/testing.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Export/publish metrics to production monitoring backends.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
