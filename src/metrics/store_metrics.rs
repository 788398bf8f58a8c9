use crate::metrics::cell::MetricsCell;
use crate::metrics::snapshot::StoreMetricsSnapshot;
use crate::metrics::traits::{
    CoreMetricsRecorder, StoreMetricsReadRecorder, StoreMetricsRecorder,
};

/// Live counters owned by an [`LruStore`](crate::ds::LruStore).
#[derive(Debug, Default, Clone)]
pub struct StoreMetrics {
    pub insert_calls: u64,
    pub insert_new: u64,
    pub evicted_entries: u64,
    pub touch_calls: u64,
    pub touch_hits: u64,
    pub touch_misses: u64,
    pub lookup_calls: u64,
    pub lookup_hits: u64,
    pub lookup_misses: u64,
    pub scan_steps: u64,
    pub clear_calls: u64,
    pub front_calls: MetricsCell,
    pub front_found: MetricsCell,
    pub back_calls: MetricsCell,
    pub back_found: MetricsCell,
}

impl StoreMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies the counters, adding the `len`/`capacity` gauges.
    pub fn snapshot(&self, len: usize, capacity: usize) -> StoreMetricsSnapshot {
        StoreMetricsSnapshot {
            insert_calls: self.insert_calls,
            insert_new: self.insert_new,
            evicted_entries: self.evicted_entries,
            touch_calls: self.touch_calls,
            touch_hits: self.touch_hits,
            touch_misses: self.touch_misses,
            lookup_calls: self.lookup_calls,
            lookup_hits: self.lookup_hits,
            lookup_misses: self.lookup_misses,
            scan_steps: self.scan_steps,
            front_calls: self.front_calls.get(),
            front_found: self.front_found.get(),
            back_calls: self.back_calls.get(),
            back_found: self.back_found.get(),
            clear_calls: self.clear_calls,
            len,
            capacity,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl CoreMetricsRecorder for StoreMetrics {
    fn record_insert_call(&mut self) {
        self.insert_calls += 1;
    }

    fn record_insert_new(&mut self) {
        self.insert_new += 1;
    }

    fn record_evicted_entry(&mut self) {
        self.evicted_entries += 1;
    }

    fn record_clear(&mut self) {
        self.clear_calls += 1;
    }
}

impl StoreMetricsRecorder for StoreMetrics {
    fn record_touch_hit(&mut self) {
        self.touch_calls += 1;
        self.touch_hits += 1;
    }

    fn record_touch_miss(&mut self) {
        self.touch_calls += 1;
        self.touch_misses += 1;
    }

    fn record_lookup_hit(&mut self) {
        self.lookup_calls += 1;
        self.lookup_hits += 1;
    }

    fn record_lookup_miss(&mut self) {
        self.lookup_calls += 1;
        self.lookup_misses += 1;
    }

    fn record_scan_steps(&mut self, steps: u64) {
        self.scan_steps += steps;
    }
}

impl StoreMetricsReadRecorder for StoreMetrics {
    fn record_front_call(&self) {
        self.front_calls.incr();
    }

    fn record_front_found(&self) {
        self.front_found.incr();
    }

    fn record_back_call(&self) {
        self.back_calls.incr();
    }

    fn record_back_found(&self) {
        self.back_found.incr();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hits_and_misses_bump_call_counts() {
        let mut metrics = StoreMetrics::new();
        metrics.record_touch_hit();
        metrics.record_touch_miss();
        metrics.record_lookup_miss();
        metrics.record_scan_steps(7);

        let snapshot = metrics.snapshot(3, 8);
        assert_eq!(snapshot.touch_calls, 2);
        assert_eq!(snapshot.touch_hits, 1);
        assert_eq!(snapshot.touch_misses, 1);
        assert_eq!(snapshot.lookup_calls, 1);
        assert_eq!(snapshot.lookup_misses, 1);
        assert_eq!(snapshot.scan_steps, 7);
        assert_eq!(snapshot.len, 3);
        assert_eq!(snapshot.capacity, 8);
    }

    #[test]
    fn read_recorder_works_through_shared_ref() {
        let metrics = StoreMetrics::new();
        let shared = &metrics;
        shared.record_front_call();
        shared.record_front_found();
        shared.record_back_call();
        let snapshot = metrics.snapshot(0, 1);
        assert_eq!(snapshot.front_calls, 1);
        assert_eq!(snapshot.front_found, 1);
        assert_eq!(snapshot.back_calls, 1);
        assert_eq!(snapshot.back_found, 0);
    }

    #[test]
    fn reset_zeroes_everything() {
        let mut metrics = StoreMetrics::new();
        metrics.record_insert_call();
        metrics.record_evicted_entry();
        metrics.record_front_call();
        metrics.reset();
        assert_eq!(metrics.snapshot(0, 1), StoreMetricsSnapshot {
            capacity: 1,
            ..Default::default()
        });
    }
}
