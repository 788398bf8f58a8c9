/// Point-in-time copy of a store's counters.
///
/// `len` and `capacity` are gauges captured when the snapshot is taken.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StoreMetricsSnapshot {
    pub insert_calls: u64,
    pub insert_new: u64,
    pub evicted_entries: u64,

    pub touch_calls: u64,
    pub touch_hits: u64,
    pub touch_misses: u64,

    pub lookup_calls: u64,
    pub lookup_hits: u64,
    pub lookup_misses: u64,

    // entries visited by touch/lookup/find scans
    pub scan_steps: u64,

    pub front_calls: u64,
    pub front_found: u64,
    pub back_calls: u64,
    pub back_found: u64,

    pub clear_calls: u64,

    pub len: usize,
    pub capacity: usize,
}

impl StoreMetricsSnapshot {
    /// Fraction of touch/lookup calls that found a match, or `0.0` with no calls.
    pub fn hit_ratio(&self) -> f64 {
        let calls = self.touch_calls + self.lookup_calls;
        if calls == 0 {
            return 0.0;
        }
        (self.touch_hits + self.lookup_hits) as f64 / calls as f64
    }

    /// Mean entries visited per scan, or `0.0` with no scans.
    pub fn mean_scan_length(&self) -> f64 {
        let calls = self.touch_calls + self.lookup_calls;
        if calls == 0 {
            return 0.0;
        }
        self.scan_steps as f64 / calls as f64
    }
}
