use std::sync::atomic::{AtomicU64, Ordering};

/// A counter that can be bumped through `&self`.
///
/// Used for reads such as `front()` and `back()` that only borrow the store
/// shared. Relaxed ordering: counts are observational and never gate logic.
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
        self.0.fetch_add(1, Ordering::Relaxed);
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incr_get_reset() {
        let cell = MetricsCell::new();
        cell.incr();
        cell.incr();
        assert_eq!(cell.get(), 2);
        assert_eq!(cell.clone().get(), 2);
        cell.reset();
        assert_eq!(cell.get(), 0);
    }
}
