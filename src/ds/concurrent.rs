//! Lock-holding wrapper for sharing an [`LruStore`] across threads.
//!
//! The store itself never locks. `ConcurrentLruStore` is the caller-side lock:
//! it owns the store inside a `parking_lot::RwLock`. Scans and inserts take
//! the write lock because they reorder; peeks take the read lock. No
//! reference into the store escapes a lock guard, so accessors take closures.

use parking_lot::RwLock;

use crate::ds::lru_store::LruStore;
use crate::error::ConfigError;

#[cfg(feature = "metrics")]
use crate::metrics::snapshot::StoreMetricsSnapshot;

#[derive(Debug)]
/// Thread-safe wrapper around `LruStore` using a `parking_lot::RwLock`.
pub struct ConcurrentLruStore<T> {
    inner: RwLock<LruStore<T>>,
}

impl<T> ConcurrentLruStore<T> {
    /// Creates an empty concurrent store.
    ///
    /// # Panics
    ///
    /// Panics on an invalid capacity, like [`LruStore::new`].
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: RwLock::new(LruStore::new(capacity)),
        }
    }

    /// Creates an empty concurrent store, rejecting an invalid capacity.
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            inner: RwLock::new(LruStore::try_new(capacity)?),
        })
    }

    /// Wraps an existing store.
    pub fn from_store(store: LruStore<T>) -> Self {
        Self {
            inner: RwLock::new(store),
        }
    }

    /// Unwraps the store.
    pub fn into_inner(self) -> LruStore<T> {
        self.inner.into_inner()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        let store = self.inner.read();
        store.len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        let store = self.inner.read();
        store.is_empty()
    }

    /// Returns the fixed capacity.
    pub fn capacity(&self) -> usize {
        let store = self.inner.read();
        store.capacity()
    }

    /// Inserts a value at the front; returns the evicted value, if any.
    pub fn insert(&self, value: T) -> Option<T> {
        let mut store = self.inner.write();
        store.insert(value)
    }

    /// Tries to insert without blocking. Hands `value` back if the lock is busy.
    pub fn try_insert(&self, value: T) -> Result<Option<T>, T> {
        match self.inner.try_write() {
            Some(mut store) => Ok(store.insert(value)),
            None => Err(value),
        }
    }

    /// Promotes the first entry matching `pred`; returns `false` on a miss.
    pub fn touch(&self, pred: impl FnMut(&T) -> bool) -> bool {
        let mut store = self.inner.write();
        store.touch(pred)
    }

    /// Tries to touch without blocking.
    pub fn try_touch(&self, pred: impl FnMut(&T) -> bool) -> Option<bool> {
        let mut store = self.inner.try_write()?;
        Some(store.touch(pred))
    }

    /// Promotes the first entry for which `pred` returns `Some` and returns that result.
    pub fn lookup<R>(&self, pred: impl FnMut(&mut T) -> Option<R>) -> Option<R> {
        let mut store = self.inner.write();
        store.lookup(pred)
    }

    /// Tries to look up without blocking.
    pub fn try_lookup<R>(&self, pred: impl FnMut(&mut T) -> Option<R>) -> Option<Option<R>> {
        let mut store = self.inner.try_write()?;
        Some(store.lookup(pred))
    }

    /// Runs `f` on the most-recently-used value, if present.
    pub fn front_with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        let store = self.inner.read();
        store.front().map(f)
    }

    /// Tries to run `f` on the front value without blocking.
    pub fn try_front_with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        let store = self.inner.try_read()?;
        store.front().map(f)
    }

    /// Runs `f` on the least-recently-used value, if present.
    pub fn back_with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        let store = self.inner.read();
        store.back().map(f)
    }

    /// Runs `f` with shared access to the whole store.
    pub fn with_store<R>(&self, f: impl FnOnce(&LruStore<T>) -> R) -> R {
        let store = self.inner.read();
        f(&store)
    }

    /// Runs `f` with exclusive access to the whole store.
    pub fn with_store_mut<R>(&self, f: impl FnOnce(&mut LruStore<T>) -> R) -> R {
        let mut store = self.inner.write();
        f(&mut store)
    }

    /// Clears the store.
    pub fn clear(&self) {
        let mut store = self.inner.write();
        store.clear();
    }

    /// Tries to clear the store without blocking.
    pub fn try_clear(&self) -> bool {
        if let Some(mut store) = self.inner.try_write() {
            store.clear();
            true
        } else {
            false
        }
    }

    #[cfg(feature = "metrics")]
    /// Returns a copy of the store's counters.
    pub fn metrics_snapshot(&self) -> StoreMetricsSnapshot {
        let store = self.inner.read();
        store.metrics_snapshot()
    }
}

impl<T: Clone> ConcurrentLruStore<T> {
    /// Returns a clone of the most-recently-used value.
    pub fn front_cloned(&self) -> Option<T> {
        self.front_with(T::clone)
    }

    /// Returns the values from most- to least-recently-used.
    pub fn to_vec(&self) -> Vec<T> {
        let store = self.inner.read();
        store.iter().cloned().collect()
    }
}

impl<T> From<LruStore<T>> for ConcurrentLruStore<T> {
    fn from(store: LruStore<T>) -> Self {
        Self::from_store(store)
    }
}
