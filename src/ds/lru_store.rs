//! Bounded LRU store with index-linked recency order.
//!
//! Entries live in one `Vec` allocated once at construction with exactly
//! `capacity` slots. The recency order is a doubly linked chain embedded in
//! that array: each entry carries `prev`/`next` slot indices instead of
//! pointers, so the array is the sole owner of every entry.
//!
//! ## Architecture
//!
//! ```text
//!   entries (Vec<Entry<T>>, capacity fixed)
//!   ┌──────┬────────────────────────────────┐
//!   │ slot │ Entry { value, prev, next }    │
//!   ├──────┼────────────────────────────────┤
//!   │  0   │ { value: A, prev: 1, next: _ } │  ◄── tail (LRU)
//!   │  1   │ { value: B, prev: 2, next: 0 } │
//!   │  2   │ { value: C, prev: _, next: 1 } │  ◄── head (MRU)
//!   └──────┴────────────────────────────────┘
//!
//!   head ─► [2] ◄──► [1] ◄──► [0] ◄── tail        `_` = stale, never read
//! ```
//!
//! ## Operations
//! - `insert(v)`: fill the next free slot, or overwrite the tail slot when
//!   full; either way the slot is spliced in at the head
//! - `touch(p)` / `lookup(p)` / `find(p)`: scan head-to-tail with a
//!   [`CursorMut`], promote the first match to the head
//! - `touch_index(i)`: `unlink(i)` then `push_front(i)`
//!
//! Entries are never removed one at a time, so slots `0..len` are always
//! occupied and always linked. `clear` drops everything at once.
//!
//! ## Performance
//! - `insert`, `front`, `back`, `touch_index`: O(1)
//! - `touch`, `lookup`, `find`: O(n) scan (there is no key index)
//! - no allocation after construction
//!
//! The store is not synchronized. Share it behind a lock held by the caller,
//! or use `ConcurrentLruStore` with the `concurrency` feature.

use std::fmt;
use std::mem;

use crate::config::LruConfig;
use crate::ds::cursor::{CursorMut, Iter};
use crate::ds::index::{Entry, Index};
use crate::error::{ConfigError, InvariantError};

#[cfg(feature = "metrics")]
use crate::metrics::snapshot::StoreMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::store_metrics::StoreMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    CoreMetricsRecorder, MetricsSnapshotProvider, StoreMetricsReadRecorder, StoreMetricsRecorder,
};

/// A fixed-capacity least-recently-used store.
///
/// # Example
///
/// ```
/// use indexlru::ds::LruStore;
///
/// let mut store = LruStore::new(3);
/// store.insert("a");
/// store.insert("b");
/// store.insert("c");
///
/// // Promote "a" to most-recently-used
/// assert!(store.touch(|v| *v == "a"));
///
/// // Full: inserting evicts the least-recently-used entry ("b")
/// assert_eq!(store.insert("d"), Some("b"));
/// assert_eq!(store.iter().copied().collect::<Vec<_>>(), vec!["d", "a", "c"]);
/// ```
pub struct LruStore<T> {
    pub(crate) entries: Vec<Entry<T>>,
    pub(crate) head: u16,
    pub(crate) tail: u16,
    len: usize,
    capacity: usize,
    #[cfg(feature = "metrics")]
    metrics: StoreMetrics,
}

impl<T> LruStore<T> {
    /// Creates an empty store holding at most `capacity` entries.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero or greater than
    /// [`MAX_CAPACITY`](crate::ds::MAX_CAPACITY). Use
    /// [`try_new`](Self::try_new) for a non-panicking constructor.
    pub fn new(capacity: usize) -> Self {
        match Self::try_new(capacity) {
            Ok(store) => store,
            Err(err) => panic!("invalid LruStore capacity: {}", err),
        }
    }

    /// Creates an empty store, rejecting an invalid capacity.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is zero or greater than
    /// [`MAX_CAPACITY`](crate::ds::MAX_CAPACITY).
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        Self::from_config(&LruConfig::new(capacity))
    }

    /// Creates an empty store from a config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the config does not validate.
    pub fn from_config(config: &LruConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            entries: Vec::with_capacity(config.capacity),
            head: 0,
            tail: 0,
            len: 0,
            capacity: config.capacity,
            #[cfg(feature = "metrics")]
            metrics: StoreMetrics::new(),
        })
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the store holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the fixed capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if the next `insert` will evict.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    /// Returns the most-recently-used value without changing order.
    pub fn front(&self) -> Option<&T> {
        #[cfg(feature = "metrics")]
        self.metrics.record_front_call();

        if self.is_empty() {
            return None;
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_front_found();

        Some(&self.entries[self.head as usize].value)
    }

    /// Returns the most-recently-used value mutably without changing order.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        #[cfg(feature = "metrics")]
        self.metrics.record_front_call();

        if self.is_empty() {
            return None;
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_front_found();

        Some(&mut self.entries[self.head as usize].value)
    }

    /// Returns the least-recently-used value (the next eviction victim).
    pub fn back(&self) -> Option<&T> {
        #[cfg(feature = "metrics")]
        self.metrics.record_back_call();

        if self.is_empty() {
            return None;
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_back_found();

        Some(&self.entries[self.tail as usize].value)
    }

    /// Inserts `value` as the most-recently-used entry.
    ///
    /// When the store is full, the least-recently-used entry's slot is
    /// overwritten and the old value is returned.
    pub fn insert(&mut self, value: T) -> Option<T> {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        if self.is_full() {
            let index = self.pop_back();
            let evicted = mem::replace(&mut self.entries[index as usize].value, value);
            self.push_front(index);

            #[cfg(feature = "metrics")]
            self.metrics.record_evicted_entry();

            return Some(evicted);
        }

        debug_assert_eq!(self.entries.len(), self.len);
        // len < capacity <= MAX_CAPACITY, so the slot index fits in u16.
        let index = self.len as u16;
        self.entries.push(Entry::new(value));
        self.len += 1;
        self.push_front(index);

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();

        None
    }

    /// Promotes the first entry matching `pred` to most-recently-used.
    ///
    /// Returns `false` on a miss, leaving the order unchanged.
    pub fn touch<F>(&mut self, mut pred: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        match self.scan(|value| pred(&*value).then_some(())) {
            Some((index, ())) => {
                #[cfg(feature = "metrics")]
                self.metrics.record_touch_hit();

                self.touch_index(index);
                true
            },
            None => {
                #[cfg(feature = "metrics")]
                self.metrics.record_touch_miss();

                false
            },
        }
    }

    /// Scans for the first entry for which `pred` returns `Some`, promotes it
    /// and returns the predicate's result.
    ///
    /// The predicate may mutate the value it inspects. Scanning runs
    /// head-to-tail, so among several matches the most recently used wins.
    ///
    /// ```
    /// use indexlru::ds::LruStore;
    ///
    /// let mut store = LruStore::new(4);
    /// store.insert((1, "one"));
    /// store.insert((2, "two"));
    ///
    /// let name = store.lookup(|&mut (k, v)| (k == 1).then_some(v));
    /// assert_eq!(name, Some("one"));
    /// assert_eq!(store.front(), Some(&(1, "one")));
    /// ```
    pub fn lookup<F, R>(&mut self, pred: F) -> Option<R>
    where
        F: FnMut(&mut T) -> Option<R>,
    {
        match self.scan(pred) {
            Some((index, result)) => {
                #[cfg(feature = "metrics")]
                self.metrics.record_lookup_hit();

                self.touch_index(index);
                Some(result)
            },
            None => {
                #[cfg(feature = "metrics")]
                self.metrics.record_lookup_miss();

                None
            },
        }
    }

    /// Promotes the first entry matching `pred` and returns it mutably.
    pub fn find<F>(&mut self, mut pred: F) -> Option<&mut T>
    where
        F: FnMut(&T) -> bool,
    {
        self.lookup(|value| pred(&*value).then_some(()))?;
        // the match is now the head
        Some(&mut self.entries[self.head as usize].value)
    }

    /// Moves the entry at `index` to the head without changing `len`.
    ///
    /// A no-op if `index` is already the head.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below `len()`.
    pub fn touch_index(&mut self, index: Index) {
        let i = index.0;
        assert!(
            index.get() < self.len,
            "touch_index: slot {} is not linked (len {})",
            i,
            self.len
        );
        if i == self.head {
            return;
        }
        self.unlink(i);
        self.len += 1;
        self.push_front(i);
    }

    /// Drops every entry. Capacity is kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.head = 0;
        self.tail = 0;
        self.len = 0;

        #[cfg(feature = "metrics")]
        self.metrics.record_clear();
    }

    /// Returns a shared iterator from most- to least-recently-used.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Returns an exclusive cursor from most- to least-recently-used.
    ///
    /// Walking the cursor does not change the order.
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self)
    }

    /// Walks the chain and reports the first broken invariant.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantError`] naming the violated invariant.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.len > self.capacity {
            return Err(InvariantError::new(format!(
                "len {} exceeds capacity {}",
                self.len, self.capacity
            )));
        }
        if self.entries.len() != self.len {
            return Err(InvariantError::new(format!(
                "{} occupied slots but len is {}",
                self.entries.len(),
                self.len
            )));
        }
        if self.len == 0 {
            return Ok(());
        }

        let mut seen = vec![false; self.len];
        let mut current = self.head;
        for step in 0..self.len {
            let i = current as usize;
            if i >= self.len {
                return Err(InvariantError::new(format!(
                    "step {} reached unoccupied slot {}",
                    step, i
                )));
            }
            if seen[i] {
                return Err(InvariantError::new(format!(
                    "slot {} visited twice (cycle) at step {}",
                    i, step
                )));
            }
            seen[i] = true;

            if step + 1 == self.len {
                if current != self.tail {
                    return Err(InvariantError::new(format!(
                        "chain ends at slot {} but tail is {}",
                        current, self.tail
                    )));
                }
                break;
            }

            let next = self.entries[i].next;
            if (next as usize) < self.len && self.entries[next as usize].prev != current {
                return Err(InvariantError::new(format!(
                    "slot {} links to {} but {}.prev is {}",
                    current, next, next, self.entries[next as usize].prev
                )));
            }
            current = next;
        }
        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    /// Panics if any invariant checked by [`check_invariants`](Self::check_invariants) fails.
    pub fn debug_validate_invariants(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("LruStore invariant violated: {}", err);
        }
    }

    #[cfg(feature = "metrics")]
    /// Returns a copy of the store's counters.
    pub fn metrics_snapshot(&self) -> StoreMetricsSnapshot {
        self.metrics.snapshot(self.len, self.capacity)
    }

    #[cfg(feature = "metrics")]
    /// Zeroes the store's counters.
    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }

    // -----------------------------------------------------------------------
    // Linkage primitives
    // -----------------------------------------------------------------------

    /// Scans head-to-tail; returns the first match and its slot.
    fn scan<F, R>(&mut self, mut pred: F) -> Option<(Index, R)>
    where
        F: FnMut(&mut T) -> Option<R>,
    {
        let mut cursor = self.cursor_mut();
        let mut found = None;
        while let Some((index, value)) = cursor.next() {
            if let Some(result) = pred(value) {
                found = Some((index, result));
                break;
            }
        }

        #[cfg(feature = "metrics")]
        let steps = cursor.visited() as u64;
        #[cfg(feature = "metrics")]
        self.metrics.record_scan_steps(steps);

        found
    }

    /// Splices `index` in as the new head. `len` must already count it.
    fn push_front(&mut self, index: u16) {
        if self.len == 1 {
            self.tail = index;
        } else {
            self.entries[index as usize].next = self.head;
            self.entries[self.head as usize].prev = index;
        }
        self.head = index;
    }

    /// Detaches the tail pointer and returns the old tail slot.
    ///
    /// The slot stays populated and `len` is untouched; the caller overwrites
    /// it and splices it back in.
    fn pop_back(&mut self) -> u16 {
        debug_assert!(self.len > 0, "pop_back on an empty store");
        let old_tail = self.tail;
        self.tail = self.entries[old_tail as usize].prev;
        old_tail
    }

    /// Removes `index` from the chain and decrements `len`.
    fn unlink(&mut self, index: u16) {
        assert!(self.len > 0, "unlink on an empty store");
        debug_assert!((index as usize) < self.len);

        let (prev, next) = {
            let entry = &self.entries[index as usize];
            (entry.prev, entry.next)
        };

        if index == self.head {
            self.head = next;
        } else {
            self.entries[prev as usize].next = next;
        }

        if index == self.tail {
            self.tail = prev;
        } else {
            self.entries[next as usize].prev = prev;
        }

        self.len -= 1;
    }
}

impl<T: Clone> Clone for LruStore<T> {
    fn clone(&self) -> Self {
        let mut entries = Vec::with_capacity(self.capacity);
        entries.extend(self.entries.iter().cloned());
        Self {
            entries,
            head: self.head,
            tail: self.tail,
            len: self.len,
            capacity: self.capacity,
            #[cfg(feature = "metrics")]
            metrics: self.metrics.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LruStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruStore")
            .field("capacity", &self.capacity)
            .field("len", &self.len)
            .field("order", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<T> Extend<T> for LruStore<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

#[cfg(feature = "metrics")]
impl<T> MetricsSnapshotProvider<StoreMetricsSnapshot> for LruStore<T> {
    fn snapshot(&self) -> StoreMetricsSnapshot {
        self.metrics_snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order<T: Clone>(store: &LruStore<T>) -> Vec<T> {
        store.iter().cloned().collect()
    }

    #[test]
    fn new_store_is_empty() {
        let store: LruStore<u32> = LruStore::new(4);
        assert!(store.is_empty());
        assert!(!store.is_full());
        assert_eq!(store.len(), 0);
        assert_eq!(store.capacity(), 4);
        assert_eq!(store.front(), None);
        assert_eq!(store.back(), None);
        store.debug_validate_invariants();
    }

    #[test]
    fn backing_array_is_allocated_once() {
        let mut store = LruStore::new(8);
        let cap = store.entries.capacity();
        assert!(cap >= 8);
        for i in 0..100 {
            store.insert(i);
        }
        assert_eq!(store.entries.capacity(), cap);
    }

    #[test]
    fn clone_keeps_full_backing_array() {
        let mut store = LruStore::new(8);
        store.insert(1);
        let mut copy = store.clone();
        let cap = copy.entries.capacity();
        assert!(cap >= 8);
        for i in 2..20 {
            copy.insert(i);
        }
        assert_eq!(copy.entries.capacity(), cap);
        copy.debug_validate_invariants();
    }

    #[test]
    fn fill_at_max_capacity() {
        let mut store = LruStore::new(crate::ds::MAX_CAPACITY);
        for i in 0..crate::ds::MAX_CAPACITY as u32 {
            assert_eq!(store.insert(i), None);
        }
        assert!(store.is_full());
        assert_eq!(store.front(), Some(&(crate::ds::MAX_CAPACITY as u32 - 1)));

        assert_eq!(store.insert(u32::MAX), Some(0));
        assert_eq!(store.insert(u32::MAX - 1), Some(1));
        assert!(store.touch(|v| *v == 2));
        assert_eq!(store.front(), Some(&2));
        assert_eq!(store.back(), Some(&3));
        store.debug_validate_invariants();
    }

    #[test]
    #[should_panic(expected = "capacity must be greater than zero")]
    fn zero_capacity_panics() {
        let _ = LruStore::<u8>::new(0);
    }

    #[test]
    fn oversized_capacity_is_rejected() {
        let err = LruStore::<u8>::try_new(crate::ds::MAX_CAPACITY + 1).unwrap_err();
        assert!(err.message().contains("exceeds"));
    }

    #[test]
    fn insert_below_capacity_never_evicts() {
        let mut store = LruStore::new(5);
        for i in 0..5 {
            assert_eq!(store.insert(i), None);
            assert_eq!(store.len(), i + 1);
            assert_eq!(store.front(), Some(&i));
            store.debug_validate_invariants();
        }
        assert!(store.is_full());
        assert_eq!(order(&store), vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn insert_when_full_evicts_tail() {
        let mut store = LruStore::new(3);
        store.extend([1, 2, 3]);
        assert_eq!(store.back(), Some(&1));

        assert_eq!(store.insert(4), Some(1));
        assert_eq!(store.len(), 3);
        assert_eq!(store.front(), Some(&4));
        assert_eq!(store.back(), Some(&2));
        assert_eq!(order(&store), vec![4, 3, 2]);
        store.debug_validate_invariants();
    }

    #[test]
    fn capacity_one_replaces_on_every_insert() {
        let mut store = LruStore::new(1);
        assert_eq!(store.insert("a"), None);
        assert_eq!(store.insert("b"), Some("a"));
        assert_eq!(store.insert("c"), Some("b"));
        assert_eq!(order(&store), vec!["c"]);
        assert!(store.touch(|v| *v == "c"));
        assert!(!store.touch(|v| *v == "a"));
        store.debug_validate_invariants();
    }

    #[test]
    fn touch_promotes_match() {
        let mut store = LruStore::new(3);
        store.extend(["a", "b", "c"]);
        assert_eq!(order(&store), vec!["c", "b", "a"]);

        assert!(store.touch(|v| *v == "a"));
        assert_eq!(order(&store), vec!["a", "c", "b"]);
        assert_eq!(store.len(), 3);

        assert_eq!(store.insert("d"), Some("b"));
        assert_eq!(order(&store), vec!["d", "a", "c"]);
        store.debug_validate_invariants();
    }

    #[test]
    fn touch_miss_leaves_order_unchanged() {
        let mut store = LruStore::new(4);
        store.extend([1, 2, 3]);
        let before = order(&store);
        assert!(!store.touch(|v| *v == 42));
        assert_eq!(order(&store), before);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn touch_middle_entry() {
        let mut store = LruStore::new(5);
        store.extend([1, 2, 3, 4, 5]);
        assert!(store.touch(|v| *v == 3));
        assert_eq!(order(&store), vec![3, 5, 4, 2, 1]);
        assert!(store.touch(|v| *v == 1));
        assert_eq!(order(&store), vec![1, 3, 5, 4, 2]);
        assert_eq!(store.back(), Some(&2));
        store.debug_validate_invariants();
    }

    #[test]
    fn lookup_returns_derived_result_and_promotes() {
        let mut store = LruStore::new(3);
        store.extend([(1, "one"), (2, "two"), (3, "three")]);

        let len = store.lookup(|(k, v)| (*k == 2).then(|| v.len()));
        assert_eq!(len, Some(3));
        assert_eq!(store.front(), Some(&(2, "two")));

        assert_eq!(store.lookup(|(k, _)| (*k == 9).then_some(())), None);
        assert_eq!(store.front(), Some(&(2, "two")));
    }

    #[test]
    fn lookup_ties_resolve_to_most_recent() {
        let mut store = LruStore::new(4);
        store.extend([(1, 'a'), (1, 'b'), (2, 'c')]);
        let hit = store.lookup(|&mut (k, tag)| (k == 1).then_some(tag));
        assert_eq!(hit, Some('b'));
    }

    #[test]
    fn lookup_predicate_can_mutate() {
        let mut store = LruStore::new(3);
        store.extend([1, 2, 3]);
        let mut seen = 0;
        let hit = store.lookup(|v| {
            seen += 1;
            *v *= 10;
            (*v == 20).then_some(*v)
        });
        assert_eq!(hit, Some(20));
        assert_eq!(seen, 2);
        assert_eq!(order(&store), vec![20, 30, 1]);
    }

    #[test]
    fn find_returns_promoted_value_mutably() {
        let mut store = LruStore::new(3);
        store.extend([String::from("x"), String::from("y")]);
        if let Some(value) = store.find(|v| v == "x") {
            value.push('!');
        }
        assert_eq!(store.front().map(String::as_str), Some("x!"));
        assert!(store.find(|v| v == "zzz").is_none());
    }

    #[test]
    fn touch_index_on_head_is_noop() {
        let mut store = LruStore::new(3);
        store.extend([1, 2, 3]);
        let (head, tail, len) = (store.head, store.tail, store.len());
        let before = order(&store);

        store.touch_index(Index(head));
        assert_eq!(store.head, head);
        assert_eq!(store.tail, tail);
        assert_eq!(store.len(), len);
        assert_eq!(order(&store), before);
    }

    #[test]
    fn touch_index_moves_tail_to_front() {
        let mut store = LruStore::new(3);
        store.extend([1, 2, 3]);
        let tail = Index(store.tail);
        store.touch_index(tail);
        assert_eq!(order(&store), vec![1, 3, 2]);
        store.debug_validate_invariants();
    }

    #[test]
    #[should_panic(expected = "is not linked")]
    fn touch_index_out_of_range_panics() {
        let mut store = LruStore::new(3);
        store.insert(1);
        store.touch_index(Index(2));
    }

    #[test]
    fn front_mut_does_not_reorder() {
        let mut store = LruStore::new(2);
        store.extend([1, 2]);
        if let Some(v) = store.front_mut() {
            *v = 20;
        }
        assert_eq!(order(&store), vec![20, 1]);
    }

    #[test]
    fn clear_resets_to_fresh_state() {
        let mut store = LruStore::new(3);
        store.extend([1, 2, 3, 4]);
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.capacity(), 3);
        assert_eq!(store.front(), None);
        store.debug_validate_invariants();

        let mut fresh = LruStore::new(3);
        for i in 10..15 {
            assert_eq!(store.insert(i), fresh.insert(i));
        }
        assert_eq!(order(&store), order(&fresh));
    }

    #[test]
    fn clone_is_independent() {
        let mut store = LruStore::new(2);
        store.extend([1, 2]);
        let snapshot = store.clone();
        store.insert(3);
        assert_eq!(order(&snapshot), vec![2, 1]);
        assert_eq!(order(&store), vec![3, 2]);
    }

    #[test]
    fn debug_lists_values_in_recency_order() {
        let mut store = LruStore::new(2);
        store.extend([1, 2]);
        let dbg = format!("{:?}", store);
        assert!(dbg.contains("order: [2, 1]"));
        assert!(dbg.contains("capacity: 2"));
    }

    #[test]
    fn check_invariants_detects_corruption() {
        let mut store = LruStore::new(3);
        store.extend([1, 2, 3]);
        assert!(store.check_invariants().is_ok());

        // Point the head entry's next link back at itself.
        let head = store.head as usize;
        store.entries[head].next = store.head;
        let err = store.check_invariants().unwrap_err();
        assert!(err.message().contains("visited twice") || err.message().contains(".prev"));
    }

    #[test]
    fn check_invariants_detects_wrong_tail() {
        let mut store = LruStore::new(3);
        store.extend([1, 2, 3]);
        store.tail = store.head;
        let err = store.check_invariants().unwrap_err();
        assert!(err.message().contains("tail"));
    }

    #[cfg(feature = "metrics")]
    #[test]
    fn metrics_track_operations() {
        let mut store = LruStore::new(2);
        store.extend([1, 2, 3]);
        assert!(store.touch(|v| *v == 2));
        assert!(!store.touch(|v| *v == 9));
        assert_eq!(store.lookup(|v| (*v == 3).then_some(*v)), Some(3));
        let _ = store.front();
        let _ = store.back();

        let snapshot = store.metrics_snapshot();
        assert_eq!(snapshot.insert_calls, 3);
        assert_eq!(snapshot.insert_new, 2);
        assert_eq!(snapshot.evicted_entries, 1);
        assert_eq!(snapshot.touch_calls, 2);
        assert_eq!(snapshot.touch_hits, 1);
        assert_eq!(snapshot.touch_misses, 1);
        assert_eq!(snapshot.lookup_hits, 1);
        // order [3, 2]: touch 2 -> 2 steps, miss -> 2 steps; then [2, 3]: lookup 3 -> 2 steps
        assert_eq!(snapshot.scan_steps, 6);
        assert_eq!(snapshot.front_found, 1);
        assert_eq!(snapshot.back_found, 1);
        assert_eq!(snapshot.len, 2);

        store.reset_metrics();
        assert_eq!(store.metrics_snapshot().insert_calls, 0);
    }

    #[cfg(feature = "metrics")]
    #[test]
    fn find_counts_as_lookup_not_peek() {
        let mut store = LruStore::new(3);
        store.extend([1, 2, 3]);
        store.reset_metrics();

        assert_eq!(store.find(|v| *v == 1).copied(), Some(1));
        assert!(store.find(|v| *v == 9).is_none());

        let snapshot = store.metrics_snapshot();
        assert_eq!(snapshot.lookup_hits, 1);
        assert_eq!(snapshot.lookup_misses, 1);
        assert_eq!(snapshot.front_calls, 0);
        assert_eq!(snapshot.front_found, 0);
    }
}
