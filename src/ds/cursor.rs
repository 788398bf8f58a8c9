//! Front-to-back traversal over an [`LruStore`].
//!
//! There is no key index, so `touch`, `lookup` and `find` walk the chain from
//! the most-recently-used entry toward the tail. Two walkers exist:
//!
//! - [`CursorMut`]: exclusive, lending traversal. It borrows the whole store
//!   mutably, and each `&mut T` it yields borrows the cursor, so a yielded
//!   reference is dead before the next step. At most one mutable view of any
//!   entry exists at a time.
//! - [`Iter`]: shared traversal implementing [`Iterator`].
//!
//! ```text
//!   head ─► [3] ─next─► [0] ─next─► [2] ─next─► [1] ◄── tail
//!            ▲                                    │
//!            │        cursor yields 3, 0, 2, 1    │
//!            └──────── then reports done ─────────┘
//! ```
//!
//! Both stop on the step that yields `tail`; the tail's `next` link is stale
//! and never followed.

use std::iter::FusedIterator;

use crate::ds::index::Index;
use crate::ds::lru_store::LruStore;

/// Exclusive front-to-back cursor yielding `(Index, &mut T)`.
///
/// Obtained from [`LruStore::cursor_mut`]. One pass only; the cursor is not
/// restartable.
///
/// # Example
///
/// ```
/// use indexlru::ds::LruStore;
///
/// let mut store = LruStore::new(3);
/// store.insert(1);
/// store.insert(2);
/// store.insert(3);
///
/// let mut cursor = store.cursor_mut();
/// while let Some((_, value)) = cursor.next() {
///     *value *= 10;
/// }
/// assert_eq!(store.iter().copied().collect::<Vec<_>>(), vec![30, 20, 10]);
/// ```
pub struct CursorMut<'a, T> {
    store: &'a mut LruStore<T>,
    pos: u16,
    done: bool,
    visited: usize,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(store: &'a mut LruStore<T>) -> Self {
        let pos = store.head;
        let done = store.is_empty();
        Self {
            store,
            pos,
            done,
            visited: 0,
        }
    }

    /// Yields the entry at the current position and advances toward the tail.
    ///
    /// Returns `None` once the tail has been yielded, and on every call after.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<(Index, &mut T)> {
        if self.done {
            return None;
        }
        let index = self.pos;
        if index == self.store.tail {
            self.done = true;
        }
        self.visited += 1;
        let entry = &mut self.store.entries[index as usize];
        self.pos = entry.next;
        Some((Index(index), &mut entry.value))
    }

    /// Number of entries yielded so far.
    pub fn visited(&self) -> usize {
        self.visited
    }

    /// Returns `true` once the cursor has yielded the tail entry.
    pub fn is_done(&self) -> bool {
        self.done
    }
}

/// Shared front-to-back iterator over an [`LruStore`].
///
/// Obtained from [`LruStore::iter`].
pub struct Iter<'a, T> {
    store: &'a LruStore<T>,
    pos: u16,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(store: &'a LruStore<T>) -> Self {
        Self {
            store,
            pos: store.head,
            remaining: store.len(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let entry = &self.store.entries[self.pos as usize];
        self.pos = entry.next;
        Some(&entry.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a LruStore<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(values: &[u32]) -> LruStore<u32> {
        let mut store = LruStore::new(values.len().max(1));
        for &v in values {
            store.insert(v);
        }
        store
    }

    #[test]
    fn cursor_on_empty_store_is_done_immediately() {
        let mut store: LruStore<u32> = LruStore::new(4);
        let mut cursor = store.cursor_mut();
        assert!(cursor.is_done());
        assert!(cursor.next().is_none());
        assert_eq!(cursor.visited(), 0);
    }

    #[test]
    fn cursor_visits_each_entry_once_front_to_back() {
        let mut store = store_with(&[1, 2, 3, 4]);
        let mut seen = Vec::new();
        let mut cursor = store.cursor_mut();
        while let Some((_, value)) = cursor.next() {
            seen.push(*value);
        }
        assert_eq!(seen, vec![4, 3, 2, 1]);
        assert_eq!(cursor.visited(), 4);
        assert!(cursor.next().is_none());
        assert!(cursor.next().is_none());
    }

    #[test]
    fn cursor_yields_indices_that_touch_index_accepts() {
        let mut store = store_with(&[10, 20, 30]);
        let mut target = None;
        let mut cursor = store.cursor_mut();
        while let Some((index, value)) = cursor.next() {
            if *value == 10 {
                target = Some(index);
            }
        }
        let index = target.expect("10 is in the store");
        store.touch_index(index);
        assert_eq!(store.front(), Some(&10));
    }

    #[test]
    fn cursor_mutation_is_visible_after_pass() {
        let mut store = store_with(&[1, 2]);
        {
            let mut cursor = store.cursor_mut();
            if let Some((_, value)) = cursor.next() {
                *value = 99;
            }
        }
        assert_eq!(store.front(), Some(&99));
        assert_eq!(store.back(), Some(&1));
    }

    #[test]
    fn cursor_after_eviction_follows_new_order() {
        let mut store = store_with(&[1, 2, 3]);
        store.insert(4);
        let mut seen = Vec::new();
        let mut cursor = store.cursor_mut();
        while let Some((_, value)) = cursor.next() {
            seen.push(*value);
        }
        assert_eq!(seen, vec![4, 3, 2]);
    }

    #[test]
    fn iter_is_exact_size_and_fused() {
        let store = store_with(&[1, 2, 3]);
        let mut iter = store.iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn ref_into_iterator_matches_iter() {
        let store = store_with(&[5, 6]);
        let mut collected = Vec::new();
        for v in &store {
            collected.push(*v);
        }
        assert_eq!(collected, vec![6, 5]);
    }
}
