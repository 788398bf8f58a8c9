/// Largest capacity a store can be built with.
///
/// Links are stored as `u16`, so every slot index must fit in one.
pub const MAX_CAPACITY: usize = u16::MAX as usize;

/// Handle identifying a slot in an [`LruStore`](crate::ds::LruStore)'s backing array.
///
/// An `Index` is not a pointer and owns nothing; the store owns every entry.
/// Because entries are never removed one at a time, any index below the
/// store's `len()` refers to a linked entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index(pub(crate) u16);

impl Index {
    /// Returns the slot position as a `usize`.
    #[inline]
    pub fn get(self) -> usize {
        self.0 as usize
    }
}

impl From<Index> for usize {
    #[inline]
    fn from(index: Index) -> usize {
        index.get()
    }
}

/// One stored value plus its two order links.
#[derive(Debug, Clone)]
pub(crate) struct Entry<T> {
    pub(crate) value: T,
    pub(crate) prev: u16,
    pub(crate) next: u16,
}

impl<T> Entry<T> {
    #[inline]
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            prev: 0,
            next: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_converts_to_usize() {
        let index = Index(42);
        assert_eq!(index.get(), 42);
        assert_eq!(usize::from(index), 42);
    }

    #[test]
    fn max_capacity_fits_every_index() {
        assert!(u16::try_from(MAX_CAPACITY - 1).is_ok());
    }

    #[test]
    fn new_entry_starts_with_zeroed_links() {
        let entry = Entry::new("a");
        assert_eq!(entry.value, "a");
        assert_eq!(entry.prev, 0);
        assert_eq!(entry.next, 0);
    }
}
