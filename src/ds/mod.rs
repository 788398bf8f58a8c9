pub mod cursor;
pub mod index;
pub mod lru_store;

#[cfg(feature = "concurrency")]
pub mod concurrent;

#[cfg(feature = "concurrency")]
pub use concurrent::ConcurrentLruStore;
pub use cursor::{CursorMut, Iter};
pub use index::{Index, MAX_CAPACITY};
pub use lru_store::LruStore;
