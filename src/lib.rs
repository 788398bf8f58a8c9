//! indexlru: a bounded least-recently-used store whose recency order is a
//! doubly linked chain of array indices rather than pointers.
//!
//! - [`ds::LruStore`]: fixed-capacity store; O(1) insert/evict and
//!   promotion, O(n) predicate scans (no key index)
//! - [`ds::CursorMut`]: exclusive head-to-tail traversal
//! - [`config::LruConfig`]: the capacity, validated at construction
//!
//! Optional features: `metrics` (counters, snapshots, Prometheus text
//! export) and `concurrency` (`ConcurrentLruStore`, an `RwLock` wrapper).

pub mod config;
pub mod ds;
pub mod error;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
