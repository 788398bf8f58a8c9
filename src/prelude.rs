pub use crate::config::LruConfig;
#[cfg(feature = "concurrency")]
pub use crate::ds::ConcurrentLruStore;
pub use crate::ds::{CursorMut, Index, Iter, LruStore, MAX_CAPACITY};
pub use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
pub use crate::metrics::{PrometheusTextExporter, StoreMetricsSnapshot};
