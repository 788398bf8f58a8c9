//! Store configuration.
//!
//! The only knob is the fixed capacity. It is validated once, at
//! construction, and never changes afterwards.

use crate::ds::index::MAX_CAPACITY;
use crate::error::ConfigError;

/// Capacity used by [`LruConfig::default`].
pub const DEFAULT_CAPACITY: usize = 16;

/// Configuration for an [`LruStore`](crate::ds::LruStore).
///
/// # Example
///
/// ```
/// use indexlru::config::LruConfig;
/// use indexlru::ds::LruStore;
///
/// let config = LruConfig::new(4);
/// let store: LruStore<&str> = LruStore::from_config(&config).unwrap();
/// assert_eq!(store.capacity(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LruConfig {
    /// Number of entries the store holds before it starts evicting.
    pub capacity: usize,
}

impl LruConfig {
    /// Creates a config with the given capacity. Not validated until
    /// [`validate`](Self::validate) or store construction.
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Checks that the capacity is non-zero and fits the index range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is zero or exceeds
    /// [`MAX_CAPACITY`](crate::ds::MAX_CAPACITY).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::new("capacity must be greater than zero"));
        }
        if self.capacity > MAX_CAPACITY {
            return Err(ConfigError::new(format!(
                "capacity {} exceeds the maximum of {}",
                self.capacity, MAX_CAPACITY
            )));
        }
        Ok(())
    }
}

impl Default for LruConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
