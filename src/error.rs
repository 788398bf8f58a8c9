//! Error types for the indexlru library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when a store is configured with a capacity
//!   that is zero or does not fit the `u16` link range.
//! - [`InvariantError`]: Returned by
//!   [`LruStore::check_invariants`](crate::ds::LruStore::check_invariants)
//!   when the index chain is corrupt.
//!
//! Misses from `touch`/`lookup`/`find` are not errors, and neither is
//! inserting into a full store (that evicts). Broken linkage preconditions
//! inside the store panic rather than return one of these types.
//!
//! ## Example Usage
//!
//! ```
//! use indexlru::ds::LruStore;
//! use indexlru::error::ConfigError;
//!
//! let store: Result<LruStore<u32>, ConfigError> = LruStore::try_new(8);
//! assert!(store.is_ok());
//!
//! // Zero capacity is caught without panicking
//! let bad = LruStore::<u32>::try_new(0);
//! assert!(bad.is_err());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when the store's index chain is inconsistent.
///
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when store configuration is invalid.
///
/// Produced by [`LruStore::try_new`](crate::ds::LruStore::try_new) and
/// [`LruConfig::validate`](crate::config::LruConfig::validate).
///
/// # Example
///
/// ```
/// use indexlru::ds::LruStore;
///
/// let err = LruStore::<u64>::try_new(0).unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
