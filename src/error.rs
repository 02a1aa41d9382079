//! Error types for the probelru library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when construction parameters are invalid.
//!   The only fallible path in the crate is building a cache with a zero
//!   capacity; every other operation is total over its inputs (a lookup
//!   miss is `None`, not an error).
//! - [`InvariantError`]: Returned by
//!   [`SampledLruCache::check_invariants`](crate::policy::sampled_lru::SampledLruCache::check_invariants)
//!   when the slot array and index map have fallen out of sync.
//!
//! ## Example Usage
//!
//! ```
//! use probelru::error::ConfigError;
//! use probelru::policy::sampled_lru::SampledLruCache;
//!
//! let err: ConfigError = SampledLruCache::<u64, u64>::new(0).unwrap_err();
//! assert!(err.to_string().contains("capacity"));
//!
//! let cache = SampledLruCache::<u64, u64>::new(8);
//! assert!(cache.is_ok());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when cache construction parameters are invalid.
///
/// Produced by the fallible constructors on
/// [`SampledLruCache`](crate::policy::sampled_lru::SampledLruCache) when the
/// requested capacity is zero. Carries a human-readable description of the
/// rejected parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when an internal cache invariant is violated.
///
/// The sampled-LRU design keeps a dense slot array and a key→slot index map
/// that must stay bijective across every swap, insert, and removal.
/// [`check_invariants`](crate::policy::sampled_lru::SampledLruCache::check_invariants)
/// audits that bijection and reports the first violation it finds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError {
    message: String,
}

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- ConfigError ------------------------------------------------------

    #[test]
    fn config_display_shows_message() {
        let err = ConfigError::new("capacity must be greater than zero");
        assert_eq!(err.to_string(), "capacity must be greater than zero");
    }

    #[test]
    fn config_message_accessor() {
        let err = ConfigError::new("bad parameter");
        assert_eq!(err.message(), "bad parameter");
    }

    #[test]
    fn config_clone_and_eq() {
        let a = ConfigError::new("x");
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn config_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ConfigError>();
    }

    // -- InvariantError ---------------------------------------------------

    #[test]
    fn invariant_display_shows_message() {
        let err = InvariantError::new("index map points at a stale slot");
        assert_eq!(err.to_string(), "index map points at a stale slot");
    }

    #[test]
    fn invariant_debug_includes_message() {
        let err = InvariantError::new("slot count mismatch");
        let dbg = format!("{:?}", err);
        assert!(dbg.contains("slot count mismatch"));
    }

    #[test]
    fn invariant_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<InvariantError>();
    }
}
