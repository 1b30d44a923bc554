//! Error types for the path cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the path cache.
///
/// Both variants are raised synchronously, before any mutation of the cache,
/// so a failed call always leaves the cache unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// An empty path was passed to `set`, `get` or `remove`
    #[error("path must not be empty")]
    InvalidPath,

    /// A finite TTL was zero, negative or not a number
    #[error("ttl must be a positive number")]
    InvalidArgument,
}

// == Result Type Alias ==
/// Convenience Result type for the path cache.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(CacheError::InvalidPath.to_string(), "path must not be empty");
        assert_eq!(
            CacheError::InvalidArgument.to_string(),
            "ttl must be a positive number"
        );
    }
}
