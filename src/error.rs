//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache.
///
/// Absent keys are not errors: lookups return `None` and deletes return `false`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Capacity below zero, at construction or resize
    #[error("Invalid capacity: {0} (must be >= 0)")]
    InvalidCapacity(i64),

    /// A capacity write whose value is not an integer
    #[error("Malformed capacity value: {0}")]
    MalformedCapacity(String),

    /// A reserved control name used as an ordinary data key
    #[error("Reserved key cannot be stored as data: {0}")]
    ReservedKeyConflict(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CacheError::InvalidCapacity(-3).to_string(),
            "Invalid capacity: -3 (must be >= 0)"
        );
        assert_eq!(
            CacheError::ReservedKeyConflict("size".to_string()).to_string(),
            "Reserved key cannot be stored as data: size"
        );
        assert!(CacheError::MalformedCapacity("\"big\"".to_string())
            .to_string()
            .contains("big"));
    }
}
