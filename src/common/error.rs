//! Error types for evictsim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in evictsim.
///
/// The taxonomy is deliberately small: once an engine is constructed, every
/// page value is a legal input to `process`, so the only failure modes are
/// configuration-time.
#[derive(Debug, Error)]
pub enum Error {
    /// An engine was constructed with a capacity of zero.
    ///
    /// A zero-slot cache can hold nothing, so every request would both fault
    /// and have no slot to admit into. Construction rejects it up front.
    #[error("cache capacity must be at least 1, got {0}")]
    InvalidCapacity(usize),

    /// The requested eviction policy name was not recognized.
    ///
    /// Raised at the driver/CLI boundary; engine state is never touched.
    #[error("unknown eviction policy: {0:?} (expected FIFO, LRU, or LFU)")]
    UnknownPolicy(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidCapacity(0);
        assert_eq!(format!("{}", err), "cache capacity must be at least 1, got 0");

        let err = Error::UnknownPolicy("MRU".to_string());
        assert_eq!(
            format!("{}", err),
            "unknown eviction policy: \"MRU\" (expected FIFO, LRU, or LFU)"
        );
    }

    #[test]
    fn test_result_type_alias() {
        fn might_fail() -> Result<u32> {
            Ok(42)
        }

        assert_eq!(might_fail().unwrap(), 42);
    }
}
