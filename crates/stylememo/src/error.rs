//! Error types for stylememo

use std::fmt;

/// Result type alias for stylememo operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for memoizer configuration
///
/// Cache operations themselves never fail; a failing compute function
/// surfaces as the caller's own error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Unrecognized memoize mode
    InvalidMode(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidMode(mode) => write!(
                f,
                "Invalid memoize mode: `{}` (expected off, on or aggressive)",
                mode
            ),
        }
    }
}

impl std::error::Error for Error {}
