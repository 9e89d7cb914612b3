//! Errors raised by the key generator and the URL store.

use thiserror::Error;

/// Failures of the shortening core.
///
/// A lookup miss is not an error: repositories report it as `Ok(None)`.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The operating system random source could not provide bytes.
    #[error("random source unavailable: {0}")]
    RandomSource(String),

    /// The backing medium rejected or failed a write.
    #[error("storage write failed: {0}")]
    Write(String),

    /// The backing medium failed a read.
    #[error("storage read failed: {0}")]
    Read(String),

    /// The short code is already mapped to a URL.
    #[error("short code already taken: {0}")]
    Collision(String),

    /// The input is not a well-formed short code.
    #[error("invalid short code: {0}")]
    InvalidCode(String),

    #[error("URL is required")]
    EmptyUrl,
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
