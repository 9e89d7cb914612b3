//! Repository trait for short code to URL mappings.

use crate::domain::entities::Mapping;
use crate::domain::error::StoreResult;
use async_trait::async_trait;

/// Storage interface for URL mappings.
///
/// Both implementations honour the same contract: inserts never overwrite
/// an existing code, lookups report a miss as `Ok(None)`.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryUrlRepository`] - in-process map
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL table
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Stores a mapping if its code is free.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Collision`](crate::domain::error::StoreError::Collision)
    /// if the code is already taken, and
    /// [`StoreError::Write`](crate::domain::error::StoreError::Write) if the
    /// backing medium fails.
    async fn insert(&self, mapping: &Mapping) -> StoreResult<()>;

    /// Finds the original URL for a short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` if found
    /// - `Ok(None)` if not found
    async fn find(&self, code: &str) -> StoreResult<Option<String>>;

    /// Counts stored mappings.
    async fn count(&self) -> StoreResult<u64>;

    /// Checks whether the backing medium is reachable.
    async fn ping(&self) -> bool;

    /// Short name of the backend, used in logs and health reports.
    fn backend(&self) -> &'static str;
}
