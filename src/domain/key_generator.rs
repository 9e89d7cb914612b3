//! Short code generation contract.

use crate::domain::entities::ShortCode;
use crate::domain::error::StoreResult;

/// Mints candidate short codes.
///
/// Generators are pure: they never consult storage, so a generated code may
/// already be taken. Uniqueness is enforced by the repository insert.
#[cfg_attr(test, mockall::automock)]
pub trait KeyGenerator: Send + Sync {
    /// Produces a fresh candidate code.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::RandomSource`](crate::domain::error::StoreError::RandomSource)
    /// when the entropy source is unavailable.
    fn generate(&self) -> StoreResult<ShortCode>;
}
