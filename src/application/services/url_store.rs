//! URL shortening and resolution service.

use std::sync::Arc;
use tracing::{debug, error, warn};

use crate::domain::KeyGenerator;
use crate::domain::entities::{Mapping, ShortCode};
use crate::domain::error::{StoreError, StoreResult};
use crate::domain::repositories::UrlRepository;
use crate::utils::code_generator::is_reserved;

/// Default number of codes tried before a put gives up on collisions.
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Mints short codes and maps them to URLs.
///
/// Combines a [`KeyGenerator`] with a [`UrlRepository`]. The repository
/// refuses to overwrite a taken code, so on a collision the store draws a new
/// code, up to `max_attempts` times in total.
pub struct UrlStore {
    repository: Arc<dyn UrlRepository>,
    generator: Arc<dyn KeyGenerator>,
    max_attempts: usize,
}

impl UrlStore {
    /// Creates a store.
    ///
    /// `max_attempts` is clamped to at least one.
    pub fn new(
        repository: Arc<dyn UrlRepository>,
        generator: Arc<dyn KeyGenerator>,
        max_attempts: usize,
    ) -> Self {
        Self {
            repository,
            generator,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Stores `url` under a freshly generated code and returns the code.
    ///
    /// # Errors
    ///
    /// - [`StoreError::EmptyUrl`] if `url` is empty
    /// - [`StoreError::RandomSource`] if no code could be generated
    /// - [`StoreError::Write`] if the backing medium fails
    /// - [`StoreError::Collision`] if every attempt hit a taken code
    pub async fn put(&self, url: &str) -> StoreResult<ShortCode> {
        if url.is_empty() {
            return Err(StoreError::EmptyUrl);
        }

        let mut last_taken = None;

        for attempt in 1..=self.max_attempts {
            let code = self.generator.generate()?;

            if is_reserved(&code) {
                debug!("Skipping reserved code {} (attempt {})", code, attempt);
                last_taken = Some(code.into_inner());
                continue;
            }

            let mapping = Mapping::new(code, url);
            match self.repository.insert(&mapping).await {
                Ok(()) => {
                    debug!("Shortened {} -> {}", mapping.code, url);
                    return Ok(mapping.code);
                }
                Err(StoreError::Collision(code)) => {
                    warn!("Short code collision on {} (attempt {})", code, attempt);
                    last_taken = Some(code);
                }
                Err(e) => return Err(e),
            }
        }

        Err(StoreError::Collision(last_taken.unwrap_or_default()))
    }

    /// Resolves a short code to its original URL.
    ///
    /// Returns `None` when the code is unknown or the lookup fails; read
    /// failures are logged and otherwise treated as a miss.
    pub async fn get(&self, code: &str) -> Option<String> {
        match self.repository.find(code).await {
            Ok(found) => found,
            Err(e) => {
                error!("Lookup of {} failed: {}", code, e);
                None
            }
        }
    }

    /// Number of stored mappings.
    pub async fn count(&self) -> StoreResult<u64> {
        self.repository.count().await
    }

    /// Returns whether the backing medium is reachable.
    pub async fn is_healthy(&self) -> bool {
        self.repository.ping().await
    }

    /// Name of the storage backend.
    pub fn backend(&self) -> &'static str {
        self.repository.backend()
    }
}
