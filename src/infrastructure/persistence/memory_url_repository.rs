//! In-process implementation of the URL repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::Mapping;
use crate::domain::error::{StoreError, StoreResult};
use crate::domain::repositories::UrlRepository;

/// Map of short code to original URL guarded by a single reader/writer lock.
///
/// Lookups share the lock; inserts take it exclusively, so a write never
/// overlaps another write or a read. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryUrlRepository {
    urls: RwLock<HashMap<String, String>>,
}

impl MemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            urls: RwLock::new(HashMap::with_capacity(capacity)),
        }
    }
}

#[async_trait]
impl UrlRepository for MemoryUrlRepository {
    async fn insert(&self, mapping: &Mapping) -> StoreResult<()> {
        let mut urls = self.urls.write().await;

        match urls.entry(mapping.code.as_str().to_owned()) {
            Entry::Occupied(_) => Err(StoreError::Collision(mapping.code.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(mapping.original_url.clone());
                debug!("Stored {} in memory", mapping.code);
                Ok(())
            }
        }
    }

    async fn find(&self, code: &str) -> StoreResult<Option<String>> {
        Ok(self.urls.read().await.get(code).cloned())
    }

    async fn count(&self) -> StoreResult<u64> {
        Ok(self.urls.read().await.len() as u64)
    }

    async fn ping(&self) -> bool {
        true
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ShortCode;
    use std::sync::Arc;

    fn mapping(code: &str, url: &str) -> Mapping {
        Mapping::new(ShortCode::parse(code).unwrap(), url)
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = MemoryUrlRepository::new();

        repo.insert(&mapping("abc123", "https://example.com"))
            .await
            .unwrap();

        let found = repo.find("abc123").await.unwrap();
        assert_eq!(found.as_deref(), Some("https://example.com"));
    }

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let repo = MemoryUrlRepository::new();
        assert!(repo.find("zzzzzz").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_collision_keeps_original() {
        let repo = MemoryUrlRepository::new();
        repo.insert(&mapping("dup123", "https://first.com"))
            .await
            .unwrap();

        let result = repo.insert(&mapping("dup123", "https://second.com")).await;

        assert!(matches!(result, Err(StoreError::Collision(code)) if code == "dup123"));
        assert_eq!(
            repo.find("dup123").await.unwrap().as_deref(),
            Some("https://first.com")
        );
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_inserts_are_all_kept() {
        let repo = Arc::new(MemoryUrlRepository::with_capacity(64));

        let handles: Vec<_> = (0..64)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    let code = format!("c{:05}", i);
                    repo.insert(&mapping(&code, &format!("https://example.com/{i}")))
                        .await
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(repo.count().await.unwrap(), 64);
        assert_eq!(
            repo.find("c00042").await.unwrap().as_deref(),
            Some("https://example.com/42")
        );
    }

    #[tokio::test]
    async fn test_ping_and_backend() {
        let repo = MemoryUrlRepository::new();
        assert!(repo.ping().await);
        assert_eq!(repo.backend(), "memory");
    }
}
