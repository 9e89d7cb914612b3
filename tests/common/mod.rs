#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tinylink::application::services::UrlStore;
use tinylink::domain::entities::ShortCode;
use tinylink::domain::{KeyGenerator, StoreError, StoreResult};
use tinylink::infrastructure::persistence::MemoryUrlRepository;
use tinylink::routes::router;
use tinylink::state::AppState;
use tinylink::utils::code_generator::RandomKeyGenerator;

pub const BASE_URL: &str = "https://s.example.com";

/// Replays a fixed list of codes, then keeps returning the last one.
pub struct FixedKeyGenerator {
    codes: Vec<&'static str>,
    next: AtomicUsize,
}

impl FixedKeyGenerator {
    pub fn new(codes: Vec<&'static str>) -> Self {
        Self {
            codes,
            next: AtomicUsize::new(0),
        }
    }
}

impl KeyGenerator for FixedKeyGenerator {
    fn generate(&self) -> StoreResult<ShortCode> {
        let i = self.next.fetch_add(1, Ordering::SeqCst);
        let code = self.codes[i.min(self.codes.len() - 1)];
        ShortCode::parse(code)
    }
}

/// Always fails as if the OS random source were gone.
pub struct BrokenKeyGenerator;

impl KeyGenerator for BrokenKeyGenerator {
    fn generate(&self) -> StoreResult<ShortCode> {
        Err(StoreError::RandomSource("entropy source unavailable".to_string()))
    }
}

pub fn memory_store() -> Arc<UrlStore> {
    Arc::new(UrlStore::new(
        Arc::new(MemoryUrlRepository::new()),
        Arc::new(RandomKeyGenerator::new()),
        5,
    ))
}

pub fn store_with_generator(generator: impl KeyGenerator + 'static) -> Arc<UrlStore> {
    Arc::new(UrlStore::new(
        Arc::new(MemoryUrlRepository::new()),
        Arc::new(generator),
        3,
    ))
}

pub fn create_test_state(store: Arc<UrlStore>) -> AppState {
    AppState::new(store, BASE_URL)
}

/// Application routes and middleware over the given store.
pub fn test_app(store: Arc<UrlStore>) -> axum::Router {
    router(
        create_test_state(store),
        concat!(env!("CARGO_MANIFEST_DIR"), "/static"),
    )
}
