//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::UrlStore;

#[derive(Clone)]
pub struct AppState {
    pub url_store: Arc<UrlStore>,
    pub base_url: String,
}

impl AppState {
    pub fn new(url_store: Arc<UrlStore>, base_url: impl Into<String>) -> Self {
        Self {
            url_store,
            base_url: base_url.into(),
        }
    }

    /// Builds the public short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }
}
