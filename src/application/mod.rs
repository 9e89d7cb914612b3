//! Application layer services implementing business logic.
//!
//! Services combine domain contracts (repositories, generators) and give
//! HTTP handlers and the admin CLI a single entry point.
//!
//! # Available Services
//!
//! - [`services::url_store::UrlStore`] - Short code creation and resolution

pub mod services;
