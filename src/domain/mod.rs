//! Domain layer containing the mapping entity and storage contracts.
//!
//! # Architecture
//!
//! - [`entities`] - [`entities::Mapping`] and the validated [`entities::ShortCode`]
//! - [`repositories`] - Data access trait definitions
//! - [`key_generator`] - Short code generation contract
//! - [`error`] - Errors of the shortening core
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. The store service that combines generator and repository lives in
//! [`crate::application::services`].

pub mod entities;
pub mod error;
pub mod key_generator;
pub mod repositories;

pub use error::{StoreError, StoreResult};
pub use key_generator::KeyGenerator;
