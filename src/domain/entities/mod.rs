//! Core domain entities.
//!
//! The service has a single entity, [`Mapping`], keyed by a validated
//! [`ShortCode`].

pub mod mapping;

pub use mapping::{CODE_LENGTH, Mapping, ShortCode};
