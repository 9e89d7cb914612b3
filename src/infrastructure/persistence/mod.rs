//! Repository implementations.
//!
//! - [`MemoryUrlRepository`] - In-process map behind a reader/writer lock
//! - [`PgUrlRepository`] - PostgreSQL `urls` table via SQLx

pub mod memory_url_repository;
pub mod pg_url_repository;

pub use memory_url_repository::MemoryUrlRepository;
pub use pg_url_repository::{PgUrlRepository, PoolSettings};
