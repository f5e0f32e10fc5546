//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `mysql` (default) - MySQL storage via SeaORM; disable it for an in-memory-only build

pub mod database;
pub mod memory;

// Re-exports
pub use database::{ConfigError, DatabaseConfig, DatabaseCredentials};
pub use memory::InMemoryPostRepository;

#[cfg(feature = "mysql")]
pub use database::{DatabasePool, MySqlPostRepository};
