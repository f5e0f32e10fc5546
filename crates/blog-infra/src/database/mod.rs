//! Database connection management and the MySQL post repository.

mod connections;

#[cfg(feature = "mysql")]
pub mod entity;
#[cfg(feature = "mysql")]
mod post_repo;

pub use connections::{ConfigError, DatabaseConfig, DatabaseCredentials};

#[cfg(feature = "mysql")]
pub use connections::DatabasePool;
#[cfg(feature = "mysql")]
pub use post_repo::MySqlPostRepository;
