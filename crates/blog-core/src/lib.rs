//! # Blog Core
//!
//! The domain layer of the movie blog service.
//! Post types, payload validation and the storage port, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod validation;

pub use error::RepoError;
pub use validation::ValidationError;
