//! In-memory storage - a stand-in for the MySQL store in tests.

mod post_repo;

pub use post_repo::InMemoryPostRepository;
