//! Application state - shared across all handlers.

use std::sync::Arc;

use anyhow::Context;
use blog_core::ports::PostRepository;
use blog_infra::{DatabasePool, MySqlPostRepository};

use crate::config::AppConfig;

/// Shared application state.
///
/// The repository is injected so handlers never reach for a global pool.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub greeting: Arc<str>,
}

impl AppState {
    pub fn new(posts: Arc<dyn PostRepository>, greeting: &str) -> Self {
        Self {
            posts,
            greeting: Arc::from(greeting),
        }
    }

    /// Open the MySQL pool and wire the post repository on top of it.
    pub async fn connect(config: &AppConfig) -> anyhow::Result<Self> {
        let pool = DatabasePool::connect(&config.database)
            .await
            .context("Failed to connect to database")?;

        let posts: Arc<dyn PostRepository> = Arc::new(MySqlPostRepository::new(pool));

        tracing::info!("Application state initialized");
        Ok(Self::new(posts, &config.greeting))
    }
}
