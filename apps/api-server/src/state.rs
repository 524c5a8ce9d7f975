//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::PostStore;
use quill_core::ports::PostRepository;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostStore,
}

impl AppState {
    /// Wrap an already-built repository.
    pub fn with_repository(repo: Arc<dyn PostRepository>) -> Self {
        Self {
            posts: PostStore::new(repo),
        }
    }

    /// Build the application state with the configured storage.
    ///
    /// A database that cannot be opened or migrated is a startup error;
    /// the server never silently falls back to memory.
    #[cfg(feature = "sqlite")]
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        use anyhow::Context;
        use migration::{Migrator, MigratorTrait};
        use quill_infra::{SqlitePostRepository, database::connect};

        let db = connect(&config.database)
            .await
            .with_context(|| format!("failed to open database {}", config.database.url))?;

        if config.run_migrations {
            Migrator::up(&db, None)
                .await
                .context("failed to apply migrations")?;
            tracing::info!("Database schema is up to date");
        }

        let state = Self::with_repository(Arc::new(SqlitePostRepository::new(db)));
        tracing::info!("Application state initialized");
        Ok(state)
    }

    #[cfg(not(feature = "sqlite"))]
    pub async fn new(_config: &AppConfig) -> anyhow::Result<Self> {
        use quill_infra::InMemoryPostRepository;

        tracing::warn!("Running without sqlite feature - posts are kept in memory");
        Ok(Self::with_repository(Arc::new(InMemoryPostRepository::new())))
    }
}
