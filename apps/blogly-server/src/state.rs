//! Application state - shared across all handlers.

use std::sync::Arc;

use blogly_core::ports::{PostRepository, TagRepository, UserRepository};
use blogly_infra::{
    DatabaseConfig, DatabaseConnections, SqlPostRepository, SqlTagRepository, SqlUserRepository,
};
use migration::{DbErr, Migrator, MigratorTrait};

use crate::templates::Templates;

/// Failures while building the application state.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("database: {0}")]
    Database(#[from] DbErr),

    #[error("templates: {0}")]
    Templates(#[from] minijinja::Error),
}

/// Shared application state.
///
/// Handlers receive it through `web::Data`; every field is a cheap handle
/// onto the same connection pool.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub tags: Arc<dyn TagRepository>,
    pub templates: Arc<Templates>,
    pub db: Arc<DatabaseConnections>,
}

impl AppState {
    /// Connect to the database, apply pending migrations and build the state.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, StartupError> {
        let db = DatabaseConnections::init(config).await?;

        Migrator::up(&db.main, None).await?;
        tracing::info!("Database schema is up to date");

        let state = Self::from_connections(db)?;
        tracing::info!("Application state initialized");

        Ok(state)
    }

    /// Build the state over an already-connected pool.
    pub fn from_connections(db: DatabaseConnections) -> Result<Self, StartupError> {
        Ok(Self {
            users: Arc::new(SqlUserRepository::new(db.main.clone())),
            posts: Arc::new(SqlPostRepository::new(db.main.clone())),
            tags: Arc::new(SqlTagRepository::new(db.main.clone())),
            templates: Arc::new(Templates::new()?),
            db: Arc::new(db),
        })
    }
}
