//! Wiring for a PostgreSQL-backed lifecycle service.

use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use crate::adapters::postgres::{
    connect, health_check, run_migrations, PostgresDocumentReader, PostgresDocumentRepository,
};
use crate::adapters::SystemClock;
use crate::application::DocumentLifecycleService;
use crate::config::AppConfig;

/// Errors raised while bringing up the service.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Database connection failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Connects to the database, checks it answers, applies migrations when
/// `database.run_migrations` is set, and builds the service on the system
/// clock.
pub async fn build_service(config: &AppConfig) -> Result<DocumentLifecycleService, StartupError> {
    let pool = connect(&config.database).await?;

    health_check(&pool).await?;
    info!("Database health check passed");

    if config.database.run_migrations {
        run_migrations(&pool).await?;
    }

    Ok(DocumentLifecycleService::new(
        Arc::new(PostgresDocumentReader::new(pool.clone())),
        Arc::new(PostgresDocumentRepository::new(pool)),
        Arc::new(SystemClock),
        &config.lifecycle,
    ))
}
