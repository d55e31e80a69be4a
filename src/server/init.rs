/**
 * Server Initialization
 *
 * Builds the application from its configuration:
 *
 * 1. Connect the SQLite pool
 * 2. Run embedded migrations
 * 3. Assemble the shared state (pool + token service)
 * 4. Create the router
 *
 * Unlike configuration loading, none of this degrades gracefully: a
 * database that cannot be reached or migrated is a startup error.
 */

use axum::Router;
use sqlx::sqlite::SqlitePoolOptions;
use thiserror::Error;

use crate::auth::token::TokenService;
use crate::routes::create_router;
use crate::server::config::ServerConfig;
use crate::server::state::AppState;

/// Errors during application setup
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("failed to connect to database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("failed to run migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Create and configure the application router
pub async fn create_app(config: &ServerConfig) -> Result<Router, SetupError> {
    tracing::info!("Connecting to database...");

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;

    let state = AppState {
        pool,
        tokens: TokenService::new(&config.jwt_secret),
    };

    Ok(create_router(state))
}
