/**
 * Application State
 *
 * Central state container shared across request handlers. Nothing here is
 * mutated after startup: the pool manages its own concurrency and the
 * token service holds read-only keys.
 */

use sqlx::SqlitePool;

use crate::auth::token::TokenService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub pool: SqlitePool,
    /// Token issuance and verification
    pub tokens: TokenService,
}
