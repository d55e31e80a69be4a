/**
 * User Handlers
 *
 * Signup and signin handlers, plus the authenticated `/api/me` endpoint.
 *
 * # Signup (POST /user)
 *
 * 1. Hash the password with bcrypt
 * 2. Persist the user (username uniqueness enforced by the database)
 * 3. Issue a JWT and return it
 *
 * # Signin (POST /signin)
 *
 * 1. Look up the user by username (404 before any password comparison,
 *    so a missing record is never dereferenced)
 * 2. Verify the submitted password against the stored hash
 * 3. Issue a JWT and return it
 *
 * # Security
 *
 * - Passwords are never logged or returned in responses
 * - Password verification delegates constant-time comparison to bcrypt
 */

use axum::{extract::State, response::Json, Extension};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::password::{hash_password, verify_password};
use crate::auth::token::Claims;
use crate::db::users::{create_user, get_user_by_id, get_user_by_username};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Credentials submitted to signup and signin
#[derive(Debug, Serialize, Deserialize)]
pub struct CredentialsRequest {
    /// Unique username
    pub username: String,
    /// Plaintext password (hashed before storage, never persisted as-is)
    pub password: String,
}

/// Session token returned by signup and signin
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Authenticated user info returned by `/api/me` (no password hash)
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Signup handler
///
/// Creates a new user and returns a session token. A username collision
/// surfaces as 409 `DuplicateUser`.
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    tracing::info!("Signup request for username: {}", request.username);

    let password_hash = hash_password(&request.password)?;

    let user = create_user(&state.pool, &request.username, &password_hash)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|db| db.is_unique_violation())
            {
                tracing::warn!("Username already exists: {}", request.username);
                ApiError::DuplicateUser
            } else {
                ApiError::Database(e)
            }
        })?;

    let token = state.tokens.issue(user.id, &user.username)?;

    tracing::info!("User created: {}", user.username);

    Ok(Json(TokenResponse { token }))
}

/// Signin handler
///
/// Verifies credentials and returns a session token. An unknown username
/// is 404; a password mismatch is 401.
pub async fn signin(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    tracing::info!("Signin request for username: {}", request.username);

    let user = get_user_by_username(&state.pool, &request.username)
        .await
        .map_err(ApiError::Database)?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", request.username);
            ApiError::UserNotFound
        })?;

    let valid = verify_password(&request.password, &user.password_hash)?;

    if !valid {
        tracing::warn!("Invalid password for user: {}", request.username);
        return Err(ApiError::InvalidCredentials);
    }

    let token = state.tokens.issue(user.id, &user.username)?;

    tracing::info!("User signed in: {}", user.username);

    Ok(Json(TokenResponse { token }))
}

/// Current-user handler for GET /api/me
///
/// Runs behind the auth gate; the claims come from the request extensions
/// the middleware populated.
pub async fn me(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<UserResponse>, ApiError> {
    let user_id = Uuid::parse_str(&claims.sub).map_err(|_| {
        tracing::warn!("Malformed user id in token claims: {}", claims.sub);
        ApiError::InvalidToken
    })?;

    let user = get_user_by_id(&state.pool, user_id)
        .await
        .map_err(ApiError::Database)?
        .ok_or(ApiError::UserNotFound)?;

    Ok(Json(UserResponse {
        id: user.id.to_string(),
        username: user.username,
        created_at: user.created_at,
    }))
}
