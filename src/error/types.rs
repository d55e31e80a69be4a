/**
 * API Error Types
 *
 * This module defines the error taxonomy for the API. Each variant maps to
 * an HTTP status code and a client-visible message. Internal failures
 * (database, hashing, signing) carry their source error for logging but
 * never leak details to the client.
 *
 * # Error Categories
 *
 * ## Authentication (401)
 *
 * - `MissingToken` - No bearer token in the Authorization header
 * - `InvalidToken` - Token failed signature or expiry validation
 * - `InvalidCredentials` - Password mismatch on signin
 *
 * ## Client errors
 *
 * - `DuplicateUser` (409) - Username uniqueness violated on signup
 * - `UserNotFound` (404) - Signin for an unknown username
 * - `NotImplemented` (501) - Resource route with no business logic yet
 *
 * ## Internal (500)
 *
 * - `Database`, `Hash`, `Token` - Unexpected failures in collaborators
 */

use axum::http::StatusCode;
use thiserror::Error;

/// API error taxonomy
///
/// Handlers and middleware return this type; it converts directly to an
/// HTTP response via `IntoResponse` (see `error::conversion`).
#[derive(Debug, Error)]
pub enum ApiError {
    /// Authorization header absent, or present without a token segment
    #[error("No token present!")]
    MissingToken,

    /// Token failed verification (bad signature, malformed, or expired)
    #[error("Invalid token!")]
    InvalidToken,

    /// Signup with a username that already exists
    #[error("Username already taken")]
    DuplicateUser,

    /// Signin for a username with no matching user record
    #[error("User not found")]
    UserNotFound,

    /// Signin with a password that does not match the stored hash
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Route is declared but has no business logic
    #[error("Not implemented")]
    NotImplemented,

    /// Unexpected database failure
    #[error("Database error")]
    Database(#[source] sqlx::Error),

    /// Password hashing or verification failure (e.g. malformed stored hash)
    #[error("Password hashing error")]
    Hash(#[from] bcrypt::BcryptError),

    /// Token signing failure
    #[error("Token signing error")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl ApiError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingToken | ApiError::InvalidToken | ApiError::InvalidCredentials => {
                StatusCode::UNAUTHORIZED
            }
            ApiError::DuplicateUser => StatusCode::CONFLICT,
            ApiError::UserNotFound => StatusCode::NOT_FOUND,
            ApiError::NotImplemented => StatusCode::NOT_IMPLEMENTED,
            ApiError::Database(_) | ApiError::Hash(_) | ApiError::Token(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Client-visible message for this error
    ///
    /// Internal errors all render the same generic message; their details
    /// are logged server-side only.
    pub fn message(&self) -> String {
        match self {
            ApiError::Database(_) | ApiError::Hash(_) | ApiError::Token(_) => {
                "Internal server error".to_string()
            }
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_errors_map_to_401() {
        assert_eq!(ApiError::MissingToken.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::InvalidToken.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_gate_messages_match_contract() {
        assert_eq!(ApiError::MissingToken.message(), "No token present!");
        assert_eq!(ApiError::InvalidToken.message(), "Invalid token!");
    }

    #[test]
    fn test_internal_errors_do_not_leak_details() {
        let err = ApiError::Database(sqlx::Error::RowNotFound);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Internal server error");
    }

    #[test]
    fn test_client_error_statuses() {
        assert_eq!(ApiError::DuplicateUser.status_code(), StatusCode::CONFLICT);
        assert_eq!(ApiError::UserNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::NotImplemented.status_code(),
            StatusCode::NOT_IMPLEMENTED
        );
    }
}
