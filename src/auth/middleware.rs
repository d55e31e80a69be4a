/**
 * Authentication Middleware
 *
 * This module provides the middleware protecting the `/api` routes. It
 * extracts a bearer token from the Authorization header, verifies it via
 * the token service, and attaches the decoded claims to the request
 * extensions for downstream handlers.
 *
 * # Rejections
 *
 * - Missing header, or header without a token segment:
 *   401 `{"message": "No token present!"}`
 * - Verification failure: 401 `{"message": "Invalid token!"}`, with the
 *   underlying error logged server-side
 *
 * The scheme segment is not validated beyond its presence; the header
 * contract is `<scheme> <token>` split on whitespace.
 */

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::ApiError;
use crate::server::state::AppState;

/// Extract the token segment from an Authorization header value
///
/// Expects `<scheme> <token>`; returns `None` when there is no second
/// whitespace-separated segment (e.g. `"Bearer"` alone).
fn bearer_token(header: &str) -> Option<&str> {
    let mut segments = header.split_whitespace();
    let _scheme = segments.next()?;
    segments.next()
}

/// Bearer-token gate for protected routes
///
/// On success the decoded [`Claims`](crate::auth::token::Claims) are
/// inserted into the request extensions and control passes downstream;
/// on any failure the request is rejected with 401 and never reaches a
/// handler.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let Some(header) = header else {
        tracing::warn!("Missing Authorization header");
        return ApiError::MissingToken.into_response();
    };

    let Some(token) = bearer_token(header) else {
        tracing::warn!("Authorization header without token segment");
        return ApiError::MissingToken.into_response();
    };

    match state.tokens.verify(token) {
        Ok(claims) => {
            request.extensions_mut().insert(claims);
            next.run(request).await
        }
        Err(e) => {
            tracing::warn!("Token verification failed: {}", e);
            ApiError::InvalidToken.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_token_extracts_second_segment() {
        assert_eq!(bearer_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
    }

    #[test]
    fn test_bearer_token_scheme_is_not_validated() {
        assert_eq!(bearer_token("Token abc"), Some("abc"));
    }

    #[test]
    fn test_bearer_token_missing_segment() {
        assert_eq!(bearer_token("Bearer"), None);
        assert_eq!(bearer_token(""), None);
    }

    #[test]
    fn test_bearer_token_extra_whitespace() {
        assert_eq!(bearer_token("Bearer   abc"), Some("abc"));
    }
}
