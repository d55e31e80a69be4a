/**
 * Resource Routes
 *
 * Routes for the product, update, and updatepoint resource families. Each
 * family declares list (`GET /`), get-one (`GET /{id}`), create (`POST /`),
 * and update (`PUT /{id}`).
 *
 * Only `GET /product` has behavior: it echoes the request-context constant.
 * Every other route returns a deterministic 501 rather than leaving the
 * client hanging on a no-op.
 *
 * All of these routes sit behind the auth middleware (mounted in
 * `routes::router`), so handlers can rely on `Claims` being present in the
 * request extensions.
 */

use axum::{
    response::Json,
    routing::{get, put},
    Extension, Router,
};

use crate::auth::token::Claims;
use crate::error::ApiError;
use crate::routes::context::RequestContext;
use crate::server::state::AppState;

/// Build the resource router (mounted under `/api`)
pub fn resource_routes() -> Router<AppState> {
    Router::new()
        // Product routes
        .route("/product", get(list_products).post(not_implemented))
        .route("/product/{id}", get(not_implemented).put(not_implemented))
        // Update routes
        .route("/update", get(not_implemented).post(not_implemented))
        .route("/update/{id}", get(not_implemented).put(not_implemented))
        // Updatepoint routes
        .route("/updatepoint", get(not_implemented).post(not_implemented))
        .route(
            "/updatepoint/{id}",
            put(not_implemented).get(not_implemented),
        )
}

/// List products
///
/// Echoes the context constant attached by the global request-context
/// middleware.
async fn list_products(
    Extension(claims): Extension<Claims>,
    Extension(context): Extension<RequestContext>,
) -> Json<serde_json::Value> {
    tracing::debug!("Product list requested by: {}", claims.username);
    Json(serde_json::json!({ "message": context.tag }))
}

/// Placeholder for routes with no business logic yet
async fn not_implemented() -> ApiError {
    ApiError::NotImplemented
}
