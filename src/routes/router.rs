/**
 * Router Configuration
 *
 * This module assembles the application router:
 *
 * - `GET /` - plain-text acknowledgement (public)
 * - `POST /user` - signup (public)
 * - `POST /signin` - signin (public)
 * - `/api/...` - resource routes and `/api/me`, behind the auth middleware
 *
 * Global layers, outermost first: CORS, request tracing, and the
 * request-context middleware. The auth gate is layered only on the nested
 * `/api` router, so public routes never see it.
 */

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::auth::handlers::{me, signin, signup};
use crate::auth::middleware::require_auth;
use crate::routes::context::attach_request_context;
use crate::routes::resources::resource_routes;
use crate::server::state::AppState;

/// Create the application router with all routes and layers configured
pub fn create_router(state: AppState) -> Router {
    // Protected API surface: resources plus the current-user endpoint
    let api = resource_routes()
        .route("/me", get(me))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_auth,
        ));

    Router::new()
        .route("/", get(root))
        .route("/user", post(signup))
        .route("/signin", post(signin))
        .nest("/api", api)
        .layer(middleware::from_fn(attach_request_context))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Liveness acknowledgement
async fn root() -> &'static str {
    "this is working!"
}
