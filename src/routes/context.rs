/**
 * Request Context
 *
 * Global middleware attaching an ephemeral per-request context to the
 * request extensions. It currently carries a single constant that the
 * product list handler echoes back; the point is that handlers read
 * request-scoped data from an explicit context object rather than
 * hidden side channels.
 */

use axum::{extract::Request, middleware::Next, response::Response};

/// Value attached to every request
pub const CONTEXT_TAG: &str = "CUSTOM";

/// Per-request context, scoped to the lifetime of one request
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub tag: &'static str,
}

/// Attach the request context before any handler runs
pub async fn attach_request_context(mut request: Request, next: Next) -> Response {
    request
        .extensions_mut()
        .insert(RequestContext { tag: CONTEXT_TAG });
    next.run(request).await
}
