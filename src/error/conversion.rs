/**
 * Error Conversion
 *
 * `IntoResponse` implementation for `ApiError`, allowing handlers and
 * middleware to return errors directly. Responses are JSON bodies of the
 * form `{"message": "..."}` with the mapped status code.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Internal failures are logged with their source; the client only
        // ever sees the generic message.
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("request failed: {:?}", self);
        }

        let body = Json(serde_json::json!({ "message": self.message() }));

        (status, body).into_response()
    }
}
