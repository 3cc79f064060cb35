//! Static shared-secret check for the task routes
//!
//! Earlier deployments of this API authenticated with a single shared key in
//! the `x-api-key` header; the middleware keeps that surface available next
//! to the JWT flow. A no-op when no key is configured.

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::routes::ErrorResponse;
use crate::state::AppState;

pub const API_KEY_HEADER: &str = "x-api-key";

pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if let Some(expected) = state.api_key() {
        let provided = request
            .headers()
            .get(API_KEY_HEADER)
            .and_then(|value| value.to_str().ok());
        if provided != Some(expected) {
            return (
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse {
                    error: "invalid API key".to_string(),
                }),
            )
                .into_response();
        }
    }
    next.run(request).await
}
