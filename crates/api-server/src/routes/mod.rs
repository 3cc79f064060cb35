//! Route handlers

pub mod auth;
pub mod health;
pub mod tareas;

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use tareas_core::Error;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub(crate) type RouteError = (StatusCode, Json<ErrorResponse>);

/// Translate a core error into the HTTP taxonomy.
///
/// Validation and conflict failures become 4xx responses; connectivity
/// failures surface as 503 without retries.
pub(crate) fn error_response(err: Error) -> RouteError {
    let status = match &err {
        Error::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        Error::Conflict(_) => StatusCode::CONFLICT,
        Error::Authentication => StatusCode::UNAUTHORIZED,
        Error::NotFound(_) => StatusCode::NOT_FOUND,
        Error::Connectivity(_) => StatusCode::SERVICE_UNAVAILABLE,
        Error::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}
