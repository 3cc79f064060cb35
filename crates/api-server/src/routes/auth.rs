//! Authentication endpoints
//!
//! Registration, login and the bearer-protected identity lookup. Failed
//! logins answer 401 with a uniform message so callers cannot probe which
//! part of the credentials was wrong.

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use tareas_core::user::UserSummary;
use tareas_core::Error;

use crate::routes::{error_response, RouteError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct RegisterRequest {
    email: String,
    password: String,
}

#[derive(Debug, Deserialize)]
struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Serialize)]
struct TokenResponse {
    access_token: String,
    token_type: String,
}

/// POST /auth/register - Register a new user
async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserSummary>), RouteError> {
    let user = state
        .users()
        .register(&req.email, &req.password)
        .await
        .map_err(error_response)?;
    Ok((StatusCode::CREATED, Json(user.summary())))
}

/// POST /auth/login - Authenticate and issue a token
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, RouteError> {
    let access = state
        .users()
        .login(&req.email, &req.password)
        .await
        .map_err(error_response)?;
    Ok(Json(TokenResponse {
        access_token: access.token,
        token_type: "bearer".to_string(),
    }))
}

/// GET /auth/me - Resolve the authenticated user
async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<UserSummary>, RouteError> {
    let token = bearer_token(&headers).ok_or_else(|| error_response(Error::Authentication))?;
    let user = state.users().verify(token).await.map_err(error_response)?;
    Ok(Json(user.summary()))
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/me", get(me))
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;

    fn app() -> Router {
        let state = AppState::in_memory(None);
        Router::new().merge(router()).with_state(state)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(body: Body) -> Value {
        let bytes = to_bytes(body, usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn credentials() -> Value {
        json!({ "email": "ana@example.com", "password": "verysecurepw" })
    }

    #[tokio::test]
    async fn test_register_returns_201_without_password() {
        let app = app();

        let response = app
            .oneshot(post_json("/auth/register", credentials()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response.into_body()).await;
        assert_eq!(body, json!({ "id": 1, "email": "ana@example.com" }));
    }

    #[tokio::test]
    async fn test_duplicate_register_returns_409() {
        let app = app();

        app.clone()
            .oneshot(post_json("/auth/register", credentials()))
            .await
            .unwrap();
        let response = app
            .oneshot(post_json("/auth/register", credentials()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_invalid_input_returns_422() {
        let app = app();

        let response = app
            .clone()
            .oneshot(post_json(
                "/auth/register",
                json!({ "email": "not-an-email", "password": "verysecurepw" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let response = app
            .oneshot(post_json(
                "/auth/register",
                json!({ "email": "ana@example.com", "password": "short" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_login_and_me_roundtrip() {
        let app = app();

        app.clone()
            .oneshot(post_json("/auth/register", credentials()))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(post_json("/auth/login", credentials()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response.into_body()).await;
        assert_eq!(body["token_type"], "bearer");
        let token = body["access_token"].as_str().unwrap().to_string();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/auth/me")
                    .header(header::AUTHORIZATION, format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response.into_body()).await;
        assert_eq!(body, json!({ "id": 1, "email": "ana@example.com" }));
    }

    #[tokio::test]
    async fn test_bad_credentials_return_401() {
        let app = app();

        app.clone()
            .oneshot(post_json("/auth/register", credentials()))
            .await
            .unwrap();

        let response = app
            .oneshot(post_json(
                "/auth/login",
                json!({ "email": "ana@example.com", "password": "wrongpassword" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response.into_body()).await;
        assert_eq!(body["error"], "invalid credentials");
    }

    #[tokio::test]
    async fn test_me_rejects_missing_and_invalid_tokens() {
        let app = app();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/auth/me")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/auth/me")
                    .header(header::AUTHORIZATION, "Bearer not-a-token")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
