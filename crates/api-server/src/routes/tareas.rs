//! Task API endpoints
//!
//! RESTful surface for task CRUD. Wire field names stay Spanish
//! (`nombre`, `completada`) for compatibility with existing clients.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use tareas_core::task::{Task, TaskUpdate};

use crate::api_key::require_api_key;
use crate::routes::{error_response, RouteError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct CreateTareaRequest {
    nombre: String,
}

#[derive(Debug, Deserialize)]
struct UpdateTareaRequest {
    #[serde(default)]
    nombre: Option<String>,
    #[serde(default)]
    completada: Option<bool>,
}

#[derive(Debug, Serialize)]
struct TareaResponse {
    id: i64,
    nombre: String,
    completada: bool,
}

impl From<Task> for TareaResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            nombre: task.name,
            completada: task.completed,
        }
    }
}

/// GET /tareas - List all tasks in creation order
async fn list_tareas(
    State(state): State<AppState>,
) -> Result<Json<Vec<TareaResponse>>, RouteError> {
    let tasks = state.tasks().list().await.map_err(error_response)?;
    Ok(Json(tasks.into_iter().map(TareaResponse::from).collect()))
}

/// POST /tareas - Create a new task
async fn create_tarea(
    State(state): State<AppState>,
    Json(req): Json<CreateTareaRequest>,
) -> Result<(StatusCode, Json<TareaResponse>), RouteError> {
    let task = state
        .tasks()
        .create(&req.nombre)
        .await
        .map_err(error_response)?;
    Ok((StatusCode::CREATED, Json(TareaResponse::from(task))))
}

/// GET /tareas/{id} - Get a single task
async fn get_tarea(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TareaResponse>, RouteError> {
    let task = state.tasks().get(id).await.map_err(error_response)?;
    Ok(Json(TareaResponse::from(task)))
}

/// PUT /tareas/{id} - Partially update a task
async fn update_tarea(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateTareaRequest>,
) -> Result<Json<TareaResponse>, RouteError> {
    let changes = TaskUpdate {
        name: req.nombre,
        completed: req.completada,
    };
    let task = state
        .tasks()
        .update(id, changes)
        .await
        .map_err(error_response)?;
    Ok(Json(TareaResponse::from(task)))
}

/// DELETE /tareas/{id} - Delete a task
async fn delete_tarea(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, RouteError> {
    state.tasks().delete(id).await.map_err(error_response)?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/tareas", get(list_tareas).post(create_tarea))
        .route(
            "/tareas/{id}",
            get(get_tarea).put(update_tarea).delete(delete_tarea),
        )
        .layer(middleware::from_fn_with_state(state, require_api_key))
}
