use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::app_state::SharedState;
use crate::task_delete_response::TaskDeleteResponse;
use crate::validation::schemas;
use crate::validation_error_response::ValidationErrorResponse;
use crate::web_api::error_handler::AppError;

const TASK_NOT_FOUND: &str = "Task not found";

pub struct TaskController {}

impl TaskController {
    // POST /v1/task
    pub async fn add(
        State(state): State<SharedState>,
        Json(payload): Json<Value>,
    ) -> Result<Response, AppError> {
        let request = match schemas::validate_create_task(&payload) {
            Ok(request) => request,
            Err(errors) => return Ok(validation_failure(errors)),
        };

        let task = state.task_service.create_task(request).await?;
        Ok((StatusCode::CREATED, Json(task)).into_response())
    }

    // GET /v1/task
    pub async fn get_all(State(state): State<SharedState>) -> Result<Response, AppError> {
        let tasks = state.task_service.get_all_tasks().await?;
        Ok(Json(tasks).into_response())
    }

    // GET /v1/task/:id
    pub async fn get(
        State(state): State<SharedState>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let id = match schemas::validate_task_id(&id) {
            Ok(id) => id,
            Err(errors) => return Ok(validation_failure(errors)),
        };

        match state.task_service.get_task_by_id(id).await? {
            Some(task) => Ok(Json(task).into_response()),
            None => Ok(not_found()),
        }
    }

    // PUT /v1/task/:id
    pub async fn edit(
        State(state): State<SharedState>,
        Path(id): Path<String>,
        Json(payload): Json<Value>,
    ) -> Result<Response, AppError> {
        let id = match schemas::validate_task_id(&id) {
            Ok(id) => id,
            Err(errors) => return Ok(validation_failure(errors)),
        };
        let request = match schemas::validate_update_task(&payload) {
            Ok(request) => request,
            Err(errors) => return Ok(validation_failure(errors)),
        };

        match state.task_service.update_task(id, request).await? {
            Some(task) => Ok(Json(task).into_response()),
            None => Ok(not_found()),
        }
    }

    // DELETE /v1/task/:id
    pub async fn delete(
        State(state): State<SharedState>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let id = match schemas::validate_task_id(&id) {
            Ok(id) => id,
            Err(errors) => return Ok(validation_failure(errors)),
        };

        match state.task_service.delete_task(id).await? {
            Some(_) => Ok(Json(TaskDeleteResponse::deleted()).into_response()),
            None => Ok(not_found()),
        }
    }
}

fn validation_failure(errors: Vec<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ValidationErrorResponse { errors }),
    )
        .into_response()
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, TASK_NOT_FOUND).into_response()
}
