use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::app_state::SharedState;
use crate::web_api::error_handler::AppError;

pub struct HealthController {}

impl HealthController {
    // GET /v1/health/check_status
    pub async fn get(State(state): State<SharedState>) -> Result<Response, AppError> {
        state.data_context.ping().await?;
        Ok((StatusCode::OK, "OK").into_response())
    }
}
