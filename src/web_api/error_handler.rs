use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::app_state::SharedState;
use crate::logging::logger::ErrorReport;

/// The only thing a client ever sees of an unhandled failure.
pub const GENERIC_ERROR_BODY: &str = "Oops! Something went wrong!";

/// Errors that escape a controller. Controllers never handle these inline;
/// they bubble here, get reported once, and surface as an opaque 500.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("storage failure: {0}")]
    Storage(#[from] sqlx::Error),
}

impl AppError {
    fn kind(&self) -> &'static str {
        match self {
            AppError::Storage(_) => "StorageError",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let report = ErrorReport {
            kind: self.kind().to_string(),
            detail: self.to_string(),
        };
        let mut response =
            (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_ERROR_BODY).into_response();
        // Stashed for the reporting layer; stripped from what the client gets.
        response.extensions_mut().insert(report);
        response
    }
}

/// Process-wide error layer: forwards each unhandled error to the active
/// reporter exactly once. The response body is already the generic 500.
pub async fn report_unhandled(
    State(state): State<SharedState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let response = next.run(request).await;
    if let Some(report) = response.extensions().get::<ErrorReport>() {
        state.reporter.report("Unhandled server error", report).await;
    }
    response
}
