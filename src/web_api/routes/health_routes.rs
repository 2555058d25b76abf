use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{app_state::AppState, health_controller::HealthController};

pub const ROUTER_PATH: &str = "/health";

pub fn get_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            format!("{}/check_status", ROUTER_PATH).as_str(),
            get(HealthController::get),
        )
        .with_state(app_state)
}
