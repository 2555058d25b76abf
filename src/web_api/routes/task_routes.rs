use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::{app_state::AppState, task_controller::TaskController};

pub const ROUTER_PATH: &str = "/task";

pub fn get_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            ROUTER_PATH,
            post(TaskController::add).get(TaskController::get_all),
        )
        .route(
            format!("{}/:id", ROUTER_PATH).as_str(),
            get(TaskController::get)
                .put(TaskController::edit)
                .delete(TaskController::delete),
        )
        .with_state(app_state)
}
