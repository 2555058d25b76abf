pub mod health_routes;
pub mod task_routes;

use axum::{middleware, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::app_state::SharedState;
use crate::web_api::error_handler;

pub const API_VERSION: &str = "v1";

pub fn map_routes(app_state: SharedState) -> Router {
    let api = Router::new()
        .merge(task_routes::get_router(app_state.clone()))
        .merge(health_routes::get_router(app_state.clone()));

    Router::new()
        .nest(&format!("/{API_VERSION}"), api)
        .layer(middleware::from_fn_with_state(
            app_state,
            error_handler::report_unhandled,
        ))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
