use std::net::SocketAddr;
use std::sync::Arc;

use task_api::{
    app_state::AppState, data_access::data_context::DataContext, logging::logger, map_routes,
    services::task_service::TaskService, settings::Settings,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // ── Logging ────────────────────────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // ── Settings ───────────────────────────────────────────────
    let settings = Settings::load().expect("Failed to load settings");

    // ── Storage ────────────────────────────────────────────────
    let data_context = DataContext::connect(&settings.database_url)
        .await
        .expect("Failed to open database");

    data_context
        .ensure_schema()
        .await
        .expect("Failed to create tasks table");

    // ── Shared state ───────────────────────────────────────────
    let reporter = logger::build_reporter(&settings);
    let state = Arc::new(AppState {
        task_service: TaskService::new(data_context.clone()),
        data_context,
        reporter,
    });

    // ── Router ─────────────────────────────────────────────────
    let app = map_routes(state);

    // ── Start ──────────────────────────────────────────────────
    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    info!("Server running on http://localhost:{}", settings.port);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind port");
    axum::serve(listener, app).await.expect("Server error");
}
