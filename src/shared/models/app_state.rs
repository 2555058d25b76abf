use std::sync::Arc;

use crate::data_access::data_context::DataContext;
use crate::logging::logger::ErrorReporter;
use crate::services::task_service::TaskService;

/// Everything the route layer needs, constructed once at boot and passed
/// down explicitly. No ambient singletons.
pub struct AppState {
    pub task_service: TaskService,
    pub data_context: DataContext,
    pub reporter: Arc<dyn ErrorReporter>,
}

pub type SharedState = Arc<AppState>;
