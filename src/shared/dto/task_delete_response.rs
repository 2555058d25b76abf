use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDeleteResponse {
    pub message: String,
}

impl TaskDeleteResponse {
    pub fn deleted() -> Self {
        Self {
            message: "Task deleted successfully".to_string(),
        }
    }
}
