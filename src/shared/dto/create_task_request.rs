use chrono::NaiveDate;

use crate::task_status::TaskStatus;

/// A fully validated create payload. Built by the validation layer,
/// never deserialized straight off the wire.
#[derive(Debug, Clone)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub due_date: Option<NaiveDate>,
}
