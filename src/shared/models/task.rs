use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::task_status::TaskStatus;

/// The persisted entity. `id` is assigned by the storage layer on insert
/// and never by the application.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: TaskStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}
