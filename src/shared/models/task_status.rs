use serde::{Deserialize, Serialize};

/// The fixed set a task's status must belong to. The wire spelling of
/// `InProgress` is "In Progress", both in JSON and in the status column.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, sqlx::Type)]
pub enum TaskStatus {
    Todo,
    #[serde(rename = "In Progress")]
    #[sqlx(rename = "In Progress")]
    InProgress,
    Done,
}

impl TaskStatus {
    pub const ALLOWED: [&'static str; 3] = ["Todo", "In Progress", "Done"];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Todo" => Some(TaskStatus::Todo),
            "In Progress" => Some(TaskStatus::InProgress),
            "Done" => Some(TaskStatus::Done),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "Todo",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }
}
