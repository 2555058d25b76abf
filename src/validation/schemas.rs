use chrono::{DateTime, NaiveDate};
use serde_json::{Map, Value};

use crate::create_task_request::CreateTaskRequest;
use crate::task_status::TaskStatus;
use crate::update_task_request::UpdateTaskRequest;

const CREATE_FIELDS: [&str; 4] = ["title", "description", "status", "dueDate"];
const UPDATE_FIELDS: [&str; 5] = ["id", "title", "description", "status", "dueDate"];

/// Validates a create payload. Returns the typed request, or every
/// violation found in a single pass (not fail-fast). The payload itself is
/// never mutated.
pub fn validate_create_task(payload: &Value) -> Result<CreateTaskRequest, Vec<String>> {
    let Some(object) = payload.as_object() else {
        return Err(vec![r#""value" must be of type object"#.to_string()]);
    };

    let mut errors = unknown_field_errors(object, &CREATE_FIELDS);

    let title = match object.get("title") {
        None => {
            errors.push(r#""title" is required"#.to_string());
            None
        }
        Some(value) => required_string("title", value, &mut errors),
    };

    let status = match object.get("status") {
        None => {
            errors.push(r#""status" is required"#.to_string());
            None
        }
        Some(value) => status_member(value, &mut errors),
    };

    let description = optional_string(object, "description", &mut errors);
    let due_date = optional_iso_date(object, "dueDate", &mut errors);

    match (title, status) {
        (Some(title), Some(status)) if errors.is_empty() => Ok(CreateTaskRequest {
            title,
            description,
            status,
            due_date,
        }),
        _ => Err(errors),
    }
}

/// Validates a partial-update payload: all fields optional, same per-field
/// rules as create when present.
pub fn validate_update_task(payload: &Value) -> Result<UpdateTaskRequest, Vec<String>> {
    let Some(object) = payload.as_object() else {
        return Err(vec![r#""value" must be of type object"#.to_string()]);
    };

    let mut errors = unknown_field_errors(object, &UPDATE_FIELDS);

    // A redundant body id is tolerated for compatibility but never used;
    // the path parameter is authoritative.
    if let Some(value) = object.get("id") {
        check_positive_integer(value, &mut errors);
    }

    let title = match object.get("title") {
        None => None,
        Some(value) => required_string("title", value, &mut errors),
    };

    let status = match object.get("status") {
        None => None,
        Some(value) => status_member(value, &mut errors),
    };

    let description = optional_string(object, "description", &mut errors);
    let due_date = optional_iso_date(object, "dueDate", &mut errors);

    if errors.is_empty() {
        Ok(UpdateTaskRequest {
            title,
            description,
            status,
            due_date,
        })
    } else {
        Err(errors)
    }
}

/// Validates the `:id` path parameter: an integer >= 1.
pub fn validate_task_id(raw: &str) -> Result<i64, Vec<String>> {
    match raw.parse::<i64>() {
        Ok(id) if id >= 1 => Ok(id),
        Ok(_) => Err(vec![r#""id" must be greater than or equal to 1"#.to_string()]),
        Err(_) => {
            if raw.parse::<f64>().is_ok() {
                Err(vec![r#""id" must be an integer"#.to_string()])
            } else {
                Err(vec![r#""id" must be a number"#.to_string()])
            }
        }
    }
}

fn unknown_field_errors(object: &Map<String, Value>, allowed: &[&str]) -> Vec<String> {
    object
        .keys()
        .filter(|key| !allowed.contains(&key.as_str()))
        .map(|key| format!(r#""{key}" is not allowed"#))
        .collect()
}

fn required_string(field: &str, value: &Value, errors: &mut Vec<String>) -> Option<String> {
    match value {
        Value::String(s) if s.is_empty() => {
            errors.push(format!(r#""{field}" is not allowed to be empty"#));
            None
        }
        Value::String(s) => Some(s.clone()),
        _ => {
            errors.push(format!(r#""{field}" must be a string"#));
            None
        }
    }
}

fn status_member(value: &Value, errors: &mut Vec<String>) -> Option<TaskStatus> {
    let status = value.as_str().and_then(TaskStatus::parse);
    if status.is_none() {
        errors.push(format!(
            r#""status" must be one of [{}]"#,
            TaskStatus::ALLOWED.join(", ")
        ));
    }
    status
}

fn optional_string(
    object: &Map<String, Value>,
    field: &str,
    errors: &mut Vec<String>,
) -> Option<String> {
    match object.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(format!(r#""{field}" must be a string"#));
            None
        }
    }
}

fn optional_iso_date(
    object: &Map<String, Value>,
    field: &str,
    errors: &mut Vec<String>,
) -> Option<NaiveDate> {
    match object.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => {
            let parsed = parse_iso_date(s);
            if parsed.is_none() {
                errors.push(format!(r#""{field}" must be in ISO 8601 date format"#));
            }
            parsed
        }
        Some(_) => {
            errors.push(format!(r#""{field}" must be in ISO 8601 date format"#));
            None
        }
    }
}

fn check_positive_integer(value: &Value, errors: &mut Vec<String>) {
    match value.as_i64() {
        Some(id) if id >= 1 => {}
        Some(_) => errors.push(r#""id" must be greater than or equal to 1"#.to_string()),
        None if value.is_number() => errors.push(r#""id" must be an integer"#.to_string()),
        None => errors.push(r#""id" must be a number"#.to_string()),
    }
}

/// Accepts a plain date or a full RFC 3339 timestamp, keeping the date part.
fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = raw.parse::<NaiveDate>() {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|timestamp| timestamp.date_naive())
}
