//! Service-level CRUD tests against a throwaway SQLite file.

use chrono::NaiveDate;
use task_api::{
    create_task_request::CreateTaskRequest, data_access::data_context::DataContext,
    task_status::TaskStatus, update_task_request::UpdateTaskRequest, TaskService,
};
use tempfile::TempDir;

async fn make_service() -> (TaskService, TempDir) {
    let dir = TempDir::new().unwrap();
    let url = format!("sqlite://{}/tasks.db?mode=rwc", dir.path().display());
    let data_context = DataContext::connect(&url).await.unwrap();
    data_context.ensure_schema().await.unwrap();
    (TaskService::new(data_context), dir)
}

fn create_request(title: &str, status: TaskStatus) -> CreateTaskRequest {
    CreateTaskRequest {
        title: title.to_string(),
        description: None,
        status,
        due_date: None,
    }
}

#[tokio::test]
async fn create_assigns_id_and_round_trips_fields() {
    let (service, _dir) = make_service().await;

    let due = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
    let task = service
        .create_task(CreateTaskRequest {
            title: "Write spec".to_string(),
            description: Some("first draft".to_string()),
            status: TaskStatus::Todo,
            due_date: Some(due),
        })
        .await
        .unwrap();

    assert!(task.id >= 1);
    assert_eq!(task.title, "Write spec");
    assert_eq!(task.description.as_deref(), Some("first draft"));
    assert_eq!(task.status, TaskStatus::Todo);
    assert_eq!(task.due_date, Some(due));

    let fetched = service.get_task_by_id(task.id).await.unwrap().unwrap();
    assert_eq!(fetched.title, task.title);
    assert_eq!(fetched.description, task.description);
    assert_eq!(fetched.status, task.status);
    assert_eq!(fetched.due_date, task.due_date);
}

#[tokio::test]
async fn generated_ids_are_never_reused() {
    let (service, _dir) = make_service().await;

    let first = service
        .create_task(create_request("a", TaskStatus::Todo))
        .await
        .unwrap();
    service.delete_task(first.id).await.unwrap();

    let second = service
        .create_task(create_request("b", TaskStatus::Todo))
        .await
        .unwrap();
    assert_ne!(second.id, first.id);
}

#[tokio::test]
async fn listing_returns_all_tasks_in_ascending_id_order() {
    let (service, _dir) = make_service().await;

    for i in 0..5 {
        service
            .create_task(create_request(&format!("task {i}"), TaskStatus::Todo))
            .await
            .unwrap();
    }

    let tasks = service.get_all_tasks().await.unwrap();
    assert_eq!(tasks.len(), 5);
    for pair in tasks.windows(2) {
        assert!(pair[0].id < pair[1].id);
    }
}

#[tokio::test]
async fn get_by_unknown_id_is_absence_not_error() {
    let (service, _dir) = make_service().await;
    assert!(service.get_task_by_id(999).await.unwrap().is_none());
}

#[tokio::test]
async fn partial_update_changes_only_provided_fields() {
    let (service, _dir) = make_service().await;

    let due = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
    let task = service
        .create_task(CreateTaskRequest {
            title: "keep me".to_string(),
            description: Some("also keep me".to_string()),
            status: TaskStatus::Todo,
            due_date: Some(due),
        })
        .await
        .unwrap();

    let updated = service
        .update_task(
            task.id,
            UpdateTaskRequest {
                status: Some(TaskStatus::Done),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.status, TaskStatus::Done);
    assert_eq!(updated.title, "keep me");
    assert_eq!(updated.description.as_deref(), Some("also keep me"));
    assert_eq!(updated.due_date, Some(due));

    // Persisted, not just merged in memory.
    let fetched = service.get_task_by_id(task.id).await.unwrap().unwrap();
    assert_eq!(fetched.status, TaskStatus::Done);
    assert_eq!(fetched.description.as_deref(), Some("also keep me"));
}

#[tokio::test]
async fn update_on_missing_task_returns_none() {
    let (service, _dir) = make_service().await;
    let result = service
        .update_task(
            42,
            UpdateTaskRequest {
                title: Some("ghost".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn delete_returns_prior_row_then_absence_everywhere() {
    let (service, _dir) = make_service().await;

    let task = service
        .create_task(create_request("short lived", TaskStatus::InProgress))
        .await
        .unwrap();

    let deleted = service.delete_task(task.id).await.unwrap().unwrap();
    assert_eq!(deleted.id, task.id);
    assert_eq!(deleted.title, "short lived");

    assert!(service.get_task_by_id(task.id).await.unwrap().is_none());
    assert!(service
        .update_task(task.id, UpdateTaskRequest::default())
        .await
        .unwrap()
        .is_none());
    assert!(service.delete_task(task.id).await.unwrap().is_none());
}
