use crate::create_task_request::CreateTaskRequest;
use crate::data_access::data_context::DataContext;
use crate::task::Task;
use crate::update_task_request::UpdateTaskRequest;

/// Maps the five domain operations onto gateway calls. Holds no state of
/// its own, so concurrent requests need no coordination here.
#[derive(Clone)]
pub struct TaskService {
    data_context: DataContext,
}

impl TaskService {
    pub fn new(data_context: DataContext) -> Self {
        TaskService { data_context }
    }

    /// Inserts a new row and returns it with the storage-generated id.
    pub async fn create_task(&self, request: CreateTaskRequest) -> Result<Task, sqlx::Error> {
        self.data_context.insert_task(&request).await
    }

    /// Every task, ascending id.
    pub async fn get_all_tasks(&self) -> Result<Vec<Task>, sqlx::Error> {
        self.data_context.list_tasks().await
    }

    /// Absence is `None`, never an error.
    pub async fn get_task_by_id(&self, id: i64) -> Result<Option<Task>, sqlx::Error> {
        self.data_context.get_task(id).await
    }

    /// Fetches the existing row, overlays only the provided fields and
    /// persists the merged record. Omitted fields keep their stored value.
    pub async fn update_task(
        &self,
        id: i64,
        request: UpdateTaskRequest,
    ) -> Result<Option<Task>, sqlx::Error> {
        let Some(mut task) = self.data_context.get_task(id).await? else {
            return Ok(None);
        };

        if let Some(title) = request.title {
            task.title = title;
        }
        if let Some(description) = request.description {
            task.description = Some(description);
        }
        if let Some(status) = request.status {
            task.status = status;
        }
        if let Some(due_date) = request.due_date {
            task.due_date = Some(due_date);
        }

        self.data_context.update_task(&task).await?;
        Ok(Some(task))
    }

    /// Removes the row and returns it as it existed before deletion.
    pub async fn delete_task(&self, id: i64) -> Result<Option<Task>, sqlx::Error> {
        let Some(task) = self.data_context.get_task(id).await? else {
            return Ok(None);
        };
        self.data_context.delete_task(id).await?;
        Ok(Some(task))
    }
}
