use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use crate::create_task_request::CreateTaskRequest;
use crate::task::Task;

const CREATE_TASKS_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS tasks (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        description TEXT,
        status TEXT NOT NULL,
        due_date TEXT
    )
";

/// Persistence gateway. Owns the connection pool and executes every
/// parameterized statement; primary keys are generated by the storage
/// layer, never here.
#[derive(Clone)]
pub struct DataContext {
    pool: SqlitePool,
}

impl DataContext {
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        Ok(DataContext { pool })
    }

    pub fn pool(&self) -> SqlitePool {
        self.pool.clone()
    }

    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(CREATE_TASKS_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    /// Cheap connectivity probe for the health endpoint.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub async fn insert_task(&self, request: &CreateTaskRequest) -> Result<Task, sqlx::Error> {
        sqlx::query_as(
            "INSERT INTO tasks (title, description, status, due_date) VALUES (?, ?, ?, ?) \
             RETURNING id, title, description, status, due_date",
        )
        .bind(&request.title)
        .bind(&request.description)
        .bind(request.status)
        .bind(request.due_date)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn list_tasks(&self) -> Result<Vec<Task>, sqlx::Error> {
        sqlx::query_as("SELECT id, title, description, status, due_date FROM tasks ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn get_task(&self, id: i64) -> Result<Option<Task>, sqlx::Error> {
        sqlx::query_as("SELECT id, title, description, status, due_date FROM tasks WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn update_task(&self, task: &Task) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE tasks SET title = ?, description = ?, status = ?, due_date = ? WHERE id = ?")
            .bind(&task.title)
            .bind(&task.description)
            .bind(task.status)
            .bind(task.due_date)
            .bind(task.id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn delete_task(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
