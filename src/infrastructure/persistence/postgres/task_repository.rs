use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::auth::errors::RepositoryError;
use crate::domain::task::{Task, TaskId, TaskRepository};

pub struct PostgresTaskRepository {
  pool: PgPool,
}

impl PostgresTaskRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[derive(Debug, sqlx::FromRow)]
struct TaskRow {
  id: Uuid,
  title: String,
  description: String,
  due_date: Option<DateTime<Utc>>,
  status: String,
  created_at: DateTime<Utc>,
  updated_at: DateTime<Utc>,
}

impl From<TaskRow> for Task {
  fn from(row: TaskRow) -> Self {
    Task {
      id: TaskId::from_uuid(row.id),
      title: row.title,
      description: row.description,
      due_date: row.due_date,
      status: row.status,
      created_at: row.created_at,
      updated_at: row.updated_at,
    }
  }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
  async fn list_all(&self) -> Result<Vec<Task>, RepositoryError> {
    let rows = sqlx::query_as::<_, TaskRow>(
      r#"
            SELECT id, title, description, due_date, status, created_at, updated_at
            FROM tasks
            ORDER BY created_at ASC
            "#,
    )
    .fetch_all(&self.pool)
    .await?;

    Ok(rows.into_iter().map(Into::into).collect())
  }

  async fn find_by_id(&self, id: TaskId) -> Result<Option<Task>, RepositoryError> {
    let row = sqlx::query_as::<_, TaskRow>(
      r#"
            SELECT id, title, description, due_date, status, created_at, updated_at
            FROM tasks
            WHERE id = $1
            "#,
    )
    .bind(id.into_inner())
    .fetch_optional(&self.pool)
    .await?;

    Ok(row.map(Into::into))
  }

  async fn create(&self, task: Task) -> Result<Task, RepositoryError> {
    let row = sqlx::query_as::<_, TaskRow>(
      r#"
            INSERT INTO tasks (id, title, description, due_date, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, title, description, due_date, status, created_at, updated_at
            "#,
    )
    .bind(task.id.into_inner())
    .bind(&task.title)
    .bind(&task.description)
    .bind(task.due_date)
    .bind(&task.status)
    .bind(task.created_at)
    .bind(task.updated_at)
    .fetch_one(&self.pool)
    .await?;

    Ok(row.into())
  }

  async fn update(&self, task: Task) -> Result<Option<Task>, RepositoryError> {
    let row = sqlx::query_as::<_, TaskRow>(
      r#"
            UPDATE tasks
            SET
                title = $2,
                description = $3,
                due_date = $4,
                status = $5,
                updated_at = $6
            WHERE id = $1
            RETURNING id, title, description, due_date, status, created_at, updated_at
            "#,
    )
    .bind(task.id.into_inner())
    .bind(&task.title)
    .bind(&task.description)
    .bind(task.due_date)
    .bind(&task.status)
    .bind(task.updated_at)
    .fetch_optional(&self.pool)
    .await?;

    Ok(row.map(Into::into))
  }

  async fn delete(&self, id: TaskId) -> Result<bool, RepositoryError> {
    let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
      .bind(id.into_inner())
      .execute(&self.pool)
      .await?;

    Ok(result.rows_affected() > 0)
  }
}
