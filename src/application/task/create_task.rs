use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::domain::task::{Task, TaskDetails, TaskError, TaskService};

/// Caller-supplied task fields, shared by create and update
#[derive(Debug, Clone, Default)]
pub struct TaskCommand {
  pub title: String,
  pub description: Option<String>,
  pub due_date: Option<DateTime<Utc>>,
  pub status: String,
}

impl TryFrom<TaskCommand> for TaskDetails {
  type Error = TaskError;

  fn try_from(command: TaskCommand) -> Result<Self, Self::Error> {
    Ok(TaskDetails::new(
      command.title,
      command.description.unwrap_or_default(),
      command.due_date,
      command.status,
    )?)
  }
}

pub struct CreateTaskUseCase {
  task_service: Arc<TaskService>,
}

impl CreateTaskUseCase {
  pub fn new(task_service: Arc<TaskService>) -> Self {
    Self { task_service }
  }

  pub async fn execute(&self, command: TaskCommand) -> Result<Task, TaskError> {
    self.task_service.create(command.try_into()?).await
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::application::task::{
    DeleteTaskUseCase, GetTaskUseCase, ListTasksUseCase, UpdateTaskUseCase,
  };
  use crate::domain::auth::errors::ValidationError;
  use crate::infrastructure::persistence::memory::InMemoryTaskRepository;
  use crate::infrastructure::time::SystemClock;

  fn service() -> Arc<TaskService> {
    Arc::new(TaskService::new(
      Arc::new(InMemoryTaskRepository::new()),
      Arc::new(SystemClock),
    ))
  }

  fn command(title: &str, status: &str) -> TaskCommand {
    TaskCommand {
      title: title.to_string(),
      status: status.to_string(),
      ..Default::default()
    }
  }

  #[tokio::test]
  async fn test_crud_through_use_cases() {
    let service = service();

    let created = CreateTaskUseCase::new(service.clone())
      .execute(command("Write report", "pending"))
      .await
      .unwrap();
    assert_eq!(created.description, "");

    let id = created.id.to_string();
    let fetched = GetTaskUseCase::new(service.clone()).execute(&id).await.unwrap();
    assert_eq!(fetched, created);

    let updated = UpdateTaskUseCase::new(service.clone())
      .execute(&id, command("Write report", "completed"))
      .await
      .unwrap();
    assert_eq!(updated.status, "completed");

    DeleteTaskUseCase::new(service.clone()).execute(&id).await.unwrap();
    assert!(
      ListTasksUseCase::new(service)
        .execute()
        .await
        .unwrap()
        .is_empty()
    );
  }

  #[tokio::test]
  async fn test_missing_title_is_rejected() {
    let result = CreateTaskUseCase::new(service())
      .execute(command("", "pending"))
      .await;

    assert!(matches!(
      result,
      Err(TaskError::Validation(ValidationError::MissingField { .. }))
    ));
  }

  #[tokio::test]
  async fn test_bad_identifier() {
    let result = GetTaskUseCase::new(service()).execute("42").await;

    assert!(matches!(
      result,
      Err(TaskError::Validation(ValidationError::InvalidIdentifier))
    ));
  }
}
