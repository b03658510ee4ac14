use std::sync::Arc;

use super::entities::Task;
use super::errors::TaskError;
use super::ports::TaskRepository;
use super::value_objects::{TaskDetails, TaskId};
use crate::domain::auth::ports::Clock;

/// Plain CRUD over tasks
pub struct TaskService {
  task_repo: Arc<dyn TaskRepository>,
  clock: Arc<dyn Clock>,
}

impl TaskService {
  pub fn new(task_repo: Arc<dyn TaskRepository>, clock: Arc<dyn Clock>) -> Self {
    Self { task_repo, clock }
  }

  pub async fn list(&self) -> Result<Vec<Task>, TaskError> {
    Ok(self.task_repo.list_all().await?)
  }

  pub async fn get(&self, id: TaskId) -> Result<Task, TaskError> {
    self
      .task_repo
      .find_by_id(id)
      .await?
      .ok_or(TaskError::NotFound)
  }

  pub async fn create(&self, details: TaskDetails) -> Result<Task, TaskError> {
    let task = self
      .task_repo
      .create(Task::new(details, self.clock.now()))
      .await?;

    tracing::info!(task_id = %task.id, "Task created");
    Ok(task)
  }

  pub async fn update(&self, id: TaskId, details: TaskDetails) -> Result<Task, TaskError> {
    let mut task = self.get(id).await?;
    task.apply(details, self.clock.now());

    let task = self
      .task_repo
      .update(task)
      .await?
      .ok_or(TaskError::NotFound)?;

    tracing::info!(task_id = %task.id, "Task updated");
    Ok(task)
  }

  pub async fn delete(&self, id: TaskId) -> Result<(), TaskError> {
    if !self.task_repo.delete(id).await? {
      return Err(TaskError::NotFound);
    }

    tracing::info!(task_id = %id, "Task deleted");
    Ok(())
  }
}
