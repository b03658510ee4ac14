use std::sync::Arc;

use crate::domain::task::{Task, TaskError, TaskId, TaskService};

pub struct GetTaskUseCase {
  task_service: Arc<TaskService>,
}

impl GetTaskUseCase {
  pub fn new(task_service: Arc<TaskService>) -> Self {
    Self { task_service }
  }

  /// # Errors
  /// `TaskError::Validation` for a non-UUID id, `TaskError::NotFound` when absent
  pub async fn execute(&self, task_id: &str) -> Result<Task, TaskError> {
    let id = TaskId::parse(task_id)?;
    self.task_service.get(id).await
  }
}
