use std::sync::Arc;

use crate::domain::task::{Task, TaskError, TaskService};

pub struct ListTasksUseCase {
  task_service: Arc<TaskService>,
}

impl ListTasksUseCase {
  pub fn new(task_service: Arc<TaskService>) -> Self {
    Self { task_service }
  }

  pub async fn execute(&self) -> Result<Vec<Task>, TaskError> {
    self.task_service.list().await
  }
}
