use std::sync::Arc;

use crate::domain::task::{TaskError, TaskId, TaskService};

pub struct DeleteTaskUseCase {
  task_service: Arc<TaskService>,
}

impl DeleteTaskUseCase {
  pub fn new(task_service: Arc<TaskService>) -> Self {
    Self { task_service }
  }

  pub async fn execute(&self, task_id: &str) -> Result<(), TaskError> {
    let id = TaskId::parse(task_id)?;
    self.task_service.delete(id).await
  }
}
