use std::sync::Arc;

use super::TaskCommand;
use crate::domain::task::{Task, TaskError, TaskId, TaskService};

pub struct UpdateTaskUseCase {
  task_service: Arc<TaskService>,
}

impl UpdateTaskUseCase {
  pub fn new(task_service: Arc<TaskService>) -> Self {
    Self { task_service }
  }

  /// Replaces all editable fields of an existing task
  pub async fn execute(&self, task_id: &str, command: TaskCommand) -> Result<Task, TaskError> {
    let id = TaskId::parse(task_id)?;
    self.task_service.update(id, command.try_into()?).await
  }
}
