use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::auth::errors::RepositoryError;
use crate::domain::task::{Task, TaskId, TaskRepository};

#[derive(Default)]
pub struct InMemoryTaskRepository {
  tasks: RwLock<HashMap<TaskId, Task>>,
}

impl InMemoryTaskRepository {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
  async fn list_all(&self) -> Result<Vec<Task>, RepositoryError> {
    let mut tasks: Vec<Task> = self.tasks.read().await.values().cloned().collect();
    tasks.sort_by_key(|t| t.created_at);
    Ok(tasks)
  }

  async fn find_by_id(&self, id: TaskId) -> Result<Option<Task>, RepositoryError> {
    Ok(self.tasks.read().await.get(&id).cloned())
  }

  async fn create(&self, task: Task) -> Result<Task, RepositoryError> {
    let mut tasks = self.tasks.write().await;
    if tasks.contains_key(&task.id) {
      return Err(RepositoryError::DuplicateKey(format!(
        "task {} already exists",
        task.id
      )));
    }
    tasks.insert(task.id, task.clone());
    Ok(task)
  }

  async fn update(&self, task: Task) -> Result<Option<Task>, RepositoryError> {
    let mut tasks = self.tasks.write().await;
    Ok(tasks.get_mut(&task.id).map(|stored| {
      *stored = task;
      stored.clone()
    }))
  }

  async fn delete(&self, id: TaskId) -> Result<bool, RepositoryError> {
    Ok(self.tasks.write().await.remove(&id).is_some())
  }
}
