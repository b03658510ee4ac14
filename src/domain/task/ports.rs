use async_trait::async_trait;

use super::entities::Task;
use super::value_objects::TaskId;
use crate::domain::auth::errors::RepositoryError;

#[async_trait]
pub trait TaskRepository: Send + Sync {
  async fn list_all(&self) -> Result<Vec<Task>, RepositoryError>;
  async fn find_by_id(&self, id: TaskId) -> Result<Option<Task>, RepositoryError>;
  async fn create(&self, task: Task) -> Result<Task, RepositoryError>;

  /// Returns `None` when no task has this id
  async fn update(&self, task: Task) -> Result<Option<Task>, RepositoryError>;

  /// Returns `false` when no task has this id
  async fn delete(&self, id: TaskId) -> Result<bool, RepositoryError>;
}
