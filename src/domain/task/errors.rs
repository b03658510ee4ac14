use thiserror::Error;

use crate::domain::auth::errors::{ErrorCategory, RepositoryError, ValidationError};

#[derive(Debug, Error)]
pub enum TaskError {
  #[error("Task not found")]
  NotFound,

  #[error("Repository error: {0}")]
  Repository(#[from] RepositoryError),

  #[error("Validation error: {0}")]
  Validation(#[from] ValidationError),
}

impl TaskError {
  pub fn category(&self) -> ErrorCategory {
    match self {
      TaskError::NotFound => ErrorCategory::NotFound,
      TaskError::Repository(_) => ErrorCategory::Dependency,
      TaskError::Validation(_) => ErrorCategory::Validation,
    }
  }
}
