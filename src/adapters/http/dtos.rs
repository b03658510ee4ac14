use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::application::auth::{AccountView, LoginResponse as UseCaseLoginResponse};
use crate::application::task::TaskCommand;
use crate::domain::auth::value_objects::Role;
use crate::domain::task::Task;

/// Request for account registration
///
/// The configurable password length policy is enforced by the use case.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
  #[validate(length(
    min = 1,
    max = 255,
    message = "Name must be between 1 and 255 characters"
  ))]
  pub name: String,

  #[validate(email(message = "Invalid email format"))]
  pub email: String,

  #[validate(length(min = 1, message = "Password is required"))]
  pub password: String,
}

/// Request for login
///
/// The email shape is deliberately not validated here: a malformed email
/// must fail exactly like an unknown one.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
  #[validate(length(min = 1, message = "Email is required"))]
  pub email: String,

  #[validate(length(min = 1, message = "Password is required"))]
  pub password: String,
}

/// Body for creating or replacing a task
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TaskRequest {
  #[validate(length(
    min = 1,
    max = 255,
    message = "Title must be between 1 and 255 characters"
  ))]
  pub title: String,

  #[serde(default)]
  pub description: Option<String>,

  #[serde(default)]
  pub due_date: Option<DateTime<Utc>>,

  #[validate(length(min = 1, max = 64, message = "Status is required"))]
  pub status: String,
}

impl From<TaskRequest> for TaskCommand {
  fn from(request: TaskRequest) -> Self {
    TaskCommand {
      title: request.title,
      description: request.description,
      due_date: request.due_date,
      status: request.status,
    }
  }
}

/// Outward account projection; the password hash never leaves the service
#[derive(Debug, Clone, Serialize)]
pub struct AccountResponse {
  pub id: Uuid,
  pub name: String,
  pub email: String,
  pub role: Role,
  pub created_at: DateTime<Utc>,
}

impl From<AccountView> for AccountResponse {
  fn from(view: AccountView) -> Self {
    Self {
      id: view.id,
      name: view.name,
      email: view.email,
      role: view.role,
      created_at: view.created_at,
    }
  }
}

/// Response after successful login
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
  pub token: String,
  pub token_type: String,
  pub expires_at: DateTime<Utc>,
}

impl From<UseCaseLoginResponse> for LoginResponse {
  fn from(response: UseCaseLoginResponse) -> Self {
    Self {
      token: response.token,
      token_type: response.token_type.to_string(),
      expires_at: response.expires_at,
    }
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct TaskResponse {
  pub id: Uuid,
  pub title: String,
  pub description: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub due_date: Option<DateTime<Utc>>,
  pub status: String,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl From<Task> for TaskResponse {
  fn from(task: Task) -> Self {
    Self {
      id: task.id.into_inner(),
      title: task.title,
      description: task.description,
      due_date: task.due_date,
      status: task.status,
      created_at: task.created_at,
      updated_at: task.updated_at,
    }
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
  pub status: &'static str,
}

/// Standard success response for operations without data
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
  pub message: String,
}

/// Standard error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
  /// Error type/code
  pub error: String,

  /// Human-readable error message
  pub message: String,

  /// Optional detailed error information
  #[serde(skip_serializing_if = "Option::is_none")]
  pub details: Option<serde_json::Value>,
}
