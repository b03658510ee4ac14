use actix_web::{
  HttpResponse,
  error::ResponseError,
  http::{StatusCode, header::ContentType},
};
use std::fmt;

use crate::domain::auth::errors::{AuthError, ErrorCategory, TokenError};
use crate::domain::task::TaskError;

use super::dtos::ErrorResponse;

/// API error type that maps domain errors to HTTP responses
#[derive(Debug)]
pub enum ApiError {
  /// Validation error (400 Bad Request)
  Validation(String),

  /// Authentication or authorization error (401, 403, 404 or 409)
  Auth(AuthErrorKind),

  /// Task lookup failed (404 Not Found)
  TaskNotFound,

  /// Internal server error (500 Internal Server Error)
  Internal(String),
}

/// Authentication error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthErrorKind {
  /// Wrong password or unknown email (401)
  InvalidCredentials,

  /// Missing, malformed, forged or expired token (401)
  InvalidToken,

  /// Valid token, wrong role (403)
  InsufficientRole,

  /// Email already exists (409)
  EmailAlreadyExists,

  /// Account not found (404)
  AccountNotFound,
}

impl fmt::Display for ApiError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ApiError::Validation(msg) => write!(f, "Validation error: {}", msg),
      ApiError::Auth(kind) => write!(f, "Authentication error: {:?}", kind),
      ApiError::TaskNotFound => write!(f, "Task not found"),
      ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
    }
  }
}

impl ResponseError for ApiError {
  fn status_code(&self) -> StatusCode {
    match self {
      ApiError::Validation(_) => StatusCode::BAD_REQUEST,
      ApiError::Auth(kind) => match kind {
        AuthErrorKind::InvalidCredentials => StatusCode::UNAUTHORIZED,
        AuthErrorKind::InvalidToken => StatusCode::UNAUTHORIZED,
        AuthErrorKind::InsufficientRole => StatusCode::FORBIDDEN,
        AuthErrorKind::EmailAlreadyExists => StatusCode::CONFLICT,
        AuthErrorKind::AccountNotFound => StatusCode::NOT_FOUND,
      },
      ApiError::TaskNotFound => StatusCode::NOT_FOUND,
      ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    let (error_type, message) = match self {
      ApiError::Validation(msg) => ("validation_error", msg.clone()),
      ApiError::Auth(kind) => match kind {
        AuthErrorKind::InvalidCredentials => (
          "invalid_credentials",
          "Invalid email or password".to_string(),
        ),
        AuthErrorKind::InvalidToken => (
          "unauthorized",
          "Invalid or missing authorization token".to_string(),
        ),
        AuthErrorKind::InsufficientRole => ("forbidden", "Access denied".to_string()),
        AuthErrorKind::EmailAlreadyExists => (
          "email_already_exists",
          "An account with this email already exists".to_string(),
        ),
        AuthErrorKind::AccountNotFound => ("account_not_found", "Account not found".to_string()),
      },
      ApiError::TaskNotFound => ("task_not_found", "Task not found".to_string()),
      ApiError::Internal(msg) => {
        // Details stay in the log
        tracing::error!("Internal error: {}", msg);
        (
          "internal_error",
          "An internal server error occurred".to_string(),
        )
      }
    };

    let error_response = ErrorResponse {
      error: error_type.to_string(),
      message,
      details: None,
    };

    HttpResponse::build(status)
      .content_type(ContentType::json())
      .json(error_response)
  }
}

impl From<AuthError> for ApiError {
  fn from(error: AuthError) -> Self {
    match error {
      AuthError::InvalidCredentials => ApiError::Auth(AuthErrorKind::InvalidCredentials),
      AuthError::InvalidToken | AuthError::Token(TokenError::Invalid(_)) => {
        ApiError::Auth(AuthErrorKind::InvalidToken)
      }
      AuthError::InsufficientRole => ApiError::Auth(AuthErrorKind::InsufficientRole),
      AuthError::EmailAlreadyExists => ApiError::Auth(AuthErrorKind::EmailAlreadyExists),
      AuthError::AccountNotFound => ApiError::Auth(AuthErrorKind::AccountNotFound),
      AuthError::Validation(err) => ApiError::Validation(err.to_string()),
      other => {
        debug_assert_eq!(other.category(), ErrorCategory::Dependency);
        ApiError::Internal(other.to_string())
      }
    }
  }
}

impl From<TaskError> for ApiError {
  fn from(error: TaskError) -> Self {
    match error {
      TaskError::NotFound => ApiError::TaskNotFound,
      TaskError::Validation(err) => ApiError::Validation(err.to_string()),
      TaskError::Repository(err) => ApiError::Internal(format!("Repository error: {}", err)),
    }
  }
}

/// Convert validation errors from validator crate
impl From<validator::ValidationErrors> for ApiError {
  fn from(errors: validator::ValidationErrors) -> Self {
    let mut messages: Vec<String> = errors
      .field_errors()
      .iter()
      .flat_map(|(field, errors)| {
        errors
          .iter()
          .map(|error| {
            error
              .message
              .as_ref()
              .map(|m| m.to_string())
              .unwrap_or_else(|| format!("Invalid field: {}", field))
          })
          .collect::<Vec<_>>()
      })
      .collect();
    messages.sort();

    ApiError::Validation(messages.join(", "))
  }
}
