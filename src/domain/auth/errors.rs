use thiserror::Error;

/// Coarse error taxonomy shared by every use case
///
/// The HTTP layer picks a status code from the category alone, so two errors
/// in the same category are indistinguishable to a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
  /// Malformed identifier, email or payload shape
  Validation,
  /// Missing, invalid or expired token, or bad credentials
  Authentication,
  /// Valid identity with an insufficient role
  Authorization,
  /// Duplicate email
  Conflict,
  /// Operation on a nonexistent record
  NotFound,
  /// Repository, hashing or signing infrastructure failure
  Dependency,
}

/// Main authentication error type
#[derive(Debug, Error)]
pub enum AuthError {
  #[error("Invalid credentials provided")]
  InvalidCredentials,

  #[error("Missing or invalid authorization token")]
  InvalidToken,

  #[error("Insufficient permissions")]
  InsufficientRole,

  #[error("Email already exists")]
  EmailAlreadyExists,

  #[error("Account not found")]
  AccountNotFound,

  #[error("Repository error: {0}")]
  Repository(#[from] RepositoryError),

  #[error("Hash error: {0}")]
  Hash(#[from] HashError),

  #[error("Token error: {0}")]
  Token(#[from] TokenError),

  #[error("Validation error: {0}")]
  Validation(#[from] ValidationError),
}

impl AuthError {
  pub fn category(&self) -> ErrorCategory {
    match self {
      AuthError::Validation(_) => ErrorCategory::Validation,
      AuthError::InvalidCredentials | AuthError::InvalidToken => ErrorCategory::Authentication,
      AuthError::Token(TokenError::Invalid(_)) => ErrorCategory::Authentication,
      AuthError::InsufficientRole => ErrorCategory::Authorization,
      AuthError::EmailAlreadyExists => ErrorCategory::Conflict,
      AuthError::AccountNotFound => ErrorCategory::NotFound,
      AuthError::Repository(_) | AuthError::Hash(_) | AuthError::Token(_) => {
        ErrorCategory::Dependency
      }
    }
  }
}

/// Repository-related errors
#[derive(Debug, Error)]
pub enum RepositoryError {
  #[error("Database connection failed: {0}")]
  ConnectionFailed(String),

  #[error("Query execution failed: {0}")]
  QueryFailed(String),

  #[error("Record not found")]
  NotFound,

  #[error("Duplicate key violation: {0}")]
  DuplicateKey(String),

  #[error("Database error: {0}")]
  DatabaseError(String),
}

/// Password hashing errors
#[derive(Debug, Error)]
pub enum HashError {
  #[error("Failed to hash password: {0}")]
  HashingFailed(String),
}

/// Token issuance and validation errors
#[derive(Debug, Error)]
pub enum TokenError {
  #[error("Failed to sign token: {0}")]
  SigningFailure(String),

  /// The reason is for server-side logs only
  #[error("Invalid token: {0}")]
  Invalid(String),
}

/// Input validation errors
#[derive(Debug, Error)]
pub enum ValidationError {
  #[error("Invalid email format")]
  InvalidEmail,

  #[error("Password too short, minimum {min} characters required")]
  PasswordTooShort { min: usize },

  #[error("Password too long, maximum {max} characters allowed")]
  PasswordTooLong { max: usize },

  #[error("Invalid identifier format")]
  InvalidIdentifier,

  #[error("Invalid role: {0}")]
  InvalidRole(String),

  #[error("Missing required field: {field}")]
  MissingField { field: String },
}

// Automatic conversions from external error types

impl From<sqlx::Error> for RepositoryError {
  fn from(error: sqlx::Error) -> Self {
    match error {
      sqlx::Error::RowNotFound => RepositoryError::NotFound,
      sqlx::Error::Database(db_err) => {
        if db_err.is_unique_violation() {
          RepositoryError::DuplicateKey(db_err.message().to_string())
        } else {
          RepositoryError::DatabaseError(db_err.message().to_string())
        }
      }
      sqlx::Error::PoolTimedOut => RepositoryError::ConnectionFailed("Pool timed out".to_string()),
      sqlx::Error::PoolClosed => RepositoryError::ConnectionFailed("Pool closed".to_string()),
      _ => RepositoryError::QueryFailed(error.to_string()),
    }
  }
}
