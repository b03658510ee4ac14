use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::AuthService;
use crate::domain::auth::value_objects::Password;

/// Scheme name returned alongside every issued token
pub const TOKEN_TYPE: &str = "Bearer";

/// Command for logging in
#[derive(Clone)]
pub struct LoginCommand {
  pub email: String,
  pub password: String,
}

#[derive(Debug, Clone)]
pub struct LoginResponse {
  pub token: String,
  pub token_type: &'static str,
  pub expires_at: DateTime<Utc>,
}

/// Use case for exchanging credentials for an access token
pub struct LoginUseCase {
  auth_service: Arc<AuthService>,
}

impl LoginUseCase {
  pub fn new(auth_service: Arc<AuthService>) -> Self {
    Self { auth_service }
  }

  /// Executes the login use case
  ///
  /// # Errors
  /// Returns `AuthError::InvalidCredentials` for an unknown email, a wrong
  /// password or a malformed email alike.
  pub async fn execute(&self, command: LoginCommand) -> Result<LoginResponse, AuthError> {
    // Length policy applies at registration only
    let password = Password::presented(command.password);

    let (_, issued) = self.auth_service.login(&command.email, &password).await?;

    Ok(LoginResponse {
      token: issued.token.into_inner(),
      token_type: TOKEN_TYPE,
      expires_at: issued.expires_at,
    })
  }
}
