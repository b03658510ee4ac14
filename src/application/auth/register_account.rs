use std::sync::Arc;

use super::AccountView;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::AuthService;
use crate::domain::auth::value_objects::{Email, Password};

/// Command for registering a new account
#[derive(Clone)]
pub struct RegisterAccountCommand {
  pub name: String,
  pub email: String,
  /// Plain text, hashed before storage
  pub password: String,
}

/// Use case for registering a new account
pub struct RegisterAccountUseCase {
  auth_service: Arc<AuthService>,
}

impl RegisterAccountUseCase {
  pub fn new(auth_service: Arc<AuthService>) -> Self {
    Self { auth_service }
  }

  /// Executes the registration use case
  ///
  /// # Errors
  /// * `AuthError::Validation` for a malformed email, a password outside the
  ///   length policy or a blank name
  /// * `AuthError::EmailAlreadyExists` when the email is taken
  pub async fn execute(&self, command: RegisterAccountCommand) -> Result<AccountView, AuthError> {
    let email = Email::new(command.email)?;
    let password = Password::new(
      command.password,
      self.auth_service.config().password_min_length,
    )?;

    let account = self
      .auth_service
      .register(command.name, email, password)
      .await?;

    Ok(account.into())
  }
}
