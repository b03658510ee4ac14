use std::sync::Arc;

use super::AccountView;
use crate::domain::auth::entities::AccessGrant;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::AuthService;

/// Use case for reading the account behind an authenticated request
pub struct GetCurrentAccountUseCase {
  auth_service: Arc<AuthService>,
}

impl GetCurrentAccountUseCase {
  pub fn new(auth_service: Arc<AuthService>) -> Self {
    Self { auth_service }
  }

  /// Loads fresh account data; the role shown is the stored one, which may be
  /// newer than the role embedded in the caller's token.
  pub async fn execute(&self, grant: AccessGrant) -> Result<AccountView, AuthError> {
    let account = self.auth_service.find_account(grant.subject).await?;
    Ok(account.into())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::auth::services::test_support::harness;
  use crate::domain::auth::value_objects::{AccountId, Email, Password, Role};

  #[tokio::test]
  async fn test_returns_current_account() {
    let h = harness();
    let account = h
      .service
      .register(
        "Jane".into(),
        Email::new("jane@example.com").unwrap(),
        Password::new("password123", 8).unwrap(),
      )
      .await
      .unwrap();

    let view = GetCurrentAccountUseCase::new(h.service.clone())
      .execute(AccessGrant::new(account.id, account.role))
      .await
      .unwrap();

    assert_eq!(view.email, "jane@example.com");
  }

  #[tokio::test]
  async fn test_vanished_account_is_not_found() {
    let h = harness();

    let result = GetCurrentAccountUseCase::new(h.service.clone())
      .execute(AccessGrant::new(AccountId::new(), Role::User))
      .await;

    assert!(matches!(result, Err(AuthError::AccountNotFound)));
  }
}
