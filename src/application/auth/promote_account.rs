use std::sync::Arc;

use super::AccountView;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::AuthService;
use crate::domain::auth::value_objects::AccountId;

/// Use case for granting the admin role to an account
///
/// Callers are expected to have passed an admin-only access check already.
pub struct PromoteAccountUseCase {
  auth_service: Arc<AuthService>,
}

impl PromoteAccountUseCase {
  pub fn new(auth_service: Arc<AuthService>) -> Self {
    Self { auth_service }
  }

  /// # Errors
  /// * `AuthError::Validation` when `account_id` is not a UUID
  /// * `AuthError::AccountNotFound` when no account has that id
  pub async fn execute(&self, account_id: &str) -> Result<AccountView, AuthError> {
    let id = AccountId::parse(account_id)?;
    let account = self.auth_service.promote(id).await?;
    Ok(account.into())
  }
}
