use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::auth::entities::Account;
use crate::domain::auth::value_objects::Role;

/// Outward projection of an account; never carries the password hash
#[derive(Debug, Clone, PartialEq)]
pub struct AccountView {
  pub id: Uuid,
  pub name: String,
  pub email: String,
  pub role: Role,
  pub created_at: DateTime<Utc>,
}

impl From<Account> for AccountView {
  fn from(account: Account) -> Self {
    Self {
      id: account.id.into_inner(),
      name: account.name,
      email: account.email.into_inner(),
      role: account.role,
      created_at: account.created_at,
    }
  }
}
