use chrono::{DateTime, Utc};

use super::value_objects::{AccountId, Email, PasswordHash, Role};

/// Account entity representing a registered identity
///
/// Deliberately not `Serialize`: outward projections are built in the
/// application layer and never carry the password hash.
#[derive(Debug, Clone)]
pub struct Account {
  /// Unique identifier for the account
  pub id: AccountId,
  /// Display name
  pub name: String,
  /// Email address (unique, case-sensitive)
  pub email: Email,
  /// Argon2id digest of the password
  pub password_hash: PasswordHash,
  /// Privilege tag
  pub role: Role,
  /// Timestamp when the account was created
  pub created_at: DateTime<Utc>,
}

impl Account {
  /// Creates a new account with a fresh identifier
  pub fn new(
    name: String,
    email: Email,
    password_hash: PasswordHash,
    role: Role,
    created_at: DateTime<Utc>,
  ) -> Self {
    Self {
      id: AccountId::new(),
      name,
      email,
      password_hash,
      role,
      created_at,
    }
  }

  /// Creates an account from stored fields (for reconstruction)
  pub fn from_db(
    id: AccountId,
    name: String,
    email: Email,
    password_hash: PasswordHash,
    role: Role,
    created_at: DateTime<Utc>,
  ) -> Self {
    Self {
      id,
      name,
      email,
      password_hash,
      role,
      created_at,
    }
  }

  pub fn is_admin(&self) -> bool {
    self.role == Role::Admin
  }
}

/// Identity extracted from a validated token
///
/// Recomputed on every request and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessGrant {
  pub subject: AccountId,
  pub role: Role,
}

impl AccessGrant {
  pub fn new(subject: AccountId, role: Role) -> Self {
    Self { subject, role }
  }

  /// An absent required role means any authenticated account passes
  pub fn satisfies(&self, required: Option<Role>) -> bool {
    match required {
      Some(role) => self.role == role,
      None => true,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn account(role: Role) -> Account {
    Account::new(
      "Test User".to_string(),
      Email::new("test@example.com").unwrap(),
      PasswordHash::from_hash("digest"),
      role,
      Utc::now(),
    )
  }

  #[test]
  fn test_account_creation() {
    let account = account(Role::User);

    assert_eq!(account.email.as_str(), "test@example.com");
    assert_eq!(account.name, "Test User");
    assert!(!account.is_admin());
  }

  #[test]
  fn test_accounts_get_distinct_ids() {
    assert_ne!(account(Role::User).id, account(Role::User).id);
  }

  #[test]
  fn test_debug_does_not_leak_password_hash() {
    let rendered = format!("{:?}", account(Role::Admin));
    assert!(!rendered.contains("digest"));
  }

  #[test]
  fn test_grant_role_matching_is_exact() {
    let grant = AccessGrant::new(AccountId::new(), Role::User);

    assert!(grant.satisfies(None));
    assert!(grant.satisfies(Some(Role::User)));
    assert!(!grant.satisfies(Some(Role::Admin)));

    let admin = AccessGrant::new(AccountId::new(), Role::Admin);
    assert!(admin.satisfies(Some(Role::Admin)));
    assert!(!admin.satisfies(Some(Role::User)));
  }
}
