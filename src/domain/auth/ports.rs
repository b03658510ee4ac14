use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use super::entities::{AccessGrant, Account};
use super::errors::{HashError, RepositoryError, TokenError};
use super::value_objects::{AccountId, Email, IssuedToken, Password, PasswordHash, Role};

/// Repository trait for account persistence operations
///
/// Implementations must enforce email uniqueness in storage, not only through
/// `find_by_email`, since a lookup followed by an insert is racy.
#[async_trait]
pub trait AccountRepository: Send + Sync {
  /// Finds an account by its exact email, reflecting all committed inserts
  async fn find_by_email(&self, email: &Email) -> Result<Option<Account>, RepositoryError>;

  /// Finds an account by its unique identifier
  async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, RepositoryError>;

  /// Inserts a new account, failing with `DuplicateKey` if the email is taken
  async fn insert(&self, account: Account) -> Result<Account, RepositoryError>;

  /// Counts every stored account (best-effort snapshot)
  async fn count_all(&self) -> Result<u64, RepositoryError>;

  /// Atomically sets the role, returning `None` when no account has this id
  async fn update_role(
    &self,
    id: AccountId,
    role: Role,
  ) -> Result<Option<Account>, RepositoryError>;
}

/// Salted, adaptive one-way password hashing
#[async_trait]
pub trait PasswordHasher: Send + Sync {
  /// Hashes a plain text password; each call uses a fresh salt
  async fn hash(&self, password: &Password) -> Result<PasswordHash, HashError>;

  /// Verifies a password against a digest. A malformed digest is a non-match.
  async fn verify(&self, password: &Password, digest: &PasswordHash) -> bool;
}

/// Stateless signed identity tokens
pub trait TokenService: Send + Sync {
  /// Mints a token for the subject that expires `ttl` from now
  fn issue(&self, subject: AccountId, role: Role, ttl: Duration)
  -> Result<IssuedToken, TokenError>;

  /// Checks signature, shape and expiry, returning the embedded identity
  fn validate(&self, token: &str) -> Result<AccessGrant, TokenError>;
}

/// Source of the current time
pub trait Clock: Send + Sync {
  fn now(&self) -> DateTime<Utc>;
}
