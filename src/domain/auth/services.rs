use chrono::Duration;
use std::sync::Arc;

use super::entities::Account;
use super::errors::{AuthError, RepositoryError, ValidationError};
use super::ports::{AccountRepository, Clock, PasswordHasher, TokenService};
use super::value_objects::{AccountId, Email, IssuedToken, Password, PasswordHash, Role};

/// Default lifetime of an access token
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;
/// Longest lifetime the service will accept for an access token
pub const MAX_TOKEN_TTL_HOURS: i64 = 72;
/// Default minimum password length at registration
pub const DEFAULT_PASSWORD_MIN_LENGTH: usize = 8;
/// Well-formed Argon2id digest, with production parameters, that matches no password.
/// Verified against on failed email lookups.
pub const DECOY_PASSWORD_DIGEST: &str =
  "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// Tunable authentication policy
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
  /// Fixed lifetime of every token minted at login
  pub token_ttl: Duration,
  /// Minimum password length enforced at registration
  pub password_min_length: usize,
}

impl Default for AuthServiceConfig {
  fn default() -> Self {
    Self {
      token_ttl: Duration::hours(DEFAULT_TOKEN_TTL_HOURS),
      password_min_length: DEFAULT_PASSWORD_MIN_LENGTH,
    }
  }
}

/// Authentication service implementing registration, login and promotion
pub struct AuthService {
  account_repo: Arc<dyn AccountRepository>,
  password_hasher: Arc<dyn PasswordHasher>,
  token_service: Arc<dyn TokenService>,
  clock: Arc<dyn Clock>,
  config: AuthServiceConfig,
}

impl AuthService {
  /// Creates a new instance of AuthService
  pub fn new(
    account_repo: Arc<dyn AccountRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    token_service: Arc<dyn TokenService>,
    clock: Arc<dyn Clock>,
    config: AuthServiceConfig,
  ) -> Self {
    Self {
      account_repo,
      password_hasher,
      token_service,
      clock,
      config,
    }
  }

  pub fn config(&self) -> &AuthServiceConfig {
    &self.config
  }

  /// Registers a new account
  ///
  /// The very first account in an empty store becomes `admin`, every later
  /// one `user`. The role is decided from a count snapshot, so two
  /// simultaneous first registrations may both become admin.
  ///
  /// # Errors
  /// Returns `AuthError::EmailAlreadyExists` if the email is already registered,
  /// either by the pre-check or by the storage uniqueness constraint.
  pub async fn register(
    &self,
    name: String,
    email: Email,
    password: Password,
  ) -> Result<Account, AuthError> {
    let name = name.trim().to_string();
    if name.is_empty() {
      return Err(AuthError::Validation(ValidationError::MissingField {
        field: "name".to_string(),
      }));
    }

    if self.account_repo.find_by_email(&email).await?.is_some() {
      return Err(AuthError::EmailAlreadyExists);
    }

    let password_hash = self.password_hasher.hash(&password).await?;

    let role = if self.account_repo.count_all().await? == 0 {
      Role::Admin
    } else {
      Role::User
    };

    let account = Account::new(name, email, password_hash, role, self.clock.now());

    let created = match self.account_repo.insert(account).await {
      Ok(account) => account,
      Err(RepositoryError::DuplicateKey(_)) => return Err(AuthError::EmailAlreadyExists),
      Err(e) => return Err(e.into()),
    };

    tracing::info!(account_id = %created.id, role = %created.role, "Account registered");

    Ok(created)
  }

  /// Authenticates an account and mints a token
  ///
  /// An unknown email and a wrong password produce the same error.
  pub async fn login(
    &self,
    email: &str,
    password: &Password,
  ) -> Result<(Account, IssuedToken), AuthError> {
    // A malformed email can never belong to an account
    let account = match Email::new(email) {
      Ok(email) => self.account_repo.find_by_email(&email).await?,
      Err(_) => None,
    };

    let Some(account) = account else {
      // Pay the same hashing cost as a known account
      let decoy = PasswordHash::from_hash(DECOY_PASSWORD_DIGEST.to_string());
      self.password_hasher.verify(password, &decoy).await;
      tracing::warn!("Login rejected");
      return Err(AuthError::InvalidCredentials);
    };

    if !self
      .password_hasher
      .verify(password, &account.password_hash)
      .await
    {
      tracing::warn!("Login rejected");
      return Err(AuthError::InvalidCredentials);
    }

    let token = self
      .token_service
      .issue(account.id, account.role, self.config.token_ttl)?;

    tracing::info!(account_id = %account.id, "Account logged in");

    Ok((account, token))
  }

  /// Grants the admin role. Promoting an admin again is a no-op success.
  pub async fn promote(&self, id: AccountId) -> Result<Account, AuthError> {
    let account = self
      .account_repo
      .update_role(id, Role::Admin)
      .await?
      .ok_or(AuthError::AccountNotFound)?;

    tracing::info!(account_id = %account.id, "Account promoted to admin");

    Ok(account)
  }

  /// Loads the account behind an authenticated request
  pub async fn find_account(&self, id: AccountId) -> Result<Account, AuthError> {
    self
      .account_repo
      .find_by_id(id)
      .await?
      .ok_or(AuthError::AccountNotFound)
  }
}
