use argon2::password_hash::SaltString;
use argon2::{
  Algorithm, Argon2, Params, Version,
  password_hash::{
    PasswordHash as Argon2PasswordHash, PasswordHasher as Argon2PasswordHasherTrait,
    PasswordVerifier,
  },
};
use async_trait::async_trait;

use crate::domain::auth::errors::HashError;
use crate::domain::auth::ports::PasswordHasher;
use crate::domain::auth::value_objects::{Password, PasswordHash};

/// Argon2id password hasher implementation
///
/// Uses the Argon2id algorithm with secure parameters:
/// - Memory cost: 19 MiB (19456 KiB)
/// - Time cost: 2 iterations
/// - Parallelism: 1 thread
///
/// Hashing and verification run on the blocking thread pool so the async
/// executor is never stalled by the intentionally slow KDF.
#[derive(Clone)]
pub struct Argon2PasswordHasher {
  argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
  /// Creates a new Argon2PasswordHasher with the specified parameters
  pub fn new() -> Result<Self, HashError> {
    // Memory cost: 19 MiB = 19456 KiB
    let memory_cost = 19456;
    let time_cost = 2;
    let parallelism = 1;
    let output_len = Some(32);

    let params = Params::new(memory_cost, time_cost, parallelism, output_len).map_err(|e| {
      HashError::HashingFailed(format!("Failed to create Argon2 params: {}", e))
    })?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    Ok(Self { argon2 })
  }
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
  async fn hash(&self, password: &Password) -> Result<PasswordHash, HashError> {
    let argon2 = self.argon2.clone();
    let password = password.clone();

    tokio::task::spawn_blocking(move || {
      // Fresh salt from the OS CSPRNG on every call
      let salt = SaltString::generate(&mut rand::rngs::OsRng);

      argon2
        .hash_password(password.as_str().as_bytes(), &salt)
        .map(|hash| PasswordHash::from_hash(hash.to_string()))
        .map_err(|e| HashError::HashingFailed(e.to_string()))
    })
    .await
    .map_err(|e| HashError::HashingFailed(format!("Hashing task failed: {}", e)))?
  }

  /// Uses constant-time comparison (built into argon2's verify_password)
  async fn verify(&self, password: &Password, digest: &PasswordHash) -> bool {
    let argon2 = self.argon2.clone();
    let password = password.clone();
    let digest = digest.clone();

    let outcome = tokio::task::spawn_blocking(move || {
      match Argon2PasswordHash::new(digest.as_str()) {
        Ok(parsed) => argon2
          .verify_password(password.as_str().as_bytes(), &parsed)
          .is_ok(),
        Err(e) => {
          tracing::warn!("Stored password hash is malformed: {}", e);
          false
        }
      }
    })
    .await;

    outcome.unwrap_or_else(|e| {
      tracing::error!("Password verification task failed: {}", e);
      false
    })
  }
}
