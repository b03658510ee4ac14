use std::sync::Arc;

use super::entities::AccessGrant;
use super::errors::AuthError;
use super::ports::TokenService;
use super::value_objects::Role;

/// Exact scheme prefix expected in the `Authorization` header
pub const BEARER_PREFIX: &str = "Bearer ";

/// Extracts the token from a raw `Authorization` header value
///
/// Only the exact `Bearer <token>` form is accepted.
pub fn extract_bearer(header: Option<&str>) -> Option<&str> {
  header?
    .strip_prefix(BEARER_PREFIX)
    .filter(|token| !token.is_empty())
}

/// Per-request access decision
pub struct AccessGate {
  token_service: Arc<dyn TokenService>,
}

impl AccessGate {
  pub fn new(token_service: Arc<dyn TokenService>) -> Self {
    Self { token_service }
  }

  /// Decides whether a request may proceed
  ///
  /// # Errors
  /// * `AuthError::InvalidToken` when the header is absent, not in bearer form,
  ///   or the token fails validation
  /// * `AuthError::InsufficientRole` when a role is required and differs from
  ///   the token's role
  pub fn authorize(
    &self,
    header: Option<&str>,
    required: Option<Role>,
  ) -> Result<AccessGrant, AuthError> {
    let token = extract_bearer(header).ok_or(AuthError::InvalidToken)?;

    let grant = self.token_service.validate(token).map_err(|e| {
      tracing::debug!(reason = %e, "Token rejected");
      AuthError::InvalidToken
    })?;

    if !grant.satisfies(required) {
      tracing::warn!(
        account_id = %grant.subject,
        role = %grant.role,
        "Access denied for role"
      );
      return Err(AuthError::InsufficientRole);
    }

    Ok(grant)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::auth::value_objects::AccountId;
  use crate::infrastructure::security::JwtTokenService;
  use crate::infrastructure::time::SystemClock;
  use chrono::Duration;

  const SECRET: &str = "access-gate-secret-with-enough-bytes!!";

  fn setup() -> (AccessGate, Arc<JwtTokenService>) {
    let tokens = Arc::new(JwtTokenService::new(SECRET, Arc::new(SystemClock)).unwrap());
    (AccessGate::new(tokens.clone()), tokens)
  }

  fn bearer(tokens: &JwtTokenService, id: AccountId, role: Role) -> String {
    let issued = tokens.issue(id, role, Duration::hours(1)).unwrap();
    format!("Bearer {}", issued.token.as_str())
  }

  #[test]
  fn test_extract_bearer() {
    assert_eq!(extract_bearer(Some("Bearer abc")), Some("abc"));
    assert_eq!(extract_bearer(Some("Bearer ")), None);
    assert_eq!(extract_bearer(Some("bearer abc")), None);
    assert_eq!(extract_bearer(Some("Basic abc")), None);
    assert_eq!(extract_bearer(Some("abc")), None);
    assert_eq!(extract_bearer(None), None);
  }

  #[test]
  fn test_missing_header_is_unauthenticated() {
    let (gate, _) = setup();

    assert!(matches!(
      gate.authorize(None, None),
      Err(AuthError::InvalidToken)
    ));
  }

  #[test]
  fn test_valid_token_without_prefix_is_unauthenticated() {
    let (gate, tokens) = setup();
    let header = bearer(&tokens, AccountId::new(), Role::Admin);
    let raw = header.trim_start_matches(BEARER_PREFIX);

    assert!(matches!(
      gate.authorize(Some(raw), None),
      Err(AuthError::InvalidToken)
    ));
    assert!(matches!(
      gate.authorize(Some(&format!("Token {}", raw)), None),
      Err(AuthError::InvalidToken)
    ));
  }

  #[test]
  fn test_garbage_token_is_unauthenticated() {
    let (gate, _) = setup();

    assert!(matches!(
      gate.authorize(Some("Bearer not.a.token"), None),
      Err(AuthError::InvalidToken)
    ));
  }

  #[test]
  fn test_role_mismatch_is_forbidden() {
    let (gate, tokens) = setup();
    let header = bearer(&tokens, AccountId::new(), Role::User);

    assert!(matches!(
      gate.authorize(Some(&header), Some(Role::Admin)),
      Err(AuthError::InsufficientRole)
    ));
  }

  #[test]
  fn test_matching_or_absent_role_passes() {
    let (gate, tokens) = setup();
    let id = AccountId::new();
    let header = bearer(&tokens, id, Role::Admin);

    let grant = gate.authorize(Some(&header), Some(Role::Admin)).unwrap();
    assert_eq!(grant.subject, id);
    assert_eq!(grant.role, Role::Admin);

    let grant = gate.authorize(Some(&header), None).unwrap();
    assert_eq!(grant.subject, id);
  }
}
