use chrono::Duration;
use jsonwebtoken::{
  Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, decode_header, encode,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::auth::entities::AccessGrant;
use crate::domain::auth::errors::TokenError;
use crate::domain::auth::ports::{Clock, TokenService};
use crate::domain::auth::value_objects::{AccessToken, AccountId, IssuedToken, Role};

/// Algorithms a presented token may declare in its header
const ALLOWED_ALGORITHMS: &[Algorithm] = &[Algorithm::HS256];

/// Algorithm used when minting tokens
const SIGNING_ALGORITHM: Algorithm = Algorithm::HS256;

/// Typed token payload; a missing or mis-typed field fails decoding
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
  /// Subject account id
  sub: String,
  role: Role,
  /// Issued at (unix seconds)
  iat: i64,
  /// Expiry (unix seconds)
  exp: i64,
}

/// HMAC-SHA256 signed JWT issuer and validator
///
/// The signing secret is fixed at construction and never rotated. Expiry is
/// checked against the injected clock with no grace window: a token is
/// rejected from the second of its `exp` claim onwards.
pub struct JwtTokenService {
  encoding_key: EncodingKey,
  decoding_key: DecodingKey,
  clock: Arc<dyn Clock>,
}

impl JwtTokenService {
  pub fn new(secret: &str, clock: Arc<dyn Clock>) -> Result<Self, TokenError> {
    if secret.is_empty() {
      return Err(TokenError::SigningFailure(
        "Signing secret is not configured".to_string(),
      ));
    }

    Ok(Self {
      encoding_key: EncodingKey::from_secret(secret.as_bytes()),
      decoding_key: DecodingKey::from_secret(secret.as_bytes()),
      clock,
    })
  }

  fn validation() -> Validation {
    let mut validation = Validation::new(SIGNING_ALGORITHM);
    validation.algorithms = ALLOWED_ALGORITHMS.to_vec();
    validation.set_required_spec_claims(&["exp", "sub"]);
    // Expiry is checked against our own clock below
    validation.validate_exp = false;
    validation.leeway = 0;
    validation
  }
}

impl TokenService for JwtTokenService {
  fn issue(
    &self,
    subject: AccountId,
    role: Role,
    ttl: Duration,
  ) -> Result<IssuedToken, TokenError> {
    let issued_at = self.clock.now();
    let expires_at = issued_at
      .checked_add_signed(ttl)
      .ok_or_else(|| TokenError::SigningFailure("Token expiration overflow".to_string()))?;

    let claims = Claims {
      sub: subject.to_string(),
      role,
      iat: issued_at.timestamp(),
      exp: expires_at.timestamp(),
    };

    let token = encode(&Header::new(SIGNING_ALGORITHM), &claims, &self.encoding_key)
      .map_err(|e| TokenError::SigningFailure(e.to_string()))?;

    Ok(IssuedToken {
      token: AccessToken::new(token),
      expires_at,
    })
  }

  fn validate(&self, token: &str) -> Result<AccessGrant, TokenError> {
    // Reject algorithm substitution before touching the signature
    let header = decode_header(token).map_err(|e| TokenError::Invalid(e.to_string()))?;
    if !ALLOWED_ALGORITHMS.contains(&header.alg) {
      return Err(TokenError::Invalid(format!(
        "Algorithm {:?} is not allowed",
        header.alg
      )));
    }

    let data = decode::<Claims>(token, &self.decoding_key, &Self::validation())
      .map_err(|e| TokenError::Invalid(e.to_string()))?;
    let claims = data.claims;

    if self.clock.now().timestamp() >= claims.exp {
      return Err(TokenError::Invalid("Token expired".to_string()));
    }

    let subject = AccountId::parse(&claims.sub)
      .map_err(|_| TokenError::Invalid("Malformed subject claim".to_string()))?;

    Ok(AccessGrant::new(subject, claims.role))
  }
}
