use crate::domain::auth::access::AccessGate;
use crate::domain::auth::entities::AccessGrant;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::value_objects::Role;

/// Use case run by the access middleware on every protected request
pub struct AuthorizeRequestUseCase {
  gate: AccessGate,
}

impl AuthorizeRequestUseCase {
  pub fn new(gate: AccessGate) -> Self {
    Self { gate }
  }

  /// Validates the raw `Authorization` header and checks the optional role
  ///
  /// Purely computational: no storage is consulted, so a role change only
  /// takes effect once the account obtains a new token.
  pub fn execute(
    &self,
    authorization: Option<&str>,
    required: Option<Role>,
  ) -> Result<AccessGrant, AuthError> {
    self.gate.authorize(authorization, required)
  }
}
