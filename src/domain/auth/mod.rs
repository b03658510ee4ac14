pub mod access;
pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use access::{AccessGate, BEARER_PREFIX, extract_bearer};
pub use entities::{AccessGrant, Account};
pub use errors::{
  AuthError, ErrorCategory, HashError, RepositoryError, TokenError, ValidationError,
};
pub use value_objects::{
  AccessToken, AccountId, Email, IssuedToken, Password, PasswordHash, Role,
};
