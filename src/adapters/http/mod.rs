pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use dtos::{
  AccountResponse, ErrorResponse, LoginRequest, LoginResponse, RegisterRequest, SuccessResponse,
  TaskRequest, TaskResponse,
};
pub use errors::{ApiError, AuthErrorKind};
pub use middleware::{AuthMiddleware, RequestId, RequestIdMiddleware};
pub use routes::{ApiRouteDependencies, configure_routes};
