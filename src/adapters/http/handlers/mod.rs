pub mod auth;
pub mod tasks;

use crate::{
  adapters::http::{
    dtos::HealthResponse,
    errors::{ApiError, AuthErrorKind},
  },
  domain::auth::entities::AccessGrant,
};
use actix_web::{HttpMessage, HttpRequest, HttpResponse};

/// Extract the access grant attached by `AuthMiddleware`
pub fn get_access_grant(req: &HttpRequest) -> Result<AccessGrant, ApiError> {
  let grant = req.extensions().get::<AccessGrant>().copied();

  if grant.is_none() {
    tracing::warn!(
      "get_access_grant: grant not found in request extensions for path {}",
      req.path()
    );
  }

  grant.ok_or(ApiError::Auth(AuthErrorKind::InvalidToken))
}

/// GET /health
pub async fn health_handler() -> HttpResponse {
  HttpResponse::Ok().json(HealthResponse { status: "ok" })
}
