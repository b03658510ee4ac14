use actix_web::{HttpRequest, HttpResponse, web};
use std::sync::Arc;
use validator::Validate;

use super::get_access_grant;
use crate::adapters::http::{
  dtos::{AccountResponse, LoginRequest, LoginResponse, RegisterRequest},
  errors::ApiError,
};
use crate::application::auth::{
  GetCurrentAccountUseCase, LoginCommand, LoginUseCase, PromoteAccountUseCase,
  RegisterAccountCommand, RegisterAccountUseCase,
};

/// Handler for account registration
///
/// POST /register
/// Body: RegisterRequest (JSON)
/// Response: AccountResponse (JSON) with status 201
pub async fn register_handler(
  request: web::Json<RegisterRequest>,
  use_case: web::Data<Arc<RegisterAccountUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let request = request.into_inner();
  let command = RegisterAccountCommand {
    name: request.name,
    email: request.email,
    password: request.password,
  };

  let account = use_case.execute(command).await?;

  Ok(HttpResponse::Created().json(AccountResponse::from(account)))
}

/// Handler for login
///
/// POST /login
/// Body: LoginRequest (JSON)
/// Response: LoginResponse (JSON) with status 200
pub async fn login_handler(
  request: web::Json<LoginRequest>,
  use_case: web::Data<Arc<LoginUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let request = request.into_inner();
  let command = LoginCommand {
    email: request.email,
    password: request.password,
  };

  let response = use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(LoginResponse::from(response)))
}

/// Handler for granting the admin role
///
/// POST /promote/{id}
/// Requires an admin token (enforced by `AuthMiddleware`)
pub async fn promote_handler(
  path: web::Path<String>,
  use_case: web::Data<Arc<PromoteAccountUseCase>>,
  http_req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
  let grant = get_access_grant(&http_req)?;
  let account = use_case.execute(&path.into_inner()).await?;

  tracing::info!(promoted_by = %grant.subject, account_id = %account.id, "Promotion request served");

  Ok(HttpResponse::Ok().json(AccountResponse::from(account)))
}

/// Handler for reading the caller's own account
///
/// GET /me
pub async fn current_account_handler(
  use_case: web::Data<Arc<GetCurrentAccountUseCase>>,
  http_req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
  let grant = get_access_grant(&http_req)?;
  let account = use_case.execute(grant).await?;

  Ok(HttpResponse::Ok().json(AccountResponse::from(account)))
}
