use actix_web::{
  Error, HttpMessage, ResponseError,
  body::EitherBody,
  dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
  http::header,
};
use futures_util::future::LocalBoxFuture;
use std::{
  future::{Ready, ready},
  rc::Rc,
  sync::Arc,
};

use crate::{
  adapters::http::errors::ApiError, application::auth::AuthorizeRequestUseCase,
  domain::auth::value_objects::Role,
};

/// Access middleware that validates bearer tokens and attaches the resulting
/// `AccessGrant` to the request
///
/// This middleware:
/// 1. Reads the raw `Authorization` header
/// 2. Runs the access decision with the configured role requirement
/// 3. Attaches the `AccessGrant` to request extensions for downstream handlers
/// 4. Returns 401 for a missing or invalid token and 403 for a role mismatch,
///    without calling the wrapped service
///
/// # Example
///
/// ```no_run
/// use actix_web::{web, App};
/// use std::sync::Arc;
/// # use task_tracker::application::auth::AuthorizeRequestUseCase;
/// # use task_tracker::adapters::http::middleware::auth::AuthMiddleware;
/// # use task_tracker::domain::auth::value_objects::Role;
///
/// # fn example(authorize: Arc<AuthorizeRequestUseCase>) {
/// let app = App::new().service(
///   web::resource("/admin-only")
///     .wrap(AuthMiddleware::require(authorize, Role::Admin))
///     .route(web::post().to(|| async { "ok" })),
/// );
/// # }
/// ```
pub struct AuthMiddleware {
  authorize: Arc<AuthorizeRequestUseCase>,
  required: Option<Role>,
}

impl AuthMiddleware {
  /// Admits any authenticated caller
  pub fn any(authorize: Arc<AuthorizeRequestUseCase>) -> Self {
    Self {
      authorize,
      required: None,
    }
  }

  /// Admits only callers whose token carries exactly `role`
  pub fn require(authorize: Arc<AuthorizeRequestUseCase>, role: Role) -> Self {
    Self {
      authorize,
      required: Some(role),
    }
  }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: 'static,
{
  type Response = ServiceResponse<EitherBody<B>>;
  type Error = Error;
  type Transform = AuthMiddlewareService<S>;
  type InitError = ();
  type Future = Ready<Result<Self::Transform, Self::InitError>>;

  fn new_transform(&self, service: S) -> Self::Future {
    ready(Ok(AuthMiddlewareService {
      service: Rc::new(service),
      authorize: self.authorize.clone(),
      required: self.required,
    }))
  }
}

pub struct AuthMiddlewareService<S> {
  service: Rc<S>,
  authorize: Arc<AuthorizeRequestUseCase>,
  required: Option<Role>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: 'static,
{
  type Response = ServiceResponse<EitherBody<B>>;
  type Error = Error;
  type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

  forward_ready!(service);

  fn call(&self, req: ServiceRequest) -> Self::Future {
    let service = Rc::clone(&self.service);

    // The decision needs no I/O, so it runs before the future is built
    let decision = self
      .authorize
      .execute(authorization_header(&req), self.required);

    Box::pin(async move {
      let grant = match decision {
        Ok(grant) => grant,
        Err(e) => {
          let (request, _) = req.into_parts();
          let response = ApiError::from(e).error_response().map_into_right_body();
          return Ok(ServiceResponse::new(request, response));
        }
      };

      req.extensions_mut().insert(grant);

      let res = service.call(req).await?;
      Ok(res.map_into_left_body())
    })
  }
}

/// Raw `Authorization` header value, if present and valid UTF-8
fn authorization_header(req: &ServiceRequest) -> Option<&str> {
  req
    .headers()
    .get(header::AUTHORIZATION)
    .and_then(|h| h.to_str().ok())
}
