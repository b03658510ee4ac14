use actix_web::web;
use std::sync::Arc;

use crate::application::auth::{
  AuthorizeRequestUseCase, GetCurrentAccountUseCase, LoginUseCase, PromoteAccountUseCase,
  RegisterAccountUseCase,
};
use crate::application::task::{
  CreateTaskUseCase, DeleteTaskUseCase, GetTaskUseCase, ListTasksUseCase, UpdateTaskUseCase,
};
use crate::domain::auth::access::AccessGate;
use crate::domain::auth::services::AuthService;
use crate::domain::auth::value_objects::Role;
use crate::domain::task::TaskService;

use super::errors::ApiError;
use super::handlers::auth::{
  current_account_handler, login_handler, promote_handler, register_handler,
};
use super::handlers::health_handler;
use super::handlers::tasks::{
  create_task_handler, delete_task_handler, get_task_handler, list_tasks_handler,
  update_task_handler,
};
use super::middleware::AuthMiddleware;

/// Use cases shared by all API handlers
#[derive(Clone)]
pub struct ApiRouteDependencies {
  pub register_use_case: Arc<RegisterAccountUseCase>,
  pub login_use_case: Arc<LoginUseCase>,
  pub promote_use_case: Arc<PromoteAccountUseCase>,
  pub current_account_use_case: Arc<GetCurrentAccountUseCase>,
  pub authorize_use_case: Arc<AuthorizeRequestUseCase>,
  pub list_tasks_use_case: Arc<ListTasksUseCase>,
  pub get_task_use_case: Arc<GetTaskUseCase>,
  pub create_task_use_case: Arc<CreateTaskUseCase>,
  pub update_task_use_case: Arc<UpdateTaskUseCase>,
  pub delete_task_use_case: Arc<DeleteTaskUseCase>,
}

impl ApiRouteDependencies {
  pub fn new(
    auth_service: Arc<AuthService>,
    task_service: Arc<TaskService>,
    access_gate: AccessGate,
  ) -> Self {
    Self {
      register_use_case: Arc::new(RegisterAccountUseCase::new(auth_service.clone())),
      login_use_case: Arc::new(LoginUseCase::new(auth_service.clone())),
      promote_use_case: Arc::new(PromoteAccountUseCase::new(auth_service.clone())),
      current_account_use_case: Arc::new(GetCurrentAccountUseCase::new(auth_service)),
      authorize_use_case: Arc::new(AuthorizeRequestUseCase::new(access_gate)),
      list_tasks_use_case: Arc::new(ListTasksUseCase::new(task_service.clone())),
      get_task_use_case: Arc::new(GetTaskUseCase::new(task_service.clone())),
      create_task_use_case: Arc::new(CreateTaskUseCase::new(task_service.clone())),
      update_task_use_case: Arc::new(UpdateTaskUseCase::new(task_service.clone())),
      delete_task_use_case: Arc::new(DeleteTaskUseCase::new(task_service)),
    }
  }
}

/// Configure all API routes
///
/// # Routes
///
/// - GET /health - Liveness probe (public)
/// - POST /register - Create an account (public)
/// - POST /login - Exchange credentials for a bearer token (public)
/// - GET /me - Caller's own account (any authenticated role)
/// - POST /promote/{id} - Grant the admin role (admin)
/// - GET, POST /tasks - List or create tasks (any authenticated role)
/// - GET, PUT, DELETE /tasks/{id} - Read, replace or delete a task (any authenticated role)
pub fn configure_routes(cfg: &mut web::ServiceConfig, deps: ApiRouteDependencies) {
  let authorize = deps.authorize_use_case;
  let authenticated = || AuthMiddleware::any(authorize.clone());
  let admin_only = || AuthMiddleware::require(authorize.clone(), Role::Admin);

  cfg
    .app_data(
      web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::Validation(err.to_string()).into()),
    )
    .app_data(web::Data::new(deps.register_use_case))
    .app_data(web::Data::new(deps.login_use_case))
    .app_data(web::Data::new(deps.promote_use_case))
    .app_data(web::Data::new(deps.current_account_use_case))
    .app_data(web::Data::new(deps.list_tasks_use_case))
    .app_data(web::Data::new(deps.get_task_use_case))
    .app_data(web::Data::new(deps.create_task_use_case))
    .app_data(web::Data::new(deps.update_task_use_case))
    .app_data(web::Data::new(deps.delete_task_use_case));

  // Public routes
  cfg
    .route("/health", web::get().to(health_handler))
    .route("/register", web::post().to(register_handler))
    .route("/login", web::post().to(login_handler));

  cfg
    .service(
      web::resource("/me")
        .wrap(authenticated())
        .route(web::get().to(current_account_handler)),
    )
    .service(
      web::resource("/promote/{id}")
        .wrap(admin_only())
        .route(web::post().to(promote_handler)),
    );

  cfg
    .service(
      web::resource("/tasks")
        .wrap(authenticated())
        .route(web::get().to(list_tasks_handler))
        .route(web::post().to(create_task_handler)),
    )
    .service(
      web::resource("/tasks/{id}")
        .wrap(authenticated())
        .route(web::get().to(get_task_handler))
        .route(web::put().to(update_task_handler))
        .route(web::delete().to(delete_task_handler)),
    );
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::auth::services::test_support::harness;
  use crate::infrastructure::persistence::memory::InMemoryTaskRepository;
  use crate::infrastructure::time::SystemClock;
  use actix_web::{
    App,
    http::StatusCode,
    test::{self, TestRequest},
  };
  use serde_json::{Value, json};

  macro_rules! send {
    ($app:expr, $req:expr) => {{
      let resp = test::call_service(&$app, $req.to_request()).await;
      let status = resp.status();
      let body = test::read_body(resp).await;
      (
        status,
        serde_json::from_slice::<Value>(&body).unwrap_or(Value::Null),
      )
    }};
  }

  macro_rules! app {
    () => {{
      let h = harness();
      let task_service = Arc::new(TaskService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(SystemClock),
      ));
      let deps = ApiRouteDependencies::new(h.service, task_service, AccessGate::new(h.tokens));
      test::init_service(App::new().configure(|cfg| configure_routes(cfg, deps))).await
    }};
  }

  fn register(name: &str, email: &str) -> TestRequest {
    TestRequest::post()
      .uri("/register")
      .set_json(json!({ "name": name, "email": email, "password": "password123" }))
  }

  fn login(email: &str, password: &str) -> TestRequest {
    TestRequest::post()
      .uri("/login")
      .set_json(json!({ "email": email, "password": password }))
  }

  fn bearer(body: &Value) -> (&'static str, String) {
    (
      "Authorization",
      format!("Bearer {}", body["token"].as_str().unwrap()),
    )
  }

  fn task_body(title: &str, status: &str) -> Value {
    json!({ "title": title, "description": "quarterly numbers", "status": status })
  }

  #[actix_web::test]
  async fn test_health_is_public() {
    let app = app!();

    let (status, body) = send!(app, TestRequest::get().uri("/health"));

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
  }

  #[actix_web::test]
  async fn test_registration_bootstraps_admin_then_users() {
    let app = app!();

    let (status, first) = send!(app, register("Ada", "ada@example.com"));
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(first["role"], "admin");
    assert_eq!(first["email"], "ada@example.com");
    assert!(first.get("password_hash").is_none());
    assert!(first.get("password").is_none());

    let (status, second) = send!(app, register("Bob", "bob@example.com"));
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(second["role"], "user");

    let (status, body) = send!(app, register("Bob again", "bob@example.com"));
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "email_already_exists");
  }

  #[actix_web::test]
  async fn test_registration_input_is_validated() {
    let app = app!();

    let (status, _) = send!(app, register("Ada", "not-an-email"));
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send!(
      app,
      TestRequest::post()
        .uri("/register")
        .set_json(json!({ "name": "Ada", "email": "ada@example.com", "password": "short" }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send!(
      app,
      TestRequest::post()
        .uri("/register")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{not json")
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
  }

  #[actix_web::test]
  async fn test_login_failures_are_indistinguishable() {
    let app = app!();
    send!(app, register("Ada", "ada@example.com"));

    let (wrong_status, wrong_body) = send!(app, login("ada@example.com", "wrong-password"));
    let (unknown_status, unknown_body) = send!(app, login("nobody@example.com", "password123"));
    let (malformed_status, malformed_body) = send!(app, login("not-an-email", "password123"));

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(malformed_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_body, unknown_body);
    assert_eq!(wrong_body, malformed_body);
    assert_eq!(wrong_body["message"], "Invalid email or password");
  }

  #[actix_web::test]
  async fn test_login_returns_bearer_token_for_me() {
    let app = app!();
    let (_, account) = send!(app, register("Ada", "ada@example.com"));

    let (status, token) = send!(app, login("ada@example.com", "password123"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(token["token_type"], "Bearer");
    assert!(token["expires_at"].is_string());

    let (status, me) = send!(
      app,
      TestRequest::get().uri("/me").insert_header(bearer(&token))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["id"], account["id"]);
  }

  #[actix_web::test]
  async fn test_protected_routes_reject_missing_or_bad_tokens() {
    let app = app!();

    let (status, body) = send!(app, TestRequest::get().uri("/me"));
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "unauthorized");

    let (status, _) = send!(
      app,
      TestRequest::get()
        .uri("/tasks")
        .insert_header(("Authorization", "Bearer garbage"))
    );
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send!(
      app,
      TestRequest::post()
        .uri("/tasks")
        .set_json(task_body("Write report", "pending"))
    );
    assert_eq!(status, StatusCode::UNAUTHORIZED);
  }

  #[actix_web::test]
  async fn test_task_access_by_role() {
    let app = app!();
    send!(app, register("Ada", "ada@example.com"));
    send!(app, register("Bob", "bob@example.com"));
    let (_, admin) = send!(app, login("ada@example.com", "password123"));
    let (_, user) = send!(app, login("bob@example.com", "password123"));

    let (status, created) = send!(
      app,
      TestRequest::post()
        .uri("/tasks")
        .insert_header(bearer(&user))
        .set_json(task_body("Write report", "pending"))
    );
    assert_eq!(status, StatusCode::CREATED);
    let task_uri = format!("/tasks/{}", created["id"].as_str().unwrap());

    let (status, _) = send!(
      app,
      TestRequest::post()
        .uri("/tasks")
        .insert_header(bearer(&admin))
        .set_json(task_body("Review report", "pending"))
    );
    assert_eq!(status, StatusCode::CREATED);

    let (status, list) = send!(
      app,
      TestRequest::get().uri("/tasks").insert_header(bearer(&user))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 2);

    let (status, fetched) = send!(
      app,
      TestRequest::get().uri(&task_uri).insert_header(bearer(&admin))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["title"], "Write report");

    let (status, updated) = send!(
      app,
      TestRequest::put()
        .uri(&task_uri)
        .insert_header(bearer(&user))
        .set_json(task_body("Write report", "completed"))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "completed");

    let (status, _) = send!(
      app,
      TestRequest::delete().uri(&task_uri)
    );
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send!(
      app,
      TestRequest::delete().uri(&task_uri).insert_header(bearer(&user))
    );
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send!(
      app,
      TestRequest::get().uri(&task_uri).insert_header(bearer(&admin))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
  }

  #[actix_web::test]
  async fn test_task_input_errors() {
    let app = app!();
    send!(app, register("Ada", "ada@example.com"));
    let (_, admin) = send!(app, login("ada@example.com", "password123"));

    let (status, _) = send!(
      app,
      TestRequest::get().uri("/tasks/42").insert_header(bearer(&admin))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send!(
      app,
      TestRequest::post()
        .uri("/tasks")
        .insert_header(bearer(&admin))
        .set_json(task_body("", "pending"))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send!(
      app,
      TestRequest::put()
        .uri(&format!("/tasks/{}", uuid::Uuid::new_v4()))
        .insert_header(bearer(&admin))
        .set_json(task_body("Ghost", "pending"))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
  }

  #[actix_web::test]
  async fn test_promotion_applies_to_new_tokens_only() {
    let app = app!();
    send!(app, register("Ada", "ada@example.com"));
    let (_, bob) = send!(app, register("Bob", "bob@example.com"));
    let (_, admin) = send!(app, login("ada@example.com", "password123"));
    let (_, old_user_token) = send!(app, login("bob@example.com", "password123"));
    let promote_uri = format!("/promote/{}", bob["id"].as_str().unwrap());

    let (status, _) = send!(
      app,
      TestRequest::post()
        .uri(&promote_uri)
        .insert_header(bearer(&old_user_token))
    );
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, promoted) = send!(
      app,
      TestRequest::post().uri(&promote_uri).insert_header(bearer(&admin))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(promoted["role"], "admin");

    // Idempotent
    let (status, _) = send!(
      app,
      TestRequest::post().uri(&promote_uri).insert_header(bearer(&admin))
    );
    assert_eq!(status, StatusCode::OK);

    // The old token still carries the old role
    let (status, _) = send!(
      app,
      TestRequest::post()
        .uri(&promote_uri)
        .insert_header(bearer(&old_user_token))
    );
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (_, new_token) = send!(app, login("bob@example.com", "password123"));
    let (status, _) = send!(
      app,
      TestRequest::post().uri(&promote_uri).insert_header(bearer(&new_token))
    );
    assert_eq!(status, StatusCode::OK);
  }

  #[actix_web::test]
  async fn test_promote_unknown_or_malformed_id() {
    let app = app!();
    send!(app, register("Ada", "ada@example.com"));
    let (_, admin) = send!(app, login("ada@example.com", "password123"));

    let (status, _) = send!(
      app,
      TestRequest::post()
        .uri(&format!("/promote/{}", uuid::Uuid::new_v4()))
        .insert_header(bearer(&admin))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send!(
      app,
      TestRequest::post()
        .uri("/promote/not-a-uuid")
        .insert_header(bearer(&admin))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
  }
}
