use actix_web::{App, HttpServer, middleware::Logger};
use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use task_tracker::{
  adapters::http::{ApiRouteDependencies, RequestIdMiddleware, configure_routes},
  domain::auth::{
    access::AccessGate,
    ports::{AccountRepository, Clock},
    services::{AuthService, AuthServiceConfig},
  },
  domain::task::{TaskRepository, TaskService},
  infrastructure::{
    config::{Config, StorageBackend},
    persistence::{
      memory::{InMemoryAccountRepository, InMemoryTaskRepository},
      postgres::{PostgresAccountRepository, PostgresTaskRepository},
    },
    security::{Argon2PasswordHasher, JwtTokenService},
    time::SystemClock,
  },
};

type Repositories = (Arc<dyn AccountRepository>, Arc<dyn TaskRepository>);

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  dotenvy::dotenv().ok();

  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "task_tracker=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting task tracker");

  let config = Config::load().context("Failed to load configuration")?;
  config.validate().context("Invalid configuration")?;
  tracing::info!(storage = ?config.storage.backend, "Configuration loaded successfully");

  let (account_repo, task_repo) = build_repositories(&config).await?;

  let clock: Arc<dyn Clock> = Arc::new(SystemClock);
  let password_hasher =
    Arc::new(Argon2PasswordHasher::new().context("Failed to create password hasher")?);
  let token_service = Arc::new(
    JwtTokenService::new(&config.security.jwt_secret, clock.clone())
      .context("Failed to create token service")?,
  );

  let auth_config = AuthServiceConfig {
    token_ttl: chrono::Duration::seconds(config.security.token_ttl_seconds as i64),
    password_min_length: config.security.password_min_length,
  };

  let auth_service = Arc::new(AuthService::new(
    account_repo,
    password_hasher,
    token_service.clone(),
    clock.clone(),
    auth_config,
  ));
  let task_service = Arc::new(TaskService::new(task_repo, clock));

  let deps = ApiRouteDependencies::new(auth_service, task_service, AccessGate::new(token_service));

  let server_host = config.server.host.clone();
  let server_port = config.server.port;

  tracing::info!("Starting HTTP server on {}:{}", server_host, server_port);

  HttpServer::new(move || {
    let deps = deps.clone();
    App::new()
      .wrap(RequestIdMiddleware::new())
      .wrap(Logger::default())
      .configure(|cfg| configure_routes(cfg, deps))
  })
  .bind((server_host.as_str(), server_port))
  .with_context(|| format!("Failed to bind {}:{}", server_host, server_port))?
  .run()
  .await
  .context("HTTP server terminated with an error")
}

async fn build_repositories(config: &Config) -> anyhow::Result<Repositories> {
  match config.storage.backend {
    StorageBackend::Memory => {
      tracing::warn!("Using in-memory storage; data is lost on restart");
      Ok((
        Arc::new(InMemoryAccountRepository::new()),
        Arc::new(InMemoryTaskRepository::new()),
      ))
    }
    StorageBackend::Postgres => {
      tracing::info!("Connecting to database");

      let db_pool = tokio::time::timeout(
        Duration::from_secs(config.database.connect_timeout_seconds),
        PgPoolOptions::new()
          .max_connections(config.database.max_connections)
          .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_seconds))
          .connect(&config.database.url),
      )
      .await
      .map_err(|_| {
        anyhow::anyhow!(
          "Database connection timed out after {} seconds. Is PostgreSQL running?",
          config.database.connect_timeout_seconds
        )
      })?
      .context("Failed to connect to database")?;

      tracing::info!("Database connection pool created");

      sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .context("Failed to run database migrations")?;
      tracing::info!("Database migrations completed");

      Ok((
        Arc::new(PostgresAccountRepository::new(db_pool.clone())),
        Arc::new(PostgresTaskRepository::new(db_pool)),
      ))
    }
  }
}
