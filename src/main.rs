use actix_web::{App, HttpServer, middleware::Logger, web};
use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use login_service::{
  adapters::http::{RequestIdMiddleware, configure_user_routes, health_handler},
  domain::auth::{
    ports::{UserRepository, UsersService},
    services::AuthService,
  },
  infrastructure::{
    config::{Config, DatabaseConfig},
    persistence::{memory::InMemoryUserRepository, postgres::PostgresUserRepository},
    security::Argon2PasswordHasher,
  },
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  // Initialize tracing subscriber for logging
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "login_service=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting login service");

  let config = Config::load().context("Failed to load configuration")?;
  tracing::info!("Configuration loaded successfully");

  let user_repo = build_user_repository(config.database.as_ref()).await?;

  let password_hasher = Arc::new(
    Argon2PasswordHasher::from_config(&config.hashing)
      .context("Invalid password hashing parameters")?,
  );

  let users_service: Arc<dyn UsersService> =
    Arc::new(AuthService::new(user_repo, password_hasher));

  let server_host = config.server.host.clone();
  let server_port = config.server.port;

  tracing::info!("Starting HTTP server on {}:{}", server_host, server_port);

  // Ctrl-C and SIGTERM are handled by actix, which then drains workers
  HttpServer::new(move || {
    let users_service = users_service.clone();

    App::new()
      // Add logging middleware
      .wrap(Logger::default())
      // Registered last so it runs first and access logs fall inside its span
      .wrap(RequestIdMiddleware::new())
      .service(web::scope("/api").configure(|cfg| configure_user_routes(cfg, users_service)))
      // Health check endpoint
      .route("/health", web::get().to(health_handler))
  })
  .shutdown_timeout(config.server.shutdown_timeout_seconds)
  .bind((server_host.as_str(), server_port))
  .with_context(|| format!("Failed to bind {}:{}", server_host, server_port))?
  .run()
  .await
  .context("HTTP server failed")?;

  tracing::info!("Server stopped");

  Ok(())
}

/// Connects to PostgreSQL and runs migrations when a database is configured,
/// otherwise falls back to the in-memory store.
async fn build_user_repository(
  database: Option<&DatabaseConfig>,
) -> anyhow::Result<Arc<dyn UserRepository>> {
  let Some(database) = database else {
    tracing::warn!("No database configured, users are kept in memory and lost on restart");
    return Ok(Arc::new(InMemoryUserRepository::new()));
  };

  tracing::info!("Connecting to database");

  // Set up database connection pool with timeout
  let db_pool = tokio::time::timeout(
    Duration::from_secs(database.connect_timeout_seconds),
    PgPoolOptions::new()
      .max_connections(database.max_connections)
      .acquire_timeout(Duration::from_secs(database.acquire_timeout_seconds))
      .connect(&database.url),
  )
  .await
  .map_err(|_| {
    anyhow::anyhow!(
      "Database connection timed out after {} seconds. Is PostgreSQL running?",
      database.connect_timeout_seconds
    )
  })?
  .context("Failed to connect to database")?;

  tracing::info!("Database connection pool created");

  tracing::info!("Running database migrations");
  sqlx::migrate!("./migrations")
    .run(&db_pool)
    .await
    .context("Failed to run database migrations")?;
  tracing::info!("Database migrations completed");

  Ok(Arc::new(PostgresUserRepository::new(db_pool)))
}
