use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::auth::{
  entities::User, errors::RepositoryError, ports::UserRepository, value_objects::Email,
};

/// PostgreSQL implementation of the UserRepository trait
///
/// Uniqueness of `email` and `username` is enforced by table constraints, so
/// two signups racing past the service's lookups still cannot both insert.
pub struct PostgresUserRepository {
  pool: PgPool,
}

impl PostgresUserRepository {
  /// Creates a new instance of PostgresUserRepository
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

/// Database row structure for users table
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
  id: i64,
  username: String,
  email: String,
  password: String,
}

impl From<UserRow> for User {
  fn from(row: UserRow) -> Self {
    User::from_db(row.id, row.username, row.email, row.password)
  }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
  async fn find_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
    let row = sqlx::query_as::<_, UserRow>(
      r#"
            SELECT id, username, email, password
            FROM users
            WHERE email = $1
            "#,
    )
    .bind(email.as_str())
    .fetch_optional(&self.pool)
    .await?;

    Ok(row.map(User::from))
  }

  async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
    let row = sqlx::query_as::<_, UserRow>(
      r#"
            SELECT id, username, email, password
            FROM users
            WHERE username = $1
            "#,
    )
    .bind(username)
    .fetch_optional(&self.pool)
    .await?;

    Ok(row.map(User::from))
  }

  async fn create(&self, user: User) -> Result<User, RepositoryError> {
    let row = sqlx::query_as::<_, UserRow>(
      r#"
            INSERT INTO users (username, email, password)
            VALUES ($1, $2, $3)
            RETURNING id, username, email, password
            "#,
    )
    .bind(&user.username)
    .bind(user.email.as_str())
    .bind(user.password.as_str())
    .fetch_one(&self.pool)
    .await?;

    tracing::debug!(user_id = row.id, "Inserted user row");

    Ok(row.into())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::auth::value_objects::Password;
  use sqlx::postgres::PgPoolOptions;
  use testcontainers::ImageExt;
  use testcontainers_modules::postgres::Postgres;
  use testcontainers_modules::testcontainers::{ContainerAsync, runners::AsyncRunner};

  async fn setup_test_db() -> (PgPool, ContainerAsync<Postgres>) {
    let container = Postgres::default()
      .with_tag("16-alpine")
      .start()
      .await
      .expect("Failed to start postgres container");

    let host = container.get_host().await.expect("Failed to get host");
    let port = container
      .get_host_port_ipv4(5432)
      .await
      .expect("Failed to get port");
    let database_url = format!("postgres://postgres:postgres@{}:{}/postgres", host, port);

    let pool = PgPoolOptions::new()
      .max_connections(5)
      .connect(&database_url)
      .await
      .expect("Failed to connect to test database");

    sqlx::migrate!("./migrations")
      .run(&pool)
      .await
      .expect("Failed to run migrations");

    (pool, container)
  }

  fn new_user(username: &str, email: &str) -> User {
    let mut password = Password::plain("unused");
    password.replace_with_hash("$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string());
    User::new(username, Email::new(email), password)
  }

  #[tokio::test]
  #[ignore = "requires a Docker daemon"]
  async fn test_create_assigns_identifier() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresUserRepository::new(pool);

    let first = repo
      .create(new_user("first", "first@example.com"))
      .await
      .unwrap();
    let second = repo
      .create(new_user("second", "second@example.com"))
      .await
      .unwrap();

    assert!(first.id.is_assigned());
    assert!(second.id.is_assigned());
    assert_ne!(first.id, second.id);
    assert!(first.password.is_hashed());
  }

  #[tokio::test]
  #[ignore = "requires a Docker daemon"]
  async fn test_find_by_email_and_username() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresUserRepository::new(pool);

    let created = repo
      .create(new_user("finder", "find@example.com"))
      .await
      .unwrap();

    let by_email = repo
      .find_by_email(&Email::new("find@example.com"))
      .await
      .unwrap()
      .expect("user by email");
    let by_username = repo
      .find_by_username("finder")
      .await
      .unwrap()
      .expect("user by username");

    assert_eq!(by_email, created);
    assert_eq!(by_username, created);
  }

  #[tokio::test]
  #[ignore = "requires a Docker daemon"]
  async fn test_missing_user_is_none() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresUserRepository::new(pool);

    assert!(
      repo
        .find_by_email(&Email::new("missing@example.com"))
        .await
        .unwrap()
        .is_none()
    );
    assert!(repo.find_by_username("missing").await.unwrap().is_none());
  }

  #[tokio::test]
  #[ignore = "requires a Docker daemon"]
  async fn test_duplicate_email() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresUserRepository::new(pool);

    repo
      .create(new_user("one", "duplicate@example.com"))
      .await
      .unwrap();
    let result = repo.create(new_user("two", "duplicate@example.com")).await;

    match result.unwrap_err() {
      RepositoryError::DuplicateKey(_) => {}
      other => panic!("Expected DuplicateKey error, got {:?}", other),
    }
  }
}
