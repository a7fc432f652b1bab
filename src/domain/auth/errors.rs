use thiserror::Error;

/// Main authentication error type
#[derive(Debug, Error)]
pub enum AuthError {
  /// Unknown email and wrong password both map here so callers cannot tell
  /// which accounts exist.
  #[error("Invalid credentials provided")]
  InvalidCredentials,

  #[error("Email already taken")]
  EmailAlreadyTaken,

  #[error("Username already taken")]
  UsernameAlreadyTaken,

  /// Signup payload failed domain validation; the cause is kept for matching.
  #[error("Invalid user payload: {0}")]
  InvalidUserPayload(#[source] ValidationError),

  #[error("Validation error: {0}")]
  Validation(#[from] ValidationError),

  #[error("Repository error: {0}")]
  Repository(#[from] RepositoryError),

  #[error("Hash error: {0}")]
  Hash(#[from] HashError),
}

/// Repository-related errors
#[derive(Debug, Error)]
pub enum RepositoryError {
  #[error("Database connection failed: {0}")]
  ConnectionFailed(String),

  #[error("Query execution failed: {0}")]
  QueryFailed(String),

  #[error("Duplicate key violation: {0}")]
  DuplicateKey(String),

  #[error("Database error: {0}")]
  DatabaseError(String),

  #[error("Storage did not assign an identifier to the created user")]
  IdentifierNotAssigned,
}

/// Password hashing errors
#[derive(Debug, Error)]
pub enum HashError {
  #[error("Failed to hash password: {0}")]
  HashingFailed(String),

  #[error("Invalid hashing parameters: {0}")]
  InvalidParameters(String),
}

/// Input validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("Invalid email format")]
  InvalidEmail,

  #[error("Password too short, minimum {min} characters required")]
  PasswordTooShort { min: usize },

  #[error("Password is already hashed")]
  PasswordAlreadyHashed,
}

impl From<sqlx::Error> for RepositoryError {
  fn from(error: sqlx::Error) -> Self {
    match error {
      sqlx::Error::Database(db_err) => {
        if db_err.is_unique_violation() {
          RepositoryError::DuplicateKey(db_err.message().to_string())
        } else {
          RepositoryError::DatabaseError(db_err.message().to_string())
        }
      }
      sqlx::Error::PoolTimedOut => RepositoryError::ConnectionFailed("Pool timed out".to_string()),
      sqlx::Error::PoolClosed => RepositoryError::ConnectionFailed("Pool closed".to_string()),
      sqlx::Error::Io(e) => RepositoryError::ConnectionFailed(e.to_string()),
      _ => RepositoryError::QueryFailed(error.to_string()),
    }
  }
}

impl From<argon2::password_hash::Error> for HashError {
  fn from(error: argon2::password_hash::Error) -> Self {
    HashError::HashingFailed(error.to_string())
  }
}
