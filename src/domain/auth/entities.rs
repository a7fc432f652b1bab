use super::errors::ValidationError;
use super::value_objects::{Email, Password, UserId};

/// User entity representing a user in the system
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
  /// Identifier assigned by storage, unassigned until created
  pub id: UserId,
  /// Unique display handle
  pub username: String,
  /// Unique email address
  pub email: Email,
  /// Plain text before signup hashes it, hashed once stored
  pub password: Password,
}

impl User {
  /// Creates a not-yet-persisted user with a plain-text password
  pub fn new(username: impl Into<String>, email: Email, password: Password) -> Self {
    Self {
      id: UserId::UNASSIGNED,
      username: username.into(),
      email,
      password,
    }
  }

  /// Creates a user from database fields (for reconstruction)
  pub fn from_db(id: i64, username: String, email: String, password_hash: String) -> Self {
    Self {
      id: UserId::new(id),
      username,
      email: Email::new(email),
      password: Password::hashed(password_hash),
    }
  }

  /// Validates email then password, stopping at the first failure
  pub fn validate(&self) -> Result<(), ValidationError> {
    self.email.validate()?;
    self.password.validate()
  }
}
