//! Transient inputs and outputs of the authentication service.
//!
//! None of these are persisted and the outputs never carry password data.

use super::entities::User;
use super::value_objects::{Email, Password, UserId};

/// Signup input with a plain-text password
#[derive(Clone, PartialEq, Eq)]
pub struct SignupPayload {
  pub username: String,
  pub email: String,
  pub password: String,
}

impl SignupPayload {
  /// Converts the payload into a candidate user awaiting validation
  pub fn into_user(self) -> User {
    User::new(
      self.username,
      Email::new(self.email),
      Password::plain(self.password),
    )
  }
}

impl std::fmt::Debug for SignupPayload {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("SignupPayload")
      .field("username", &self.username)
      .field("email", &self.email)
      .field("password", &"***")
      .finish()
  }
}

/// Result of a successful login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginResponse {
  pub username: String,
  pub email: String,
}

impl From<&User> for LoginResponse {
  fn from(user: &User) -> Self {
    Self {
      username: user.username.clone(),
      email: user.email.as_str().to_string(),
    }
  }
}

/// Result of a successful signup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupResponse {
  pub id: UserId,
  pub username: String,
  pub email: String,
}

impl From<&User> for SignupResponse {
  fn from(user: &User) -> Self {
    Self {
      id: user.id,
      username: user.username.clone(),
      email: user.email.as_str().to_string(),
    }
  }
}
