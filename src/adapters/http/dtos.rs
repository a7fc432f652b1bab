use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::auth::projections::{self, SignupPayload};

// Request DTOs only check presence. Email format and password length are
// domain rules and are enforced by the service.

/// Request for user login
#[derive(Clone, Deserialize, Validate)]
pub struct LoginRequest {
  /// User's email address
  #[validate(length(min = 1, message = "Email is required"))]
  pub email: String,

  /// User's password
  #[validate(length(min = 1, message = "Password is required"))]
  pub password: String,
}

/// Request for user signup
#[derive(Clone, Deserialize, Validate)]
pub struct SignupRequest {
  /// User's email address
  #[validate(length(min = 1, message = "Email is required"))]
  pub email: String,

  /// Unique display handle
  #[validate(length(min = 1, message = "Username is required"))]
  pub username: String,

  /// User's password
  #[validate(length(min = 1, message = "Password is required"))]
  pub password: String,
}

impl From<SignupRequest> for SignupPayload {
  fn from(request: SignupRequest) -> Self {
    SignupPayload {
      username: request.username,
      email: request.email,
      password: request.password,
    }
  }
}

/// Response after successful user login
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
  pub email: String,
  pub username: String,
}

impl From<projections::LoginResponse> for LoginResponse {
  fn from(response: projections::LoginResponse) -> Self {
    Self {
      email: response.email,
      username: response.username,
    }
  }
}

/// Response after successful user signup
#[derive(Debug, Clone, Serialize)]
pub struct SignupResponse {
  /// Identifier assigned by storage
  pub id: i64,
  pub email: String,
  pub username: String,
}

impl From<projections::SignupResponse> for SignupResponse {
  fn from(response: projections::SignupResponse) -> Self {
    Self {
      id: response.id.value(),
      email: response.email,
      username: response.username,
    }
  }
}

/// Standard error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
  /// Error type/code
  pub error: String,

  /// Human-readable error message
  pub message: String,

  /// Optional detailed error information
  #[serde(skip_serializing_if = "Option::is_none")]
  pub details: Option<serde_json::Value>,
}
