use actix_web::{
  HttpRequest, HttpResponse,
  error::{JsonPayloadError, ResponseError},
  http::{StatusCode, header::ContentType},
};
use std::fmt;

use crate::domain::auth::errors::{AuthError, RepositoryError};

use super::dtos::ErrorResponse;

/// API error type that maps domain errors to HTTP responses
#[derive(Debug)]
pub enum ApiError {
  /// Validation error (400 Bad Request)
  Validation(String),

  /// Body could not be read as the expected JSON (400 Bad Request)
  InvalidPayload(String),

  /// Authentication error (401 Unauthorized or 409 Conflict)
  Auth(AuthErrorKind),

  /// Storage rejected a write as a duplicate (409 Conflict)
  Conflict(String),

  /// Internal server error (500 Internal Server Error)
  Internal(String),
}

/// Authentication error kinds
#[derive(Debug)]
pub enum AuthErrorKind {
  /// Invalid credentials (401)
  InvalidCredentials,

  /// Email already taken (409)
  EmailAlreadyTaken,

  /// Username already taken (409)
  UsernameAlreadyTaken,
}

impl fmt::Display for ApiError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ApiError::Validation(msg) => write!(f, "Validation error: {}", msg),
      ApiError::InvalidPayload(msg) => write!(f, "Invalid payload: {}", msg),
      ApiError::Auth(kind) => write!(f, "Authentication error: {:?}", kind),
      ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
      ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
    }
  }
}

impl ResponseError for ApiError {
  fn status_code(&self) -> StatusCode {
    match self {
      ApiError::Validation(_) | ApiError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
      ApiError::Auth(kind) => match kind {
        AuthErrorKind::InvalidCredentials => StatusCode::UNAUTHORIZED,
        AuthErrorKind::EmailAlreadyTaken => StatusCode::CONFLICT,
        AuthErrorKind::UsernameAlreadyTaken => StatusCode::CONFLICT,
      },
      ApiError::Conflict(_) => StatusCode::CONFLICT,
      ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    let (error_type, message) = match self {
      ApiError::Validation(msg) => ("validation_error", msg.clone()),
      ApiError::InvalidPayload(msg) => ("invalid_payload", msg.clone()),
      ApiError::Auth(kind) => match kind {
        AuthErrorKind::InvalidCredentials => (
          "invalid_credentials",
          "Invalid email or password".to_string(),
        ),
        AuthErrorKind::EmailAlreadyTaken => (
          "email_already_taken",
          "An account with this email already exists".to_string(),
        ),
        AuthErrorKind::UsernameAlreadyTaken => (
          "username_already_taken",
          "An account with this username already exists".to_string(),
        ),
      },
      ApiError::Conflict(msg) => {
        tracing::warn!("Storage conflict: {}", msg);
        (
          "conflict",
          "The account conflicts with an existing one".to_string(),
        )
      }
      ApiError::Internal(msg) => {
        // Don't expose internal error details to clients
        tracing::error!("Internal error: {}", msg);
        (
          "internal_error",
          "An internal server error occurred".to_string(),
        )
      }
    };

    let error_response = ErrorResponse {
      error: error_type.to_string(),
      message,
      details: None,
    };

    HttpResponse::build(status)
      .content_type(ContentType::json())
      .json(error_response)
  }
}

/// Convert AuthError to ApiError
impl From<AuthError> for ApiError {
  fn from(error: AuthError) -> Self {
    match error {
      AuthError::InvalidCredentials => ApiError::Auth(AuthErrorKind::InvalidCredentials),
      AuthError::EmailAlreadyTaken => ApiError::Auth(AuthErrorKind::EmailAlreadyTaken),
      AuthError::UsernameAlreadyTaken => ApiError::Auth(AuthErrorKind::UsernameAlreadyTaken),
      AuthError::InvalidUserPayload(err) => ApiError::Validation(err.to_string()),
      AuthError::Validation(err) => ApiError::Validation(err.to_string()),
      AuthError::Repository(err) => match err {
        RepositoryError::DuplicateKey(key) => ApiError::Conflict(key),
        _ => ApiError::Internal(err.to_string()),
      },
      AuthError::Hash(err) => ApiError::Internal(err.to_string()),
    }
  }
}

/// Convert validation errors from validator crate
impl From<validator::ValidationErrors> for ApiError {
  fn from(errors: validator::ValidationErrors) -> Self {
    let mut messages: Vec<String> = errors
      .field_errors()
      .iter()
      .flat_map(|(field, errors)| {
        errors
          .iter()
          .map(|error| {
            error
              .message
              .as_ref()
              .map(|m| m.to_string())
              .unwrap_or_else(|| format!("Invalid field: {}", field))
          })
          .collect::<Vec<_>>()
      })
      .collect();
    // Field order from the map is unspecified
    messages.sort();

    ApiError::Validation(messages.join(", "))
  }
}

/// Turns JSON extractor failures into `invalid_payload` responses
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
  tracing::debug!("Rejected request body: {}", err);
  ApiError::InvalidPayload(err.to_string()).into()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::auth::errors::{HashError, ValidationError};
  use actix_web::body::to_bytes;

  #[test]
  fn test_auth_error_status_codes() {
    let cases = vec![
      (AuthError::InvalidCredentials, StatusCode::UNAUTHORIZED),
      (AuthError::EmailAlreadyTaken, StatusCode::CONFLICT),
      (AuthError::UsernameAlreadyTaken, StatusCode::CONFLICT),
      (
        AuthError::InvalidUserPayload(ValidationError::InvalidEmail),
        StatusCode::BAD_REQUEST,
      ),
      (
        AuthError::Validation(ValidationError::PasswordAlreadyHashed),
        StatusCode::BAD_REQUEST,
      ),
      (
        AuthError::Repository(RepositoryError::DuplicateKey("users_email_key".into())),
        StatusCode::CONFLICT,
      ),
      (
        AuthError::Repository(RepositoryError::ConnectionFailed("down".into())),
        StatusCode::INTERNAL_SERVER_ERROR,
      ),
      (
        AuthError::Repository(RepositoryError::IdentifierNotAssigned),
        StatusCode::INTERNAL_SERVER_ERROR,
      ),
      (
        AuthError::Hash(HashError::HashingFailed("boom".into())),
        StatusCode::INTERNAL_SERVER_ERROR,
      ),
    ];

    for (error, expected) in cases {
      let description = error.to_string();
      let api_error: ApiError = error.into();
      assert_eq!(api_error.status_code(), expected, "{}", description);
    }
  }

  #[actix_web::test]
  async fn test_error_body_codes() {
    let cases = vec![
      (ApiError::Auth(AuthErrorKind::InvalidCredentials), "invalid_credentials"),
      (ApiError::Auth(AuthErrorKind::EmailAlreadyTaken), "email_already_taken"),
      (
        ApiError::Auth(AuthErrorKind::UsernameAlreadyTaken),
        "username_already_taken",
      ),
      (ApiError::Validation("bad".into()), "validation_error"),
      (ApiError::InvalidPayload("bad".into()), "invalid_payload"),
      (ApiError::Conflict("users_email_key".into()), "conflict"),
      (ApiError::Internal("secret detail".into()), "internal_error"),
    ];

    for (error, expected) in cases {
      let body = to_bytes(error.error_response().into_body()).await.unwrap();
      let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

      assert_eq!(json["error"], expected);
    }
  }

  #[actix_web::test]
  async fn test_internal_error_hides_details() {
    let error = ApiError::Internal("password hash column missing".into());

    let body = to_bytes(error.error_response().into_body()).await.unwrap();
    let body = String::from_utf8(body.to_vec()).unwrap();

    assert!(!body.contains("column"));
  }

  #[test]
  fn test_invalid_user_payload_message_names_cause() {
    let api_error: ApiError =
      AuthError::InvalidUserPayload(ValidationError::PasswordTooShort { min: 6 }).into();

    match api_error {
      ApiError::Validation(msg) => assert!(msg.contains("minimum 6")),
      other => panic!("Expected Validation error, got {:?}", other),
    }
  }
}
