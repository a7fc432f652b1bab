use actix_web::{HttpResponse, web};
use std::sync::Arc;
use validator::Validate;

use crate::adapters::http::{
  dtos::{LoginRequest, LoginResponse, SignupRequest, SignupResponse},
  errors::ApiError,
};
use crate::domain::auth::ports::UsersService;

/// Handler for user login
///
/// POST /api/users/login
/// Body: LoginRequest (JSON)
/// Response: LoginResponse (JSON) with status 200
pub async fn login_handler(
  request: web::Json<LoginRequest>,
  users_service: web::Data<Arc<dyn UsersService>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let response = users_service
    .login(&request.email, &request.password)
    .await?;

  Ok(HttpResponse::Ok().json(LoginResponse::from(response)))
}

/// Handler for user signup
///
/// POST /api/users/signup
/// Body: SignupRequest (JSON)
/// Response: SignupResponse (JSON) with status 201
pub async fn signup_handler(
  request: web::Json<SignupRequest>,
  users_service: web::Data<Arc<dyn UsersService>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let response = users_service.signup(request.into_inner().into()).await?;

  Ok(HttpResponse::Created().json(SignupResponse::from(response)))
}
