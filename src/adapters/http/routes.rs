use actix_web::web;
use std::sync::Arc;

use crate::adapters::http::{
  errors::json_error_handler,
  handlers::users::{login_handler, signup_handler},
};
use crate::domain::auth::ports::UsersService;

/// Configure the `/users` scope
///
/// Mounted under `/api` by the server, giving `/api/users/login` and
/// `/api/users/signup`.
pub fn configure_user_routes(cfg: &mut web::ServiceConfig, users_service: Arc<dyn UsersService>) {
  cfg.service(
    web::scope("/users")
      // Store the service in app data so handlers can access it
      .app_data(web::Data::new(users_service))
      .app_data(web::JsonConfig::default().error_handler(json_error_handler))
      .route("/login", web::post().to(login_handler))
      .route("/signup", web::post().to(signup_handler)),
  );
}
