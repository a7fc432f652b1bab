pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod routes;

// Re-export commonly used types
pub use dtos::{ErrorResponse, LoginRequest, LoginResponse, SignupRequest, SignupResponse};
pub use errors::{ApiError, AuthErrorKind, json_error_handler};
pub use handlers::health::health_handler;
pub use handlers::users::{login_handler, signup_handler};
pub use middleware::{RequestId, RequestIdExt, RequestIdMiddleware};
pub use routes::configure_user_routes;
