pub mod entities;
pub mod errors;
pub mod ports;
pub mod projections;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::User;
pub use errors::{AuthError, HashError, RepositoryError, ValidationError};
pub use ports::{PasswordHasher, UserRepository, UsersService};
pub use projections::{LoginResponse, SignupPayload, SignupResponse};
pub use services::AuthService;
pub use value_objects::{Email, Password, UserId};
