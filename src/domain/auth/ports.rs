use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::entities::User;
use super::errors::{AuthError, HashError, RepositoryError};
use super::projections::{LoginResponse, SignupPayload, SignupResponse};
use super::value_objects::Email;

/// Repository trait for user persistence operations.
///
/// Lookups return `Ok(None)` when no user matches; errors are reserved for
/// storage failures.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
  /// Finds a user by their email address
  async fn find_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError>;

  /// Finds a user by their username
  async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;

  /// Persists a new user and returns it with its assigned identifier
  async fn create(&self, user: User) -> Result<User, RepositoryError>;
}

/// One-way password hashing
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PasswordHasher: Send + Sync {
  /// Hashes a plain text password
  async fn hash(&self, plaintext: &str) -> Result<String, HashError>;

  /// Checks a plain text password against a stored hash
  async fn compare(&self, plaintext: &str, hashed: &str) -> bool;
}

/// Operations the authentication core offers to inbound adapters
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UsersService: Send + Sync {
  async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, AuthError>;

  async fn signup(&self, payload: SignupPayload) -> Result<SignupResponse, AuthError>;
}
