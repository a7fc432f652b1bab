use async_trait::async_trait;
use std::sync::Arc;

use super::entities::User;
use super::errors::{AuthError, RepositoryError, ValidationError};
use super::ports::{PasswordHasher, UserRepository, UsersService};
use super::projections::{LoginResponse, SignupPayload, SignupResponse};
use super::value_objects::{Email, Password};

/// Well-formed hash that matches no password. Login verifies against it when
/// the email is unknown so both rejection paths pay for a full verification.
pub(crate) const UNKNOWN_USER_HASH: &str =
  "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// Authentication service implementing the login and signup flows.
///
/// Holds no state of its own. Every call is a single ordered pass over the
/// repository and hasher ports, and any port failure is returned untouched.
pub struct AuthService {
  user_repo: Arc<dyn UserRepository>,
  password_hasher: Arc<dyn PasswordHasher>,
}

impl AuthService {
  /// Creates a new instance of AuthService
  pub fn new(user_repo: Arc<dyn UserRepository>, password_hasher: Arc<dyn PasswordHasher>) -> Self {
    Self {
      user_repo,
      password_hasher,
    }
  }

  /// Rejects the candidate if its email, then its username, is already in use
  async fn ensure_unique(&self, user: &User) -> Result<(), AuthError> {
    if self.user_repo.find_by_email(&user.email).await?.is_some() {
      return Err(AuthError::EmailAlreadyTaken);
    }

    if self
      .user_repo
      .find_by_username(&user.username)
      .await?
      .is_some()
    {
      return Err(AuthError::UsernameAlreadyTaken);
    }

    Ok(())
  }

  async fn hash_password(&self, password: &mut Password) -> Result<(), AuthError> {
    if password.is_hashed() {
      return Err(ValidationError::PasswordAlreadyHashed.into());
    }

    let hash = self.password_hasher.hash(password.as_str()).await?;
    password.replace_with_hash(hash);

    Ok(())
  }
}

#[async_trait]
impl UsersService for AuthService {
  /// Authenticates a user by email and password
  ///
  /// # Errors
  /// Returns `AuthError::InvalidCredentials` both for an unknown email and for
  /// a wrong password. Repository failures are propagated as
  /// `AuthError::Repository`.
  async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, AuthError> {
    let email = Email::new(email);

    let Some(user) = self.user_repo.find_by_email(&email).await? else {
      self
        .password_hasher
        .compare(password, UNKNOWN_USER_HASH)
        .await;
      tracing::debug!("Login rejected: no user with this email");
      return Err(AuthError::InvalidCredentials);
    };

    if !self
      .password_hasher
      .compare(password, user.password.as_str())
      .await
    {
      tracing::debug!(user_id = %user.id, "Login rejected: password mismatch");
      return Err(AuthError::InvalidCredentials);
    }

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(LoginResponse::from(&user))
  }

  /// Registers a new user
  ///
  /// # Errors
  /// - `AuthError::InvalidUserPayload` wrapping the failed validation rule
  /// - `AuthError::EmailAlreadyTaken` / `AuthError::UsernameAlreadyTaken`
  /// - `AuthError::Repository` / `AuthError::Hash` from the ports
  async fn signup(&self, payload: SignupPayload) -> Result<SignupResponse, AuthError> {
    let mut user = payload.into_user();

    user.validate().map_err(AuthError::InvalidUserPayload)?;

    self.ensure_unique(&user).await?;

    self.hash_password(&mut user.password).await?;

    let created = self.user_repo.create(user).await?;
    if !created.id.is_assigned() {
      return Err(RepositoryError::IdentifierNotAssigned.into());
    }

    tracing::info!(user_id = %created.id, username = %created.username, "User signed up");

    Ok(SignupResponse::from(&created))
  }
}
