use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::auth::{
  entities::User, errors::RepositoryError, ports::UserRepository, value_objects::Email,
  value_objects::UserId,
};

/// Process-local user store, used when no database is configured.
///
/// Identifiers start at 1 and increase with each insert. The same uniqueness
/// rules as the `users` table apply.
#[derive(Default)]
pub struct InMemoryUserRepository {
  users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
  async fn find_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
    let users = self.users.read().await;

    Ok(users.iter().find(|u| u.email == *email).cloned())
  }

  async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
    let users = self.users.read().await;

    Ok(users.iter().find(|u| u.username == username).cloned())
  }

  async fn create(&self, mut user: User) -> Result<User, RepositoryError> {
    let mut users = self.users.write().await;

    if users.iter().any(|u| u.email == user.email) {
      return Err(RepositoryError::DuplicateKey("users_email_key".to_string()));
    }
    if users.iter().any(|u| u.username == user.username) {
      return Err(RepositoryError::DuplicateKey(
        "users_username_key".to_string(),
      ));
    }

    let next_id = users.last().map_or(1, |u| u.id.value() + 1);
    user.id = UserId::new(next_id);
    users.push(user.clone());

    Ok(user)
  }
}
