use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::errors::ValidationError;

// ============================================================================
// Email Value Object
// ============================================================================

/// Email address as supplied by the caller.
///
/// Construction never fails; call [`Email::validate`] to check it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email(String);

impl Email {
  pub fn new(email: impl Into<String>) -> Self {
    Self(email.into())
  }

  /// Fails with `InvalidEmail` unless the value contains an `@`
  pub fn validate(&self) -> Result<(), ValidationError> {
    if !self.0.contains('@') {
      return Err(ValidationError::InvalidEmail);
    }

    Ok(())
  }

  /// Returns the email as a string slice
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for Email {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

// ============================================================================
// Password Value Object
// ============================================================================

/// Password that is either plain text or a one-way hash of one.
///
/// The buffer is wiped when the value is dropped.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Password {
  value: String,
  is_hashed: bool,
}

impl Password {
  /// Minimum length of a plain-text password, in bytes
  pub const MIN_LENGTH: usize = 6;

  /// Wraps a plain-text password
  pub fn plain(value: impl Into<String>) -> Self {
    Self {
      value: value.into(),
      is_hashed: false,
    }
  }

  /// Wraps a stored hash
  pub fn hashed(hash: impl Into<String>) -> Self {
    Self {
      value: hash.into(),
      is_hashed: true,
    }
  }

  /// Validates a plain-text password.
  ///
  /// A hashed password never passes, whatever its length.
  pub fn validate(&self) -> Result<(), ValidationError> {
    if self.is_hashed {
      return Err(ValidationError::PasswordAlreadyHashed);
    }

    if self.value.len() < Self::MIN_LENGTH {
      return Err(ValidationError::PasswordTooShort {
        min: Self::MIN_LENGTH,
      });
    }

    Ok(())
  }

  pub fn is_hashed(&self) -> bool {
    self.is_hashed
  }

  /// Returns the raw value (use with caution)
  pub fn as_str(&self) -> &str {
    &self.value
  }

  /// Swaps the plain-text value for its hash
  pub fn replace_with_hash(&mut self, hash: String) {
    self.value.zeroize();
    self.value = hash;
    self.is_hashed = true;
  }
}

// Implement Debug without exposing the password
impl fmt::Debug for Password {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Password")
      .field("value", &"***")
      .field("is_hashed", &self.is_hashed)
      .finish()
  }
}

// ============================================================================
// UserId Value Object
// ============================================================================

/// Storage-assigned user identifier. Zero means not yet persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(i64);

impl UserId {
  pub const UNASSIGNED: UserId = UserId(0);

  pub fn new(id: i64) -> Self {
    Self(id)
  }

  pub fn value(&self) -> i64 {
    self.0
  }

  pub fn is_assigned(&self) -> bool {
    self.0 != 0
  }
}

impl fmt::Display for UserId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}
