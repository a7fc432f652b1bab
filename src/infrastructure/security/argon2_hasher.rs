use argon2::password_hash::SaltString;
use argon2::{
  Algorithm, Argon2, Params, Version,
  password_hash::{
    PasswordHash as Argon2PasswordHash, PasswordHasher as Argon2PasswordHasherTrait,
    PasswordVerifier,
  },
};
use async_trait::async_trait;

use crate::domain::auth::errors::HashError;
use crate::domain::auth::ports::PasswordHasher;
use crate::infrastructure::config::HashingConfig;

/// Argon2id password hasher implementation
///
/// Produces PHC strings (`$argon2id$v=19$m=...,t=...,p=...$salt$hash`) so the
/// parameters travel with every stored hash.
pub struct Argon2PasswordHasher {
  argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
  /// Memory cost in KiB (19 MiB)
  pub const DEFAULT_MEMORY_COST_KIB: u32 = 19456;
  pub const DEFAULT_TIME_COST: u32 = 2;
  pub const DEFAULT_PARALLELISM: u32 = 1;
  const OUTPUT_LEN: usize = 32;

  /// Creates a hasher with explicit Argon2id cost parameters
  pub fn new(memory_cost_kib: u32, time_cost: u32, parallelism: u32) -> Result<Self, HashError> {
    let params = Params::new(
      memory_cost_kib,
      time_cost,
      parallelism,
      Some(Self::OUTPUT_LEN),
    )
    .map_err(|e| HashError::InvalidParameters(e.to_string()))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    Ok(Self { argon2 })
  }

  /// Creates a hasher from the `[hashing]` configuration section
  pub fn from_config(config: &HashingConfig) -> Result<Self, HashError> {
    Self::new(
      config.memory_cost_kib,
      config.time_cost,
      config.parallelism,
    )
  }
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
  async fn hash(&self, plaintext: &str) -> Result<String, HashError> {
    let salt = SaltString::generate(&mut rand::rngs::OsRng);

    let hash = self.argon2.hash_password(plaintext.as_bytes(), &salt)?;

    Ok(hash.to_string())
  }

  /// Returns `false` for a mismatch and for a stored value that is not a
  /// valid PHC string.
  async fn compare(&self, plaintext: &str, hashed: &str) -> bool {
    let parsed_hash = match Argon2PasswordHash::new(hashed) {
      Ok(parsed) => parsed,
      Err(e) => {
        tracing::warn!("Stored password hash could not be parsed: {}", e);
        return false;
      }
    };

    // Verification runs with the parameters recorded in the hash itself
    match self
      .argon2
      .verify_password(plaintext.as_bytes(), &parsed_hash)
    {
      Ok(()) => true,
      Err(argon2::password_hash::Error::Password) => false,
      Err(e) => {
        tracing::warn!("Password verification failed: {}", e);
        false
      }
    }
  }
}
