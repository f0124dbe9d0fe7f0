//! Authentication primitives: salted password hashes and login credentials.
//!
//! Hashing strength is deliberately modest; the contract that matters to
//! the rest of the system is "store a salted digest, verify on login".
//! Credential checks go through [`authenticate`] so handlers never compare
//! secrets themselves.

use sha2::{Digest, Sha256};
use std::sync::Arc;
use uuid::Uuid;
use zeroize::Zeroizing;

use crate::domain::ports::UserRepository;
use crate::domain::{Error, User};

/// Salted SHA-256 password digest, stored as `salt$hex`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHash {
    salt: String,
    digest: String,
}

impl PasswordHash {
    /// Hash a plaintext password under a fresh random salt.
    pub fn new(password: &str) -> Self {
        let salt = Uuid::new_v4().simple().to_string();
        let digest = Self::digest(&salt, password);
        Self { salt, digest }
    }

    /// Check a plaintext password against the stored digest.
    pub fn verify(&self, password: &str) -> bool {
        Self::digest(&self.salt, password) == self.digest
    }

    fn digest(salt: &str, password: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(salt.as_bytes());
        hasher.update(password.as_bytes());
        hex::encode(hasher.finalize())
    }
}

/// Login credentials as submitted to the login endpoint.
///
/// The password buffer is zeroed on drop so credential material does not
/// linger after the request completes.
#[derive(Debug, Clone)]
pub struct LoginCredentials {
    username: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// True when either part is blank; such submissions never authenticate.
    pub fn is_blank(&self) -> bool {
        self.username.is_empty() || self.password.is_empty()
    }
}

/// Check credentials against the user store.
///
/// Unknown usernames and wrong passwords are indistinguishable to the
/// caller; both yield `None` so login failures stay generic.
pub async fn authenticate(
    users: &Arc<dyn UserRepository>,
    credentials: &LoginCredentials,
) -> Result<Option<User>, Error> {
    if credentials.is_blank() {
        return Ok(None);
    }
    let user = users
        .find_by_username(credentials.username())
        .await
        .map_err(|err| Error::internal(format!("user lookup failed: {err}")))?;
    Ok(user.filter(|user| user.password().verify(credentials.password())))
}
