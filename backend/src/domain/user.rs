//! User entity and its identifier newtypes.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::auth::PasswordHash;

/// Stable user identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Generate a new random [`UserId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for UserId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Unique login name for a user.
///
/// Length and emptiness are enforced by the registration form before a
/// `Username` is ever constructed; the newtype exists so repositories and
/// services cannot confuse it with other strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Application user.
///
/// Optional profile fields are stored as empty strings when unset, matching
/// the wire format of the profile endpoints. The password hash never leaves
/// the domain.
#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    username: Username,
    password: PasswordHash,
    email: String,
    first_name: String,
    last_name: String,
}

impl User {
    /// Build a user from registration data.
    pub fn register(
        username: Username,
        password: PasswordHash,
        email: String,
        first_name: String,
        last_name: String,
    ) -> Self {
        Self {
            id: UserId::random(),
            username,
            password,
            email,
            first_name,
            last_name,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password(&self) -> &PasswordHash {
        &self.password
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Apply a profile edit. `password` replaces the stored hash only when a
    /// new password was supplied.
    pub fn apply_profile_edit(
        &mut self,
        first_name: String,
        last_name: String,
        email: String,
        password: Option<PasswordHash>,
    ) {
        self.first_name = first_name;
        self.last_name = last_name;
        self.email = email;
        if let Some(hash) = password {
            self.password = hash;
        }
    }
}
