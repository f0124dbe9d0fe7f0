//! Port abstraction for user persistence adapters.

use async_trait::async_trait;

use super::PersistenceError;
use crate::domain::{User, UserId};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user record.
    async fn insert(&self, user: User) -> Result<(), PersistenceError>;

    /// Replace an existing user record.
    async fn update(&self, user: User) -> Result<(), PersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, PersistenceError>;

    /// Fetch a user by exact username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, PersistenceError>;
}
