//! Port abstraction for branch persistence adapters.

use async_trait::async_trait;

use super::PersistenceError;
use crate::domain::{BankId, Branch, BranchId};

#[async_trait]
pub trait BranchRepository: Send + Sync {
    /// Insert a new branch record.
    async fn insert(&self, branch: Branch) -> Result<(), PersistenceError>;

    /// Replace an existing branch record.
    async fn update(&self, branch: Branch) -> Result<(), PersistenceError>;

    /// Fetch a branch by identifier.
    async fn find_by_id(&self, id: BranchId) -> Result<Option<Branch>, PersistenceError>;

    /// All branches of a bank, in creation order.
    async fn list_by_bank(&self, bank: BankId) -> Result<Vec<Branch>, PersistenceError>;
}
