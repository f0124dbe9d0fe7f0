//! Port abstraction for bank persistence adapters.

use async_trait::async_trait;

use super::PersistenceError;
use crate::domain::{Bank, BankId};

#[async_trait]
pub trait BankRepository: Send + Sync {
    /// Insert a new bank record.
    async fn insert(&self, bank: Bank) -> Result<(), PersistenceError>;

    /// Fetch a bank by identifier.
    async fn find_by_id(&self, id: BankId) -> Result<Option<Bank>, PersistenceError>;

    /// All banks, in creation order.
    async fn list_all(&self) -> Result<Vec<Bank>, PersistenceError>;
}
