//! In-memory repository adapters.
//!
//! Records live in insertion order behind an `RwLock`, which also makes
//! inserts race-free under concurrent registration of the same username.
//! Lock poisoning is surfaced as an unavailable store rather than a panic.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::ports::{
    BankRepository, BranchRepository, PersistenceError, UserRepository,
};
use crate::domain::{Bank, BankId, Branch, BranchId, User, UserId};

fn poisoned(what: &str) -> PersistenceError {
    PersistenceError::Unavailable(format!("{what} store lock poisoned"))
}

/// In-memory [`UserRepository`].
#[derive(Debug, Default)]
pub struct MemoryUserRepository {
    users: RwLock<Vec<User>>,
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn insert(&self, user: User) -> Result<(), PersistenceError> {
        let mut users = self.users.write().map_err(|_| poisoned("user"))?;
        if users
            .iter()
            .any(|existing| existing.username() == user.username())
        {
            return Err(PersistenceError::Constraint(format!(
                "username {} already exists",
                user.username()
            )));
        }
        users.push(user);
        Ok(())
    }

    async fn update(&self, user: User) -> Result<(), PersistenceError> {
        let mut users = self.users.write().map_err(|_| poisoned("user"))?;
        match users.iter_mut().find(|existing| existing.id() == user.id()) {
            Some(slot) => {
                *slot = user;
                Ok(())
            }
            None => Err(PersistenceError::Constraint(format!(
                "no user with id {}",
                user.id()
            ))),
        }
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, PersistenceError> {
        let users = self.users.read().map_err(|_| poisoned("user"))?;
        Ok(users.iter().find(|user| user.id() == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, PersistenceError> {
        let users = self.users.read().map_err(|_| poisoned("user"))?;
        Ok(users
            .iter()
            .find(|user| user.username().as_ref() == username)
            .cloned())
    }
}

/// In-memory [`BankRepository`].
#[derive(Debug, Default)]
pub struct MemoryBankRepository {
    banks: RwLock<Vec<Bank>>,
}

#[async_trait]
impl BankRepository for MemoryBankRepository {
    async fn insert(&self, bank: Bank) -> Result<(), PersistenceError> {
        let mut banks = self.banks.write().map_err(|_| poisoned("bank"))?;
        banks.push(bank);
        Ok(())
    }

    async fn find_by_id(&self, id: BankId) -> Result<Option<Bank>, PersistenceError> {
        let banks = self.banks.read().map_err(|_| poisoned("bank"))?;
        Ok(banks.iter().find(|bank| bank.id() == id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Bank>, PersistenceError> {
        let banks = self.banks.read().map_err(|_| poisoned("bank"))?;
        Ok(banks.clone())
    }
}

/// In-memory [`BranchRepository`].
#[derive(Debug, Default)]
pub struct MemoryBranchRepository {
    branches: RwLock<Vec<Branch>>,
}

#[async_trait]
impl BranchRepository for MemoryBranchRepository {
    async fn insert(&self, branch: Branch) -> Result<(), PersistenceError> {
        let mut branches = self.branches.write().map_err(|_| poisoned("branch"))?;
        branches.push(branch);
        Ok(())
    }

    async fn update(&self, branch: Branch) -> Result<(), PersistenceError> {
        let mut branches = self.branches.write().map_err(|_| poisoned("branch"))?;
        match branches
            .iter_mut()
            .find(|existing| existing.id() == branch.id())
        {
            Some(slot) => {
                *slot = branch;
                Ok(())
            }
            None => Err(PersistenceError::Constraint(format!(
                "no branch with id {}",
                branch.id()
            ))),
        }
    }

    async fn find_by_id(&self, id: BranchId) -> Result<Option<Branch>, PersistenceError> {
        let branches = self.branches.read().map_err(|_| poisoned("branch"))?;
        Ok(branches.iter().find(|branch| branch.id() == id).cloned())
    }

    async fn list_by_bank(&self, bank: BankId) -> Result<Vec<Branch>, PersistenceError> {
        let branches = self.branches.read().map_err(|_| poisoned("branch"))?;
        Ok(branches
            .iter()
            .filter(|branch| branch.bank() == bank)
            .cloned()
            .collect())
    }
}
