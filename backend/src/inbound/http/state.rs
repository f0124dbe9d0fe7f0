//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without real infrastructure.

use std::sync::Arc;

use crate::domain::ports::{BankRepository, BranchRepository, UserRepository};
use crate::outbound::persistence::{
    MemoryBankRepository, MemoryBranchRepository, MemoryUserRepository,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserRepository>,
    pub banks: Arc<dyn BankRepository>,
    pub branches: Arc<dyn BranchRepository>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(
        users: Arc<dyn UserRepository>,
        banks: Arc<dyn BankRepository>,
        branches: Arc<dyn BranchRepository>,
    ) -> Self {
        Self {
            users,
            banks,
            branches,
        }
    }

    /// State backed by fresh in-memory stores.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryUserRepository::default()),
            Arc::new(MemoryBankRepository::default()),
            Arc::new(MemoryBranchRepository::default()),
        )
    }
}
