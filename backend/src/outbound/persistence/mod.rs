//! Persistence adapters.
//!
//! The relational store is an external collaborator of this system, so the
//! shipped adapters are process-local in-memory stores behind the same
//! ports. They double as deterministic fixtures for handler tests.

mod memory;

pub use memory::{MemoryBankRepository, MemoryBranchRepository, MemoryUserRepository};
