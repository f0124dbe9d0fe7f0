//! Driven ports implemented by outbound persistence adapters.
//!
//! Handlers and services depend on these traits only, so tests can wire
//! in-memory stores without touching any real infrastructure.

mod bank_repository;
mod branch_repository;
mod user_repository;

pub use bank_repository::BankRepository;
pub use branch_repository::BranchRepository;
pub use user_repository::UserRepository;

use thiserror::Error as ThisError;

/// Failures raised by persistence adapters.
///
/// Adapters keep their own failure vocabulary; inbound code promotes these
/// to an internal domain error at the boundary so no storage detail leaks
/// into responses.
#[derive(Debug, Clone, ThisError)]
pub enum PersistenceError {
    /// The backing store could not be reached or was poisoned.
    #[error("store unavailable: {0}")]
    Unavailable(String),
    /// A write violated a store invariant (e.g. duplicate key).
    #[error("constraint violated: {0}")]
    Constraint(String),
}
