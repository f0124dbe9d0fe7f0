//! Ownership guards for the bank resource tree.
//!
//! Handlers compose these explicit checks in front of their bodies, in a
//! fixed order: authentication (handled by the session wrapper), existence
//! (handled at lookup), then ownership. A branch is owned transitively
//! through its parent bank.

use crate::domain::{Bank, Error, UserId};

/// Require that `principal` owns `bank`, otherwise `Forbidden`.
pub fn require_bank_owner(bank: &Bank, principal: UserId) -> Result<(), Error> {
    if bank.owner() == principal {
        Ok(())
    } else {
        Err(Error::forbidden("Forbidden"))
    }
}
