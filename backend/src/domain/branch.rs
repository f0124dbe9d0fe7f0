//! Branch entity.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::BankId;

/// Stable branch identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BranchId(Uuid);

impl BranchId {
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for BranchId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for BranchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Field values shared by branch creation and edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchFields {
    pub name: String,
    pub transit_number: String,
    pub address: String,
    pub email: String,
    /// Unset when the submission left capacity blank. The unsigned type
    /// enforces the non-negative invariant.
    pub capacity: Option<u32>,
}

/// A branch belonging to exactly one bank.
///
/// `last_modified` is refreshed on every mutation. Concurrent edits are
/// last-write-wins; the timestamp records but does not prevent conflicts.
#[derive(Debug, Clone)]
pub struct Branch {
    id: BranchId,
    bank: BankId,
    fields: BranchFields,
    last_modified: DateTime<Utc>,
}

impl Branch {
    pub fn create(bank: BankId, fields: BranchFields) -> Self {
        Self {
            id: BranchId::random(),
            bank,
            fields,
            last_modified: Utc::now(),
        }
    }

    pub fn id(&self) -> BranchId {
        self.id
    }

    pub fn bank(&self) -> BankId {
        self.bank
    }

    pub fn name(&self) -> &str {
        &self.fields.name
    }

    pub fn transit_number(&self) -> &str {
        &self.fields.transit_number
    }

    pub fn address(&self) -> &str {
        &self.fields.address
    }

    pub fn email(&self) -> &str {
        &self.fields.email
    }

    pub fn capacity(&self) -> Option<u32> {
        self.fields.capacity
    }

    pub fn last_modified(&self) -> DateTime<Utc> {
        self.last_modified
    }

    /// Replace the editable fields and refresh the modification timestamp.
    pub fn apply_edit(&mut self, fields: BranchFields) {
        self.fields = fields;
        self.last_modified = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str) -> BranchFields {
        BranchFields {
            name: name.into(),
            transit_number: "00012".into(),
            address: "1 Main St".into(),
            email: "branch@example.com".into(),
            capacity: Some(25),
        }
    }

    #[test]
    fn edit_replaces_fields_and_advances_timestamp() {
        let mut branch = Branch::create(BankId::random(), fields("Downtown"));
        let before = branch.last_modified();
        branch.apply_edit(BranchFields {
            capacity: None,
            ..fields("Uptown")
        });
        assert_eq!(branch.name(), "Uptown");
        assert_eq!(branch.capacity(), None);
        assert!(branch.last_modified() >= before);
    }
}
