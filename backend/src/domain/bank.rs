//! Bank entity.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::UserId;

/// Stable bank identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BankId(Uuid);

impl BankId {
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for BankId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for BankId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A bank owned by the user who created it.
///
/// The owner is set at creation and never changes; there is no edit or
/// delete operation for banks.
#[derive(Debug, Clone)]
pub struct Bank {
    id: BankId,
    name: String,
    description: String,
    institution_number: String,
    swift_code: String,
    owner: UserId,
}

impl Bank {
    pub fn create(
        name: String,
        description: String,
        institution_number: String,
        swift_code: String,
        owner: UserId,
    ) -> Self {
        Self {
            id: BankId::random(),
            name,
            description,
            institution_number,
            swift_code,
            owner,
        }
    }

    pub fn id(&self) -> BankId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn institution_number(&self) -> &str {
        &self.institution_number
    }

    pub fn swift_code(&self) -> &str {
        &self.swift_code
    }

    pub fn owner(&self) -> UserId {
        self.owner
    }
}
