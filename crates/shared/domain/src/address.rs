//! Address domain entity.

use serde::{Deserialize, Serialize};

use crate::id::AddressId;

/// Physical location of a user.
///
/// Every field is free-form text; the domain layer neither validates nor
/// normalizes them, and no cross-field invariants apply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Server-assigned identifier, absent until the record is persisted
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<AddressId>,
    pub country: String,
    pub state: String,
    pub city: String,
    pub district: String,
    pub street: String,
    pub number: String,
    pub complement: String,
}

impl Address {
    /// Create a fresh, unpersisted address with every field empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start rebuilding a stored address: an otherwise-empty instance that
    /// already carries the identifier the persistence layer assigned.
    pub fn from_persistence(id: AddressId) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    /// Identifier assigned by the persistence layer, if any.
    ///
    /// There is no matching mutator: once assigned, the identifier never
    /// changes for the lifetime of the value.
    pub fn id(&self) -> Option<AddressId> {
        self.id
    }
}
