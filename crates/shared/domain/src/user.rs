//! User aggregate root and its owned sub-records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::contact::Contact;
use crate::id::UserId;
use crate::login::Login;

/// User profile aggregate.
///
/// A `User` exclusively owns one [`Contact`], one [`Address`] and one
/// [`Login`]. The sub-records are held by value: they live and die with the
/// aggregate, are never shared between users, and carry no back-reference to
/// their owner.
///
/// Like the leaf entities, a `User` starts empty and is populated by external
/// code, typically a deserializer or a persistence mapper, which is also the
/// only place identifiers come from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned identifier, absent until the record is persisted
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<UserId>,
    pub name: String,
    pub last_name: String,
    /// Brazilian taxpayer registry number, kept as free-form text
    pub cpf: String,
    /// Brazilian identity card number, kept as free-form text
    pub rg: String,
    pub birth_date: Option<NaiveDate>,
    pub contact: Contact,
    pub address: Address,
    pub login: Login,
}

impl User {
    /// Create a fresh, unpersisted user owning fresh, empty sub-records.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start rebuilding a stored user under its assigned identifier.
    ///
    /// The returned aggregate is otherwise empty; the mapping layer fills in
    /// the profile fields and replaces the sub-records with the stored ones.
    pub fn from_persistence(id: UserId) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    /// Identifier assigned by the persistence layer, if any.
    ///
    /// There is no matching mutator: once assigned, the identifier never
    /// changes for the lifetime of the value.
    pub fn id(&self) -> Option<UserId> {
        self.id
    }
}
