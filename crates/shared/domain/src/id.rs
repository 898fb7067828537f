//! Typed identifiers for the domain entities.
//!
//! Identifiers are opaque numbers assigned by the persistence layer when a
//! record is stored. The newtypes keep a `UserId` from being confused with an
//! `AddressId` at compile time; beyond equality and lookup the value carries
//! no meaning.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Declares an opaque numeric identifier type.
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw identifier value
            pub fn new(value: i64) -> Self {
                Self(value)
            }

            /// Get the raw identifier value
            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self::new(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.value()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<i64>()
                    .map(Self::new)
                    .map_err(|_| DomainError::invalid_id(format!("{:?} is not a number", s)))
            }
        }
    };
}

entity_id!(
    /// Identifier of a persisted user record
    UserId
);

entity_id!(
    /// Identifier of a persisted address record
    AddressId
);

entity_id!(
    /// Identifier of a persisted contact record
    ContactId
);

entity_id!(
    /// Identifier of a persisted login record
    LoginId
);

entity_id!(
    /// Identifier of a salon, owned by the salon service
    SalonId
);

/// Identifier of a stored appointment record.
///
/// Appointments live in a document store whose identifiers are opaque text,
/// so unlike the numeric ids above this one wraps a `String`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppointmentId(String);

impl AppointmentId {
    /// Wrap a raw identifier value
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the raw identifier value
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<String> for AppointmentId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for AppointmentId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<AppointmentId> for String {
    fn from(id: AppointmentId) -> Self {
        id.0
    }
}

impl std::fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
