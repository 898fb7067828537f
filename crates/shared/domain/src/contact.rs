//! Contact domain entity.

use serde::{Deserialize, Serialize};

use crate::id::ContactId;

/// Communication channels of a user. No format validation is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<ContactId>,
    pub email: String,
    pub phone: String,
}

impl Contact {
    /// Create a fresh, unpersisted contact.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start rebuilding a stored contact under its assigned identifier.
    pub fn from_persistence(id: ContactId) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    /// Identifier assigned by the persistence layer, if any.
    pub fn id(&self) -> Option<ContactId> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_write_then_read_returns_same_value() {
        let mut contact = Contact::new();
        contact.email = "leandro@example.com".to_string();

        assert_eq!(contact.email, "leandro@example.com");
        assert_eq!(contact.phone, "");
        assert_eq!(contact.id(), None);
    }

    #[test]
    fn test_from_persistence_carries_identifier() {
        let contact = Contact::from_persistence(ContactId::new(3));
        assert_eq!(contact.id(), Some(ContactId::new(3)));
    }
}
