//! Login domain entity.

use serde::{Deserialize, Serialize};

use crate::id::LoginId;

/// Authentication credentials of a user.
///
/// The password is stored exactly as given; hashing (or any other credential
/// handling) belongs to layers outside this crate.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Login {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<LoginId>,
    pub password: String,
}

// Don't expose the password in debug output
impl std::fmt::Debug for Login {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Login")
            .field("id", &self.id)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl Login {
    /// Create a fresh, unpersisted login.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start rebuilding a stored login under its assigned identifier.
    pub fn from_persistence(id: LoginId) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    /// Identifier assigned by the persistence layer, if any.
    pub fn id(&self) -> Option<LoginId> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_write_then_read_returns_same_value() {
        let mut login = Login::new();
        login.password = "s3cret".to_string();

        assert_eq!(login.password, "s3cret");
        assert_eq!(login.id(), None);
    }

    #[test]
    fn test_debug_output_redacts_password() {
        let mut login = Login::from_persistence(LoginId::new(9));
        login.password = "s3cret".to_string();

        let dump = format!("{:?}", login);
        assert!(dump.contains("[REDACTED]"));
        assert!(!dump.contains("s3cret"));
    }
}
