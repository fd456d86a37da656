//! User model
//!
//! An account record with credentials and a role tag. Passwords are
//! stored and compared as plain text; hardening credential handling is
//! explicitly out of scope for this core.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A registered user account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, assigned sequentially at registration
    pub id: u32,

    /// Display name
    #[serde(rename = "nome")]
    pub name: String,

    /// E-mail address (uniqueness is not enforced)
    pub email: String,

    /// Plaintext password
    pub password: String,

    /// Role tag, e.g. "user" or "admin" (not enforced anywhere)
    #[serde(rename = "perfil")]
    pub role: String,
}

impl User {
    /// Create a new user record
    pub fn new(
        id: u32,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            password: password.into(),
            role: role.into(),
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user() {
        let user = User::new(1, "Ana", "ana@example.com", "segredo", "user");
        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Ana");
        assert_eq!(user.role, "user");
        assert_eq!(user.to_string(), "Ana <ana@example.com>");
    }

    #[test]
    fn test_serialization_uses_wire_keys() {
        let user = User::new(2, "Rui", "rui@example.com", "1234", "admin");
        let value = serde_json::to_value(&user).unwrap();

        assert_eq!(value["id"], 2);
        assert_eq!(value["nome"], "Rui");
        assert_eq!(value["email"], "rui@example.com");
        assert_eq!(value["password"], "1234");
        assert_eq!(value["perfil"], "admin");

        let deserialized: User = serde_json::from_value(value).unwrap();
        assert_eq!(deserialized, user);
    }
}
