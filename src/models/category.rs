//! Category model
//!
//! A category is a named tag attached to transactions for reporting.
//! The name is the only identity: two categories are the same category
//! exactly when their names match.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named grouping tag applied to transactions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category name (the identity key)
    #[serde(rename = "nome")]
    pub name: String,
}

impl Category {
    /// Create a new category
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Check whether this category's name matches, ignoring case
    ///
    /// Used for duplicate detection when adding categories.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
