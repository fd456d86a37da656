//! Transaction model
//!
//! Represents a single dated monetary movement of a given kind (income
//! or expense), optionally tagged with a category. Categories are
//! referenced by name; the name is resolved against the manager's
//! category collection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The income/expense discriminator on a transaction
///
/// Serialized as the wire tags `"receita"` (income) and `"despesa"`
/// (expense).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Money coming in
    #[serde(rename = "receita")]
    Income,
    /// Money going out
    #[serde(rename = "despesa")]
    Expense,
}

impl TransactionKind {
    /// The wire tag for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "receita",
            Self::Expense => "despesa",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "receita" => Ok(Self::Income),
            "despesa" => Ok(Self::Expense),
            other => Err(ParseKindError(other.to_string())),
        }
    }
}

/// Error returned when a raw string is not a valid transaction kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKindError(pub String);

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown transaction kind {:?} (expected \"receita\" or \"despesa\")",
            self.0
        )
    }
}

impl std::error::Error for ParseKindError {}

/// A dated monetary movement linked to an optional category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, assigned from a monotonic counter
    pub id: u32,

    /// Free-text description (stored as-is, may be empty)
    #[serde(rename = "descricao")]
    pub description: String,

    /// Amount, always non-negative; the kind carries the sign
    #[serde(rename = "valor")]
    pub amount: f64,

    /// Creation date, immutable after creation
    #[serde(rename = "data")]
    pub date: NaiveDate,

    /// Income or expense
    #[serde(rename = "tipo")]
    pub kind: TransactionKind,

    /// Name of the category this transaction is tagged with, if any
    #[serde(rename = "categoria")]
    pub category: Option<String>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        id: u32,
        description: impl Into<String>,
        amount: f64,
        date: NaiveDate,
        kind: TransactionKind,
        category: Option<String>,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
            date,
            kind,
            category,
        }
    }

    /// Check if this is an income transaction
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Check if this is an expense transaction
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {:.2} ({})",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount,
            self.kind
        )
    }
}
