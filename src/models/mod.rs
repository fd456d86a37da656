//! Core data models for the finance tracker
//!
//! This module contains the data structures that represent the domain:
//! users, categories, and transactions. Serde renames keep the persisted
//! field names compatible with the `dados.json` document format.

pub mod category;
pub mod transaction;
pub mod user;

pub use category::Category;
pub use transaction::{ParseKindError, Transaction, TransactionKind};
pub use user::User;
