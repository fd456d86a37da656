//! Storage layer for the finance tracker
//!
//! The entire application state is persisted as a single JSON document
//! (`dados.json` by default) rewritten in full on every mutation. Writes
//! go through an atomic temp-file-then-rename so the on-disk document is
//! never observed half-written.

pub mod file_io;

pub use file_io::{read_json, write_json_atomic};

use std::collections::HashSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::FinancasResult;
use crate::models::{Category, Transaction, User};

/// The persisted state document
///
/// Three entity arrays plus the monotonic transaction id counter. The
/// counter was not present in early documents, so it is optional on read
/// and rebuilt from the highest stored id when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreData {
    pub users: Vec<User>,
    pub categories: Vec<Category>,
    pub transactions: Vec<Transaction>,

    #[serde(default)]
    pub next_transaction_id: u32,
}

impl StoreData {
    /// Repair derived state after deserialization
    ///
    /// - Transactions referencing a category name not present in the
    ///   categories array lose their category link silently.
    /// - A missing or zero `next_transaction_id` (legacy document) is
    ///   rebuilt as one past the highest stored transaction id.
    fn normalize(&mut self) {
        let known_names: HashSet<&str> = self.categories.iter().map(|c| c.name.as_str()).collect();

        for txn in &mut self.transactions {
            let unknown = txn
                .category
                .as_deref()
                .is_some_and(|name| !known_names.contains(name));
            if unknown {
                txn.category = None;
            }
        }

        let max_id = self.transactions.iter().map(|t| t.id).max().unwrap_or(0);
        if self.next_transaction_id <= max_id {
            self.next_transaction_id = max_id + 1;
        }
    }
}

/// Whole-document JSON persistence for the finance store
///
/// Owns no state beyond the file path. The manager hands it the full
/// in-memory state to save, and asks it to reload that state on startup.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Create a storage instance backed by the given file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Get the backing file path
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Persist the full state document
    pub fn save(&self, data: &StoreData) -> FinancasResult<()> {
        write_json_atomic(&self.path, data)
    }

    /// Load the persisted state document
    ///
    /// Returns `Ok(None)` when the file does not exist yet (first run);
    /// the caller keeps whatever state it already initialized. A
    /// malformed document is an error.
    pub fn load(&self) -> FinancasResult<Option<StoreData>> {
        let data: Option<StoreData> = read_json(&self.path)?;

        Ok(data.map(|mut d| {
            d.normalize();
            d
        }))
    }
}
