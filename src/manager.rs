//! Finance manager
//!
//! The single authoritative in-memory store of all domain state: users,
//! categories, and transactions. Every mutating operation persists the
//! full state document synchronously before returning, then appends an
//! audit entry.
//!
//! The manager is constructed explicitly and shared by the (external)
//! web layer under a single-writer assumption; there is no internal
//! locking.

use chrono::Local;

use crate::audit::{AuditEntry, AuditLogger, EntityType, Operation};
use crate::config::StorePaths;
use crate::error::{FinancasError, FinancasResult};
use crate::models::{Category, Transaction, TransactionKind, User};
use crate::reports::{self, CategorySpending};
use crate::storage::{FileStorage, StoreData};

/// Categories seeded on a fresh install, when no stored data exists
const DEFAULT_CATEGORIES: [&str; 5] =
    ["Alimentação", "Transportes", "Lazer", "Saúde", "Outros"];

/// In-memory domain store with whole-document persistence
///
/// Created once at process start via [`FinanceManager::open`] and handed
/// to the request handlers. Amount and kind inputs are the raw strings
/// the web layer extracts from form submissions; parse failures surface
/// as errors instead of being stored.
pub struct FinanceManager {
    users: Vec<User>,
    categories: Vec<Category>,
    transactions: Vec<Transaction>,
    next_transaction_id: u32,

    storage: FileStorage,
    audit: AuditLogger,
}

impl FinanceManager {
    /// Open the manager, loading persisted state if it exists
    ///
    /// When no categories were loaded (fresh install or empty document)
    /// the five default categories are seeded in memory; they reach disk
    /// with the first mutation.
    pub fn open(paths: &StorePaths) -> FinancasResult<Self> {
        paths.ensure_directories()?;

        let storage = FileStorage::new(paths.data_file());
        let audit = AuditLogger::new(paths.audit_log());

        let mut manager = Self {
            users: Vec::new(),
            categories: Vec::new(),
            transactions: Vec::new(),
            next_transaction_id: 1,
            storage,
            audit,
        };

        if let Some(data) = manager.storage.load()? {
            manager.users = data.users;
            manager.categories = data.categories;
            manager.transactions = data.transactions;
            manager.next_transaction_id = data.next_transaction_id;
        }

        if manager.categories.is_empty() {
            manager.categories = DEFAULT_CATEGORIES.into_iter().map(Category::new).collect();
        }

        Ok(manager)
    }

    // === Users ===

    /// Register a new user
    ///
    /// E-mail uniqueness is deliberately not enforced; see the design
    /// notes. Users are never deleted, so sequential ids cannot collide.
    pub fn add_user(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        role: &str,
    ) -> FinancasResult<User> {
        let user = User::new(self.users.len() as u32 + 1, name, email, password, role);
        self.users.push(user.clone());
        self.persist()?;

        self.audit.log(&AuditEntry::new(
            Operation::Create,
            EntityType::User,
            user.id.to_string(),
            Some(user.email.clone()),
        ))?;

        Ok(user)
    }

    /// Authenticate by exact e-mail and password match
    ///
    /// Returns `None` for both unknown e-mail and wrong password; the
    /// two cases are deliberately indistinguishable.
    pub fn authenticate(&self, email: &str, password: &str) -> Option<&User> {
        self.users
            .iter()
            .find(|u| u.email == email && u.password == password)
    }

    // === Categories ===

    /// The category collection, in insertion order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Add a category by name
    ///
    /// The name is trimmed first. Returns `Ok(None)` without persisting
    /// when the trimmed name is empty or a case-insensitive match
    /// already exists.
    pub fn add_category(&mut self, name: &str) -> FinancasResult<Option<Category>> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(None);
        }

        if self.categories.iter().any(|c| c.matches_name(name)) {
            return Ok(None);
        }

        let category = Category::new(name);
        self.categories.push(category.clone());
        self.persist()?;

        self.audit.log(&AuditEntry::new(
            Operation::Create,
            EntityType::Category,
            category.name.clone(),
            None,
        ))?;

        Ok(Some(category))
    }

    // === Transactions ===

    /// Add a transaction from raw form inputs
    ///
    /// The amount is parsed and normalized to its absolute value; the
    /// kind must be one of the two wire tags. The category is resolved
    /// by exact-name match and created on the fly when unknown. The id
    /// comes from the persisted monotonic counter and the date is set to
    /// today.
    pub fn add_transaction(
        &mut self,
        description: &str,
        amount: &str,
        category_name: &str,
        kind: &str,
    ) -> FinancasResult<Transaction> {
        let amount = parse_amount(amount)?;
        let kind = parse_kind(kind)?;
        let category = self.ensure_category(category_name);

        let id = self.next_transaction_id;
        self.next_transaction_id += 1;

        let txn = Transaction::new(
            id,
            description,
            amount,
            Local::now().date_naive(),
            kind,
            Some(category),
        );

        self.transactions.push(txn.clone());
        self.persist()?;

        self.audit.log(&AuditEntry::new(
            Operation::Create,
            EntityType::Transaction,
            txn.id.to_string(),
            Some(txn.description.clone()),
        ))?;

        Ok(txn)
    }

    /// The transaction collection, in insertion order
    pub fn list_transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Look up a transaction by id
    pub fn get_transaction(&self, id: u32) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Edit a transaction in place
    ///
    /// Returns `Ok(false)` when the id is unknown, leaving everything
    /// untouched; the id check happens before input parsing. On success
    /// the description, amount, kind, and category are replaced with the
    /// same normalization as [`add_transaction`](Self::add_transaction);
    /// id and date are immutable.
    pub fn edit_transaction(
        &mut self,
        id: u32,
        description: &str,
        amount: &str,
        category_name: &str,
        kind: &str,
    ) -> FinancasResult<bool> {
        let Some(pos) = self.transactions.iter().position(|t| t.id == id) else {
            return Ok(false);
        };

        let amount = parse_amount(amount)?;
        let kind = parse_kind(kind)?;
        let category = self.ensure_category(category_name);

        let txn = &mut self.transactions[pos];
        txn.description = description.to_string();
        txn.amount = amount;
        txn.kind = kind;
        txn.category = Some(category);

        let summary = txn.description.clone();
        self.persist()?;

        self.audit.log(&AuditEntry::new(
            Operation::Update,
            EntityType::Transaction,
            id.to_string(),
            Some(summary),
        ))?;

        Ok(true)
    }

    /// Delete a transaction by id
    ///
    /// Removes the matching entry if present. Persists unconditionally,
    /// so calling it twice with the same id is harmless.
    pub fn delete_transaction(&mut self, id: u32) -> FinancasResult<()> {
        self.transactions.retain(|t| t.id != id);
        self.persist()?;

        self.audit.log(&AuditEntry::new(
            Operation::Delete,
            EntityType::Transaction,
            id.to_string(),
            None,
        ))?;

        Ok(())
    }

    // === Reports ===

    /// Sum of all income amounts
    pub fn total_income(&self) -> f64 {
        reports::total_income(&self.transactions)
    }

    /// Sum of all expense amounts
    pub fn total_expense(&self) -> f64 {
        reports::total_expense(&self.transactions)
    }

    /// Income minus expenses
    pub fn current_balance(&self) -> f64 {
        reports::current_balance(&self.transactions)
    }

    /// Expense totals per category, in first-encounter order
    pub fn expenses_by_category(&self) -> Vec<CategorySpending> {
        reports::expenses_by_category(&self.transactions)
    }

    // === Internals ===

    /// Resolve a category by exact name, creating it if unknown
    ///
    /// Transaction forms submit free text, so an unknown name grows the
    /// collection here (even an empty one); only the explicit
    /// [`add_category`](Self::add_category) path trims and deduplicates.
    fn ensure_category(&mut self, name: &str) -> String {
        if !self.categories.iter().any(|c| c.name == name) {
            self.categories.push(Category::new(name));
        }
        name.to_string()
    }

    /// Rewrite the full state document
    fn persist(&self) -> FinancasResult<()> {
        let data = StoreData {
            users: self.users.clone(),
            categories: self.categories.clone(),
            transactions: self.transactions.clone(),
            next_transaction_id: self.next_transaction_id,
        };
        self.storage.save(&data)
    }
}

/// Parse a raw amount string, normalizing to a non-negative value
fn parse_amount(raw: &str) -> FinancasResult<f64> {
    raw.trim()
        .parse::<f64>()
        .map(f64::abs)
        .map_err(|_| FinancasError::InvalidAmount(raw.to_string()))
}

/// Parse a raw kind string into the closed enum
fn parse_kind(raw: &str) -> FinancasResult<TransactionKind> {
    raw.parse::<TransactionKind>()
        .map_err(|e| FinancasError::Validation(e.to_string()))
}
