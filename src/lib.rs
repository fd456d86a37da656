//! financas - Core of a personal-finance tracking web application
//!
//! This library provides the domain model and persistence for a small
//! finance tracker: users, income/expense transactions, categories, and
//! aggregate reports. The web layer (routing, forms, templates) lives
//! outside this crate and calls into [`manager::FinanceManager`].
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path management
//! - `error`: Custom error types
//! - `models`: Core data models (users, categories, transactions)
//! - `storage`: Whole-document JSON persistence
//! - `reports`: Totals and per-category breakdowns
//! - `audit`: Append-only mutation log
//! - `manager`: The domain façade shared by all request handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use financas::config::StorePaths;
//! use financas::manager::FinanceManager;
//!
//! let paths = StorePaths::new()?;
//! let mut finance = FinanceManager::open(&paths)?;
//! finance.add_transaction("Almoço", "12.50", "Alimentação", "despesa")?;
//! ```

pub mod audit;
pub mod config;
pub mod error;
pub mod manager;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{FinancasError, FinancasResult};
pub use manager::FinanceManager;
