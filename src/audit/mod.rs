//! Append-only audit log for state mutations
//!
//! Every mutating operation on the manager appends one entry describing
//! what changed. The log is line-delimited JSON, separate from the state
//! document, and is never rewritten.

pub mod entry;
pub mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
