//! Aggregate reports over transactions
//!
//! Totals and per-category breakdowns computed by linear scans over the
//! in-memory transaction list. The collections are small by design, so
//! no indexing is attempted.

pub mod spending;

pub use spending::{expenses_by_category, CategorySpending, UNCATEGORIZED_LABEL};

use crate::models::Transaction;

/// Sum of amounts over all income transactions
pub fn total_income(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .filter(|t| t.is_income())
        .map(|t| t.amount)
        .sum()
}

/// Sum of amounts over all expense transactions
pub fn total_expense(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.amount)
        .sum()
}

/// Income minus expenses
pub fn current_balance(transactions: &[Transaction]) -> f64 {
    total_income(transactions) - total_expense(transactions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;
    use chrono::NaiveDate;

    fn txn(id: u32, amount: f64, kind: TransactionKind) -> Transaction {
        Transaction::new(
            id,
            format!("txn {}", id),
            amount,
            NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            kind,
            None,
        )
    }

    #[test]
    fn test_totals_on_empty() {
        assert_eq!(total_income(&[]), 0.0);
        assert_eq!(total_expense(&[]), 0.0);
        assert_eq!(current_balance(&[]), 0.0);
    }

    #[test]
    fn test_totals_filter_by_kind() {
        let transactions = vec![
            txn(1, 1000.0, TransactionKind::Income),
            txn(2, 250.0, TransactionKind::Expense),
            txn(3, 50.5, TransactionKind::Expense),
            txn(4, 20.0, TransactionKind::Income),
        ];

        assert_eq!(total_income(&transactions), 1020.0);
        assert_eq!(total_expense(&transactions), 300.5);
    }

    #[test]
    fn test_balance_is_income_minus_expense() {
        let transactions = vec![
            txn(1, 100.0, TransactionKind::Income),
            txn(2, 30.0, TransactionKind::Expense),
            txn(3, 45.0, TransactionKind::Expense),
        ];

        assert_eq!(
            current_balance(&transactions),
            total_income(&transactions) - total_expense(&transactions)
        );
        assert_eq!(current_balance(&transactions), 25.0);
    }
}
