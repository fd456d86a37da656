//! Spending breakdown by category

use crate::models::Transaction;

/// Label under which expenses with no category accumulate
pub const UNCATEGORIZED_LABEL: &str = "Sem categoria";

/// Summed expenses for a single category
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpending {
    /// Category display name (or [`UNCATEGORIZED_LABEL`])
    pub category: String,
    /// Total expense amount for this category
    pub total: f64,
}

/// Sum expense amounts per category
///
/// Only `despesa` transactions contribute; a category with zero expenses
/// does not appear. The result keeps first-encounter order over the
/// transaction list, matching the insertion-ordered mapping the report
/// page renders.
pub fn expenses_by_category(transactions: &[Transaction]) -> Vec<CategorySpending> {
    let mut totals: Vec<CategorySpending> = Vec::new();

    for txn in transactions {
        if !txn.is_expense() {
            continue;
        }

        let name = txn.category.as_deref().unwrap_or(UNCATEGORIZED_LABEL);

        match totals.iter_mut().find(|entry| entry.category == name) {
            Some(entry) => entry.total += txn.amount,
            None => totals.push(CategorySpending {
                category: name.to_string(),
                total: txn.amount,
            }),
        }
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;
    use chrono::NaiveDate;

    fn txn(id: u32, amount: f64, kind: TransactionKind, category: Option<&str>) -> Transaction {
        Transaction::new(
            id,
            format!("txn {}", id),
            amount,
            NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            kind,
            category.map(String::from),
        )
    }

    #[test]
    fn test_empty() {
        assert!(expenses_by_category(&[]).is_empty());
    }

    #[test]
    fn test_only_expenses_counted() {
        let transactions = vec![
            txn(1, 500.0, TransactionKind::Income, Some("Alimentação")),
            txn(2, 20.0, TransactionKind::Expense, Some("Alimentação")),
        ];

        let totals = expenses_by_category(&transactions);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].category, "Alimentação");
        assert_eq!(totals[0].total, 20.0);
    }

    #[test]
    fn test_sums_accumulate_per_category() {
        let transactions = vec![
            txn(1, 10.0, TransactionKind::Expense, Some("Alimentação")),
            txn(2, 5.0, TransactionKind::Expense, Some("Lazer")),
            txn(3, 2.5, TransactionKind::Expense, Some("Alimentação")),
        ];

        let totals = expenses_by_category(&transactions);
        assert_eq!(totals.len(), 2);
        // First-encounter order
        assert_eq!(totals[0].category, "Alimentação");
        assert_eq!(totals[0].total, 12.5);
        assert_eq!(totals[1].category, "Lazer");
        assert_eq!(totals[1].total, 5.0);
    }

    #[test]
    fn test_uncategorized_expenses_grouped_under_label() {
        let transactions = vec![
            txn(1, 7.0, TransactionKind::Expense, None),
            txn(2, 3.0, TransactionKind::Expense, None),
        ];

        let totals = expenses_by_category(&transactions);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].category, UNCATEGORIZED_LABEL);
        assert_eq!(totals[0].total, 10.0);
    }

    #[test]
    fn test_income_only_yields_nothing() {
        let transactions = vec![txn(1, 100.0, TransactionKind::Income, Some("Outros"))];
        assert!(expenses_by_category(&transactions).is_empty());
    }
}
