//! Transaction data aggregation for reporting.
//!
//! Provides the per-category totals that back chart and report views. The
//! functions here are pure so they work with any
//! [TransactionStore](crate::stores::TransactionStore) implementation.

use std::collections::BTreeMap;

use crate::models::Transaction;

/// Sums transaction amounts grouped by category.
///
/// Categories are grouped by their exact string, case-sensitively and with no
/// normalization. A category with no transactions is absent from the result
/// rather than present with a total of zero. The returned map iterates in
/// sorted category order, so repeated calls over the same records display
/// identically.
pub fn totals_by_category(transactions: &[Transaction]) -> BTreeMap<String, f64> {
    let mut totals = BTreeMap::new();

    for transaction in transactions {
        *totals
            .entry(transaction.category().as_ref().to_string())
            .or_insert(0.0) += transaction.amount();
    }

    totals
}

#[cfg(test)]
mod tests {
    use crate::models::{CategoryName, Transaction};

    use super::totals_by_category;

    fn create_test_transaction(id: i64, amount: f64, category: &str) -> Transaction {
        Transaction::new_unchecked(
            id,
            amount,
            CategoryName::new_unchecked(category),
            String::new(),
            "2024-01-01".to_string(),
        )
    }

    #[test]
    fn totals_sum_amounts_per_category() {
        let transactions = vec![
            create_test_transaction(1, 10.0, "Food"),
            create_test_transaction(2, 5.0, "Food"),
            create_test_transaction(3, 20.0, "Housing"),
        ];

        let totals = totals_by_category(&transactions);

        assert_eq!(totals.len(), 2);
        assert_eq!(totals["Food"], 15.0);
        assert_eq!(totals["Housing"], 20.0);
    }

    #[test]
    fn totals_handle_empty_input() {
        let totals = totals_by_category(&[]);

        assert!(totals.is_empty());
    }

    #[test]
    fn categories_are_case_sensitive() {
        let transactions = vec![
            create_test_transaction(1, 10.0, "food"),
            create_test_transaction(2, 5.0, "Food"),
        ];

        let totals = totals_by_category(&transactions);

        assert_eq!(totals.len(), 2);
        assert_eq!(totals["food"], 10.0);
        assert_eq!(totals["Food"], 5.0);
    }

    #[test]
    fn totals_sum_signed_amounts() {
        // No sign convention: income and expenses simply sum.
        let transactions = vec![
            create_test_transaction(1, 100.0, "Wages"),
            create_test_transaction(2, -40.0, "Wages"),
        ];

        let totals = totals_by_category(&transactions);

        assert_eq!(totals["Wages"], 60.0);
    }
}
