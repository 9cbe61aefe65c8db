//! This file defines the type `Transaction`, the sole entity of the
//! application, and `NewTransaction`, the validated input for creating one.

use serde::Serialize;

use crate::{
    Error,
    models::{CategoryName, DatabaseID},
};

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// Transactions are immutable once created: the store supports only create
/// and delete, never update.
///
/// The date is stored as opaque text in `YYYY-MM-DD` form and is never parsed
/// as a calendar date. Listing relies on the lexicographic order of this
/// format matching chronological order.
///
/// The serde field renames produce the `ID,Amount,Category,Description,Date`
/// header when records are serialized by the CSV exporter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    #[serde(rename = "ID")]
    id: DatabaseID,
    #[serde(rename = "Amount")]
    amount: f64,
    #[serde(rename = "Category")]
    category: CategoryName,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "Date")]
    date: String,
}

impl Transaction {
    /// Create a transaction from parts that are already known to be valid,
    /// e.g. a row read back from the database.
    pub fn new_unchecked(
        id: DatabaseID,
        amount: f64,
        category: CategoryName,
        description: String,
        date: String,
    ) -> Self {
        Self {
            id,
            amount,
            category,
            description,
            date,
        }
    }

    /// The ID of the transaction, assigned by the store on creation.
    pub fn id(&self) -> DatabaseID {
        self.id
    }

    /// The amount of money spent or earned in this transaction.
    ///
    /// No sign convention is enforced; whether positive means income or
    /// expense is up to the caller.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// The category that describes the type of the transaction.
    pub fn category(&self) -> &CategoryName {
        &self.category
    }

    /// A text description of what the transaction was for. May be empty.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// When the transaction happened, as `YYYY-MM-DD` text.
    pub fn date(&self) -> &str {
        &self.date
    }
}

/// The validated input for creating a [Transaction].
///
/// All callers construct transactions through [NewTransaction::new], which is
/// the single place the category and date are validated; the store accepts
/// any `NewTransaction` without re-checking.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    amount: f64,
    category: CategoryName,
    description: String,
    date: String,
}

impl NewTransaction {
    /// Validate the inputs for a new transaction.
    ///
    /// # Errors
    /// This function will return an:
    /// - [Error::EmptyCategory] if `category` is an empty string,
    /// - or [Error::EmptyDate] if `date` is an empty string.
    pub fn new(
        amount: f64,
        category: &str,
        description: &str,
        date: &str,
    ) -> Result<Self, Error> {
        let category = CategoryName::new(category)?;

        if date.is_empty() {
            return Err(Error::EmptyDate);
        }

        Ok(Self {
            amount,
            category,
            description: description.to_string(),
            date: date.to_string(),
        })
    }

    /// The amount of money spent or earned.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// The category for the new transaction.
    pub fn category(&self) -> &CategoryName {
        &self.category
    }

    /// The description for the new transaction.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The date for the new transaction, as `YYYY-MM-DD` text.
    pub fn date(&self) -> &str {
        &self.date
    }
}

#[cfg(test)]
mod tests {
    use crate::Error;

    use super::NewTransaction;

    #[test]
    fn new_fails_on_empty_category() {
        let maybe_transaction = NewTransaction::new(12.5, "", "lunch", "2024-01-01");

        assert_eq!(maybe_transaction, Err(Error::EmptyCategory));
    }

    #[test]
    fn new_fails_on_empty_date() {
        let maybe_transaction = NewTransaction::new(12.5, "Food", "lunch", "");

        assert_eq!(maybe_transaction, Err(Error::EmptyDate));
    }

    #[test]
    fn new_accepts_empty_description() {
        let transaction = NewTransaction::new(12.5, "Food", "", "2024-01-01").unwrap();

        assert_eq!(transaction.amount(), 12.5);
        assert_eq!(transaction.category().as_ref(), "Food");
        assert_eq!(transaction.description(), "");
        assert_eq!(transaction.date(), "2024-01-01");
    }

    #[test]
    fn new_accepts_negative_amount() {
        // No sign convention is enforced at the storage boundary.
        let transaction = NewTransaction::new(-42.0, "Housing", "rent", "2024-02-01");

        assert!(transaction.is_ok());
    }
}
