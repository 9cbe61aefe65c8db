//! Defines the transaction store trait.

use crate::{
    Error,
    models::{DatabaseID, NewTransaction, Transaction},
};

/// Handles the creation, retrieval and deletion of transactions.
///
/// Abstracting over the storage backend lets the presentation layer and the
/// tests swap the SQLite store for an in-memory fake.
pub trait TransactionStore {
    /// Create a new transaction in the store.
    ///
    /// The store assigns a fresh ID and the record is durable once this
    /// function returns.
    fn create(&mut self, new_transaction: NewTransaction) -> Result<Transaction, Error>;

    /// Retrieve all transactions from the store, ordered by date descending.
    ///
    /// Dates are compared as text, which matches chronological order for the
    /// `YYYY-MM-DD` format. Transactions sharing a date keep the order they
    /// are stored in. An empty store yields an empty vector.
    fn get_all(&self) -> Result<Vec<Transaction>, Error>;

    /// Permanently remove the transaction with `id` from the store.
    ///
    /// Deleting an ID that is not in the store succeeds as a no-op.
    fn delete(&mut self, id: DatabaseID) -> Result<(), Error>;
}
