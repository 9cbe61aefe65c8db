//! Implements a SQLite backed transaction store.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};

use crate::{
    Error,
    models::{CategoryName, DatabaseID, NewTransaction, Transaction},
    stores::TransactionStore,
};

/// Stores transactions in a SQLite database.
///
/// The schema must have been set up with [initialize](crate::db::initialize)
/// before the store is used.
///
/// Each operation runs as a single implicit SQL transaction, so every call is
/// independently atomic and durable on return and the connection lock is only
/// held for the duration of one statement.
#[derive(Debug, Clone)]
pub struct SqliteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SqliteTransactionStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn map_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
        let category: String = row.get(2)?;
        // The description column is nullable; treat NULL as the empty string.
        let description: Option<String> = row.get(3)?;

        Ok(Transaction::new_unchecked(
            row.get(0)?,
            row.get(1)?,
            CategoryName::new_unchecked(&category),
            description.unwrap_or_default(),
            row.get(4)?,
        ))
    }
}

impl TransactionStore for SqliteTransactionStore {
    /// Create a new transaction in the database.
    ///
    /// # Errors
    /// This function will return an [Error::Sql] if there is a SQL error.
    fn create(&mut self, new_transaction: NewTransaction) -> Result<Transaction, Error> {
        let transaction = self
            .connection
            .lock()
            .unwrap()
            .prepare(
                "INSERT INTO \"transaction\" (amount, category, description, date)
                 VALUES (?1, ?2, ?3, ?4)
                 RETURNING id, amount, category, description, date",
            )?
            .query_row(
                (
                    new_transaction.amount(),
                    new_transaction.category().as_ref(),
                    new_transaction.description(),
                    new_transaction.date(),
                ),
                Self::map_row,
            )?;

        Ok(transaction)
    }

    /// Retrieve all transactions in the database, most recent date first.
    ///
    /// # Errors
    /// This function will return an [Error::Sql] if there is a SQL error.
    fn get_all(&self) -> Result<Vec<Transaction>, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare(
                "SELECT id, amount, category, description, date FROM \"transaction\"
                 ORDER BY date DESC",
            )?
            .query_map([], Self::map_row)?
            .map(|maybe_transaction| maybe_transaction.map_err(Error::Sql))
            .collect()
    }

    /// Permanently remove the transaction with `id` from the database.
    ///
    /// Deleting an ID with no matching row is a no-op, not an error.
    ///
    /// # Errors
    /// This function will return an [Error::Sql] if there is a SQL error.
    fn delete(&mut self, id: DatabaseID) -> Result<(), Error> {
        let rows_deleted = self
            .connection
            .lock()
            .unwrap()
            .execute("DELETE FROM \"transaction\" WHERE id = ?1", (id,))?;

        if rows_deleted == 0 {
            tracing::debug!("delete of transaction {id} matched no rows");
        }

        Ok(())
    }
}
