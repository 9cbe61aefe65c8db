//! Fintrack is a single-user personal finance tracker.
//!
//! Transactions (amount, category, description, date) are kept in a local
//! SQLite database. The library provides the data-access layer
//! ([stores::TransactionStore]), per-category reporting totals
//! ([reports::totals_by_category]) and CSV export ([export::write_csv]);
//! the `fintrack` binary wires these up behind a small CLI.

#![warn(missing_docs)]

pub mod db;
pub mod export;
pub mod models;
pub mod reports;
pub mod stores;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An empty string was used as a category name.
    #[error("category must not be empty")]
    EmptyCategory,

    /// An empty string was used as a transaction date.
    #[error("date must not be empty")]
    EmptyDate,

    /// The requested resource was not found.
    ///
    /// This error may occur when a query returns no rows. Deleting a
    /// transaction that does not exist is a no-op, not this error.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    Sql(rusqlite::Error),

    /// The export file could not be written.
    ///
    /// Holds the underlying error as a string because [csv::Error] does not
    /// implement [PartialEq].
    #[error("could not write the export file: {0}")]
    Csv(String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::Sql(error)
            }
        }
    }
}

impl From<csv::Error> for Error {
    fn from(value: csv::Error) -> Self {
        Error::Csv(value.to_string())
    }
}
