//! Contains traits and implementations for objects that store the domain
//! [models](crate::models).

mod sqlite;
mod transaction;

pub use sqlite::SqliteTransactionStore;
pub use transaction::TransactionStore;
