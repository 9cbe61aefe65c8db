//! Creates the application's database schema.

use rusqlite::Connection;

use crate::Error;

/// Ensure the transaction table exists in the database behind `connection`.
///
/// Safe to call repeatedly: the schema uses `IF NOT EXISTS`, so calling this
/// on an already initialized database is a no-op and existing records are
/// left untouched.
///
/// # Errors
/// Returns an [Error::Sql] if the DDL statement fails, e.g. because the
/// database file is not writable.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                amount REAL NOT NULL,
                category TEXT NOT NULL,
                description TEXT,
                date TEXT NOT NULL
                )",
        (),
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use super::initialize;

    #[test]
    fn initialize_creates_transaction_table() {
        let conn = Connection::open_in_memory().unwrap();

        initialize(&conn).unwrap();

        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'transaction'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn initialize_twice_preserves_existing_records() {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();

        conn.execute(
            "INSERT INTO \"transaction\" (amount, category, description, date)
             VALUES (12.5, 'Food', 'lunch', '2024-01-01')",
            (),
        )
        .unwrap();

        initialize(&conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM \"transaction\"", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
