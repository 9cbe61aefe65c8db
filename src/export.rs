//! Serializes transaction records to a CSV file.

use std::{fs::File, io::Write, path::Path};

use crate::{Error, models::Transaction};

/// The export file's header row.
const HEADER: [&str; 5] = ["ID", "Amount", "Category", "Description", "Date"];

/// Write `transactions` to `writer` as UTF-8 CSV.
///
/// The output is a header row followed by one row per record, in the order
/// given. Callers wanting the default date-descending export pass the output
/// of [TransactionStore::get_all](crate::stores::TransactionStore::get_all)
/// unchanged. Field values are written verbatim; the `csv` crate quotes
/// fields containing embedded delimiters.
///
/// # Errors
/// This function will return an [Error::Csv] if the destination cannot be
/// written to.
pub fn write_csv<W: Write>(transactions: &[Transaction], writer: W) -> Result<(), Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    writer.write_record(HEADER)?;

    for transaction in transactions {
        writer.serialize(transaction)?;
    }

    writer
        .flush()
        .map_err(|error| Error::Csv(error.to_string()))
}

/// Write `transactions` as CSV to the file at `path`, replacing any existing
/// file.
///
/// # Errors
/// This function will return an [Error::Csv] if `path` is not writable.
pub fn write_csv_file(transactions: &[Transaction], path: &Path) -> Result<(), Error> {
    let file = File::create(path).map_err(|error| Error::Csv(error.to_string()))?;

    write_csv(transactions, file)
}
