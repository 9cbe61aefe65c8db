//! The command line interface for fintrack.
//!
//! This is the presentation glue over the library: each subcommand maps onto
//! one core operation (create, list, delete, category totals, CSV export).

use std::{
    path::PathBuf,
    process::ExitCode,
    sync::{Arc, Mutex},
};

use clap::{Parser, Subcommand};
use rusqlite::Connection;
use time::{OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use fintrack::{
    Error, db,
    export::write_csv_file,
    models::{DatabaseID, NewTransaction},
    reports::totals_by_category,
    stores::{SqliteTransactionStore, TransactionStore},
};

/// A single-user personal finance tracker.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// File path to the application SQLite database, created on first run.
    #[arg(long, default_value = "finance.db")]
    db_path: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Record a new transaction.
    Add {
        /// The amount of money spent or earned.
        amount: f64,

        /// The category label for the transaction.
        category: String,

        /// What the transaction was for.
        #[arg(short, long, default_value = "")]
        description: String,

        /// The transaction date as YYYY-MM-DD. Defaults to today.
        #[arg(long)]
        date: Option<String>,
    },

    /// List all transactions, most recent date first.
    List,

    /// Delete the transaction with the given ID.
    Remove {
        /// The ID shown by the list subcommand.
        id: DatabaseID,
    },

    /// Print the summed amount for each category.
    Report,

    /// Export all transactions to a CSV file.
    Export {
        /// Where to write the CSV file.
        path: PathBuf,
    },
}

fn main() -> ExitCode {
    setup_logging();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    tracing::debug!("opening database at {}", cli.db_path.display());

    let connection = Connection::open(&cli.db_path)?;
    db::initialize(&connection)?;

    let mut store = SqliteTransactionStore::new(Arc::new(Mutex::new(connection)));

    match cli.command {
        Command::Add {
            amount,
            category,
            description,
            date,
        } => {
            let date = date.unwrap_or_else(today);
            let new_transaction = NewTransaction::new(amount, &category, &description, &date)?;

            let transaction = store.create(new_transaction)?;
            println!("Recorded transaction {}.", transaction.id());
        }
        Command::List => {
            let transactions = store.get_all()?;

            println!(
                "{:>6}  {:>12}  {:<16}  {:<10}  {}",
                "ID", "Amount", "Category", "Date", "Description"
            );
            for transaction in &transactions {
                println!(
                    "{:>6}  {:>12.2}  {:<16}  {:<10}  {}",
                    transaction.id(),
                    transaction.amount(),
                    transaction.category(),
                    transaction.date(),
                    transaction.description(),
                );
            }
        }
        Command::Remove { id } => {
            store.delete(id)?;
            println!("Removed transaction {id}.");
        }
        Command::Report => {
            let transactions = store.get_all()?;

            for (category, total) in totals_by_category(&transactions) {
                println!("{category:<16}  {total:>12.2}");
            }
        }
        Command::Export { path } => {
            let transactions = store.get_all()?;
            write_csv_file(&transactions, &path)?;

            println!(
                "Exported {} transactions to {}.",
                transactions.len(),
                path.display()
            );
        }
    }

    Ok(())
}

/// Today's date (UTC) as YYYY-MM-DD text, the default for the add subcommand.
///
/// This is the only place a calendar date is ever produced; the core stores
/// dates as opaque text.
fn today() -> String {
    const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

    OffsetDateTime::now_utc()
        .date()
        .format(DATE_FORMAT)
        .expect("formatting a date with a fixed format description cannot fail")
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_filter(filter))
        .init();
}
