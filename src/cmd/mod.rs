pub mod add;
pub mod balance;
pub mod list;
pub mod remove;
pub mod schema;
pub mod theme;

use crate::core::Projection;
use crate::ledger::Ledger;
use crate::storage::JsonFileStore;
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table,
};

/// Options shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct Config {
    /// JSON file holding the ledger state.
    ///
    /// Created or rewritten by every ledger command, since the effective
    /// theme is written back on load
    #[arg(
        short = 'f',
        long,
        global = true,
        env = "BUDGETBOOK_DATA_FILE",
        default_value = "budgetbook.json"
    )]
    pub data_file: PathBuf,
}

impl Config {
    /// Load the ledger from the configured data file
    pub fn open_ledger(&self) -> anyhow::Result<Ledger<JsonFileStore>> {
        let store = JsonFileStore::open(&self.data_file)?;
        log::debug!("Using data file {}", store.path().display());
        Ledger::open(store)
            .with_context(|| format!("Failed to load ledger from {}", self.data_file.display()))
    }
}

/// Draw a projection: the rows (or the empty state) followed by the balance.
pub fn print_projection(projection: &Projection) {
    if projection.is_empty() {
        println!("No transactions found.");
    } else {
        let table = Table::new(&projection.rows)
            .with(Style::rounded())
            .with(Modify::new(Columns::one(3)).with(Alignment::right()))
            .to_string();
        println!("{}", table);
    }
    println!("Balance: {}", projection.formatted_balance());
}
