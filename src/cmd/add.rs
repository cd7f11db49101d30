//! Add command - validate form input and store a new transaction

use super::{print_projection, Config};
use crate::core::{FilterSortCriteria, TransactionDraft};
use clap::Args;

#[derive(Args, Debug)]
pub struct AddCommand {
    /// What the money was for (e.g., "Salary", "Groceries")
    #[arg(short, long, default_value = "")]
    description: String,

    /// Positive amount, using a dot for decimals (e.g., 250.50)
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    amount: String,

    /// Date in YYYY-MM-DD format
    #[arg(short = 't', long, default_value = "")]
    date: String,

    /// Either "income" or "expense"
    #[arg(short = 'k', long = "type", default_value = "")]
    kind: String,
}

impl AddCommand {
    pub fn exec(&self, config: &Config) -> anyhow::Result<()> {
        let mut ledger = config.open_ledger()?;

        let draft = TransactionDraft {
            description: self.description.clone(),
            amount: self.amount.clone(),
            date: self.date.clone(),
            kind: self.kind.clone(),
        };

        match ledger.add(&draft) {
            Ok(tx) => {
                println!("Added transaction {}", tx.id);
                println!();
                print_projection(&ledger.render(&FilterSortCriteria::default()));
                Ok(())
            }
            Err(err) => {
                for (field, message) in &err.field_errors {
                    eprintln!("  {}: {}", field, message);
                }
                Err(err.into())
            }
        }
    }
}
