//! Remove command - delete a transaction after confirmation

use super::{print_projection, Config};
use crate::core::{format_currency, format_date, FilterSortCriteria, TransactionId};
use crate::ledger::Ledger;
use crate::storage::KeyValueStore;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Args, Debug)]
pub struct RemoveCommand {
    /// Id of the transaction to delete (see `list`)
    id: i64,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

impl RemoveCommand {
    pub fn exec(&self, config: &Config) -> anyhow::Result<()> {
        let mut ledger = config.open_ledger()?;
        if self.run(&mut ledger, confirm_delete)? {
            println!();
            print_projection(&ledger.render(&FilterSortCriteria::default()));
        }
        Ok(())
    }

    /// Remove the entry once `confirm` agrees. Returns whether anything was deleted.
    fn run<S: KeyValueStore>(
        &self,
        ledger: &mut Ledger<S>,
        confirm: impl FnOnce() -> anyhow::Result<bool>,
    ) -> anyhow::Result<bool> {
        let id = TransactionId(self.id);

        let Some(tx) = ledger.get(id) else {
            println!("No transaction with id {}", id);
            return Ok(false);
        };

        println!(
            "{} | {} | {} | {}",
            tx.description,
            format_date(&tx.date.to_string()),
            format_currency(tx.amount),
            tx.kind
        );
        if !self.yes && !confirm()? {
            println!("Nothing deleted.");
            return Ok(false);
        }

        ledger.remove(id);
        println!("Deleted transaction {}", id);
        Ok(true)
    }
}

fn confirm_delete() -> anyhow::Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Do you really want to delete this transaction?")
        .default(false)
        .interact()?)
}
