use super::Config;
use crate::core::{balance, format_currency};
use clap::Args;

#[derive(Args, Debug)]
pub struct BalanceCommand {
    /// Print the unformatted decimal value
    #[arg(long)]
    raw: bool,
}

impl BalanceCommand {
    pub fn exec(&self, config: &Config) -> anyhow::Result<()> {
        let ledger = config.open_ledger()?;
        let total = balance(ledger.transactions());
        if self.raw {
            println!("{}", total);
        } else {
            println!("{}", format_currency(total));
        }
        Ok(())
    }
}
