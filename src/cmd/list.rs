//! List command - filtered and sorted view of the ledger

use super::{print_projection, Config};
use crate::core::{FilterSortCriteria, SortKey};
use clap::Args;
use std::io;

#[derive(Args, Debug)]
pub struct ListCommand {
    /// Only show transactions whose description contains this text (case-insensitive)
    #[arg(short, long, default_value = "")]
    search: String,

    /// Sort order: date-desc, date-asc, amount-desc, amount-asc or none
    #[arg(short = 'o', long, default_value = "none")]
    sort: String,

    /// Output as CSV instead of formatted table
    #[arg(long, conflicts_with = "json")]
    csv: bool,

    /// Output as JSON instead of formatted table
    #[arg(long)]
    json: bool,
}

impl ListCommand {
    pub fn exec(&self, config: &Config) -> anyhow::Result<()> {
        let ledger = config.open_ledger()?;
        let criteria = FilterSortCriteria::new(self.search.as_str(), SortKey::parse(&self.sort));
        let projection = ledger.render(&criteria);

        if self.csv {
            let mut wtr = csv::Writer::from_writer(io::stdout());
            for row in &projection.rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        } else if self.json {
            let output = serde_json::json!({
                "transactions": projection.rows,
                "balance": projection.balance,
                "formatted_balance": projection.formatted_balance(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            print_projection(&projection);
        }
        Ok(())
    }
}
