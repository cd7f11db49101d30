//! Schema command - print the persisted transaction format

use crate::core::Transaction;
use clap::Args;
use schemars::schema_for;

#[derive(Args, Debug)]
pub struct SchemaCommand {}

impl SchemaCommand {
    /// JSON Schema of the array stored under the `transactions` key
    pub fn exec(&self) -> anyhow::Result<()> {
        let schema = schema_for!(Vec<Transaction>);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(())
    }
}
