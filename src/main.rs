use clap::{Parser, Subcommand};

mod cmd;
mod core;
mod ledger;
mod storage;

#[derive(Parser, Debug)]
#[command(name = "budgetbook", version, about = "Track income and expenses with a running balance")]
struct Cli {
    #[command(flatten)]
    config: cmd::Config,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add an income or expense entry
    Add(cmd::add::AddCommand),
    /// Delete an entry (asks for confirmation)
    Remove(cmd::remove::RemoveCommand),
    /// Show entries, optionally filtered and sorted, with the balance
    List(cmd::list::ListCommand),
    /// Show the current balance
    Balance(cmd::balance::BalanceCommand),
    /// Show or toggle the light/dark theme preference
    Theme(cmd::theme::ThemeCommand),
    /// Print the JSON Schema of stored transactions
    Schema(cmd::schema::SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Add(add) => add.exec(&cli.config),
        Command::Remove(remove) => remove.exec(&cli.config),
        Command::List(list) => list.exec(&cli.config),
        Command::Balance(balance) => balance.exec(&cli.config),
        Command::Theme(theme) => theme.exec(&cli.config),
        Command::Schema(schema) => schema.exec(),
    }
}
