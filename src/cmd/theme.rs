use super::Config;
use clap::Args;

#[derive(Args, Debug)]
pub struct ThemeCommand {
    /// Switch between light and dark
    #[arg(long)]
    toggle: bool,
}

impl ThemeCommand {
    pub fn exec(&self, config: &Config) -> anyhow::Result<()> {
        let mut ledger = config.open_ledger()?;
        let theme = if self.toggle {
            ledger.toggle_theme()
        } else {
            ledger.theme()
        };
        println!("{}", theme);
        Ok(())
    }
}
