use crate::cli::parser::{Cli, Commands};
use crate::cli::{acting_identity, open_pool};
use crate::config::Config;
use crate::core::history::HistoryLogic;
use crate::errors::AppResult;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        period,
        force,
    } = &cli.command
    {
        let actor = acting_identity(cli)?;
        let mut pool = open_pool(cfg)?;
        HistoryLogic::export(
            &mut pool,
            cfg,
            &actor,
            *format,
            file,
            period.as_deref(),
            *force,
        )?;
    }
    Ok(())
}
