use crate::cli::open_pool;
use crate::cli::parser::{Cli, Commands, RateCmd};
use crate::config::Config;
use crate::core::stats::RateLogic;
use crate::errors::AppResult;

/// Ratings come from the public customer surface: no tier required.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Rate { action } = &cli.command else {
        return Ok(());
    };

    let mut pool = open_pool(cfg)?;

    match action {
        RateCmd::Add { email, score } => RateLogic::add(&mut pool, email, *score),
        RateCmd::Stats => RateLogic::stats(&mut pool),
    }
}
