use crate::cli::open_pool;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::audit::AuditLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = &cli.command {
        if !*print {
            info("Nothing to do: use 'barshift log --print'.");
            return Ok(());
        }
        let mut pool = open_pool(cfg)?;
        AuditLogic::print_log(&mut pool)?;
    }
    Ok(())
}
