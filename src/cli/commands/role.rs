use crate::cli::parser::{Cli, Commands, RoleCmd};
use crate::cli::{acting_identity, open_pool};
use crate::config::Config;
use crate::core::roles::RolesLogic;
use crate::errors::AppResult;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Role { action } = &cli.command else {
        return Ok(());
    };

    let mut pool = open_pool(cfg)?;

    match action {
        RoleCmd::Add { name, level } => {
            let actor = acting_identity(cli)?;
            RolesLogic::add(&mut pool, cfg, &actor, name, level)
        }
        RoleCmd::Del { name } => {
            let actor = acting_identity(cli)?;
            RolesLogic::del(&mut pool, cfg, &actor, name)
        }
        RoleCmd::List => RolesLogic::list(&mut pool),
    }
}
