use crate::cli::parser::{Cli, Commands, StaffCmd};
use crate::cli::{acting_identity, open_pool};
use crate::config::Config;
use crate::core::roster::RosterLogic;
use crate::errors::AppResult;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Staff { action } = &cli.command else {
        return Ok(());
    };

    let mut pool = open_pool(cfg)?;

    match action {
        StaffCmd::Add { email, name, role } => {
            let actor = acting_identity(cli)?;
            RosterLogic::add(&mut pool, cfg, &actor, email, name, role.as_deref())
        }
        StaffCmd::Edit {
            email,
            new_email,
            name,
            role,
        } => {
            let actor = acting_identity(cli)?;
            RosterLogic::edit(
                &mut pool,
                cfg,
                &actor,
                email,
                new_email.as_deref(),
                name.as_deref(),
                role.as_deref(),
            )
        }
        StaffCmd::Del { email } => {
            let actor = acting_identity(cli)?;
            RosterLogic::del(&mut pool, cfg, &actor, email)
        }
        StaffCmd::List => RosterLogic::list(&mut pool),
        StaffCmd::Watch { interval } => RosterLogic::watch(&mut pool, *interval),
    }
}
