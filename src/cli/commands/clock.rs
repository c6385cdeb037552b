use crate::cli::parser::{Cli, ClockCmd, Commands};
use crate::cli::{acting_identity, open_pool};
use crate::config::Config;
use crate::core::clock::ClockLogic;
use crate::errors::AppResult;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Clock { action } = &cli.command else {
        return Ok(());
    };

    let actor = acting_identity(cli)?;
    let mut pool = open_pool(cfg)?;

    match action {
        ClockCmd::In { staff } => ClockLogic::clock_in(&mut pool, cfg, &actor, staff.as_deref()),
        ClockCmd::Pause { staff } => {
            ClockLogic::clock_pause(&mut pool, cfg, &actor, staff.as_deref())
        }
        ClockCmd::Resume { staff } => {
            ClockLogic::clock_resume(&mut pool, cfg, &actor, staff.as_deref())
        }
        ClockCmd::Out { staff } => ClockLogic::clock_out(&mut pool, cfg, &actor, staff.as_deref()),
        ClockCmd::Status { staff } => ClockLogic::status(&mut pool, cfg, &actor, staff.as_deref()),
    }
}
