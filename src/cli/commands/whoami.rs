use crate::cli::parser::Cli;
use crate::cli::{acting_identity, open_pool};
use crate::config::Config;
use crate::core::roles::resolve_actor;
use crate::errors::AppResult;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let actor = acting_identity(cli)?;
    let pool = open_pool(cfg)?;

    let tier = resolve_actor(&pool, cfg, &actor)?;
    println!("{} → {}", actor.to_lowercase(), tier);
    Ok(())
}
