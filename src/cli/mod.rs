pub mod commands;
pub mod parser;

use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use parser::Cli;

/// The verified email of the acting identity. The login provider is an
/// external collaborator; the CLI trusts `--user` / $BARSHIFT_USER the
/// same way the panel trusts a completed login.
pub fn acting_identity(cli: &Cli) -> AppResult<String> {
    cli.user
        .clone()
        .or_else(|| std::env::var("BARSHIFT_USER").ok())
        .filter(|s| !s.trim().is_empty())
        .ok_or(AppError::MissingIdentity)
}

/// Open the configured database, making sure the schema is current.
pub fn open_pool(cfg: &Config) -> AppResult<DbPool> {
    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    Ok(pool)
}
