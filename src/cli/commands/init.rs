use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Create the configuration file (unless in test mode) and the database.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;

    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    ttlog(&pool.conn, "init", "", "database initialized")?;

    success("barshift is ready.");
    Ok(())
}
