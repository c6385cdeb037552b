//! barshift library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod sync;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Whoami => cli::commands::whoami::handle(cli, cfg),
        Commands::Staff { .. } => cli::commands::staff::handle(cli, cfg),
        Commands::Role { .. } => cli::commands::role::handle(cli, cfg),
        Commands::Clock { .. } => cli::commands::clock::handle(cli, cfg),
        Commands::Logs { .. } => cli::commands::logs::handle(cli, cfg),
        Commands::Export { .. } => cli::commands::export::handle(cli, cfg),
        Commands::Rate { .. } => cli::commands::rate::handle(cli, cfg),
        Commands::Log { .. } => cli::commands::log::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Test mode never reads the operator's real config file; everything
    // comes from defaults plus command-line overrides.
    let mut cfg = if cli.test {
        Config::default()
    } else {
        Config::load()
    };

    if let Some(custom_db) = &cli.db {
        cfg.database = utils::path::expand_tilde(custom_db)
            .to_string_lossy()
            .to_string();
    }

    dispatch(&cli, &cfg)
}
