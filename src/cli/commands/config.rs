use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::staff::StaffMember;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let yaml =
                serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
            print!("{yaml}");
            return Ok(());
        }

        if *check {
            let mut problems = 0;

            if cfg.database.trim().is_empty() {
                warning("database path is empty");
                problems += 1;
            }
            if cfg.bootstrap_owners.is_empty() {
                warning("bootstrap_owners is empty: nobody is guaranteed owner access");
                problems += 1;
            }
            for email in cfg.bootstrap_owners.iter().chain(&cfg.bootstrap_managers) {
                if StaffMember::normalize_email(email).is_none() {
                    warning(format!("bootstrap entry '{email}' is not a valid email"));
                    problems += 1;
                }
            }

            if problems == 0 {
                success("Configuration looks good.");
            }
            return Ok(());
        }

        return Err(AppError::Config(
            "nothing to do: specify --print or --check".into(),
        ));
    }
    Ok(())
}
