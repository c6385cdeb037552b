//! Shift history: listing and export (manager and above).

use crate::config::Config;
use crate::core::access::{Action, authorize};
use crate::core::roles::resolve_actor;
use crate::db::pool::DbPool;
use crate::db::queries::{find_staff_by_email, load_work_logs};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::models::work_log::WorkLog;
use crate::ui::messages::success;
use crate::utils::mins2readable;
use crate::utils::table::Table;
use crate::utils::time::fmt_ts;

pub struct HistoryLogic;

fn load_gated(
    pool: &DbPool,
    cfg: &Config,
    actor: &str,
    period: Option<&str>,
    staff: Option<&str>,
) -> AppResult<Vec<WorkLog>> {
    let tier = resolve_actor(pool, cfg, actor)?;
    if !authorize(tier, Action::ViewShiftHistory) {
        return Err(AppError::Unauthorized);
    }

    let staff_id = match staff {
        Some(email) => Some(
            find_staff_by_email(&pool.conn, email)?
                .ok_or_else(|| AppError::UnknownStaff(email.to_string()))?
                .id,
        ),
        None => None,
    };

    load_work_logs(&pool.conn, period, staff_id)
}

impl HistoryLogic {
    pub fn list(
        pool: &mut DbPool,
        cfg: &Config,
        actor: &str,
        period: Option<&str>,
        staff: Option<&str>,
    ) -> AppResult<()> {
        let logs = load_gated(pool, cfg, actor, period, staff)?;
        if logs.is_empty() {
            println!("No finished shifts for the given filters.");
            return Ok(());
        }

        let mut table = Table::new(vec!["Staff", "Start", "End", "Worked", "Paused"]);
        let mut total_worked = 0;
        for log in &logs {
            total_worked += log.duration_minutes;
            table.add_row(vec![
                log.staff_name.clone(),
                fmt_ts(&log.start_time),
                fmt_ts(&log.end_time),
                mins2readable(log.duration_minutes),
                mins2readable(log.paused_minutes),
            ]);
        }
        print!("{}", table.render());
        println!(
            "\n{} shifts, {} worked in total.",
            logs.len(),
            mins2readable(total_worked)
        );
        Ok(())
    }

    pub fn export(
        pool: &mut DbPool,
        cfg: &Config,
        actor: &str,
        format: ExportFormat,
        file: &str,
        period: Option<&str>,
        force: bool,
    ) -> AppResult<()> {
        let logs = load_gated(pool, cfg, actor, period, None)?;

        let path = crate::utils::path::expand_tilde(file);
        if path.exists() && !force {
            return Err(AppError::Export(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        match format {
            ExportFormat::Csv => crate::export::csv::write_work_logs(&path, &logs)?,
            ExportFormat::Json => crate::export::json::write_work_logs(&path, &logs)?,
        }

        success(format!(
            "Exported {} shifts to {}.",
            logs.len(),
            path.display()
        ));
        Ok(())
    }
}
