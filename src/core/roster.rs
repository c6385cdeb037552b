//! Roster administration: add/edit/delete staff members, list, watch.

use crate::config::Config;
use crate::core::access::{Action, authorize};
use crate::core::roles::resolve_actor;
use crate::db::db_utils::with_write_retry;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_staff, insert_staff, load_staff, update_staff};
use crate::errors::{AppError, AppResult};
use crate::models::session::ShiftState;
use crate::models::staff::{ROLE_STAFF, StaffMember};
use crate::sync::{SnapshotFeed, StoreFeed};
use crate::ui::messages::{info, success, warning};
use crate::utils::table::Table;

pub struct RosterLogic;

fn require(pool: &DbPool, cfg: &Config, actor: &str, action: Action) -> AppResult<()> {
    let tier = resolve_actor(pool, cfg, actor)?;
    if !authorize(tier, action) {
        return Err(AppError::Unauthorized);
    }
    Ok(())
}

fn session_cell(state: &ShiftState) -> String {
    match state {
        ShiftState::Off => "-".to_string(),
        ShiftState::Active { start, .. } => {
            format!("on shift since {}", crate::utils::time::fmt_ts(start))
        }
        ShiftState::Paused { pause_start, .. } => {
            format!("on break since {}", crate::utils::time::fmt_ts(pause_start))
        }
    }
}

fn render_roster(staff: &[StaffMember]) -> String {
    let mut table = Table::new(vec!["Name", "Email", "Role", "Session"]);
    for s in staff {
        table.add_row(vec![
            s.name.clone(),
            s.email.clone(),
            s.role.clone(),
            session_cell(&s.session),
        ]);
    }
    table.render()
}

impl RosterLogic {
    pub fn add(
        pool: &mut DbPool,
        cfg: &Config,
        actor: &str,
        email: &str,
        name: &str,
        role: Option<&str>,
    ) -> AppResult<()> {
        require(pool, cfg, actor, Action::AddStaff)?;

        let email = StaffMember::normalize_email(email)
            .ok_or_else(|| AppError::InvalidEmail(email.to_string()))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Other("staff name cannot be empty".into()));
        }
        let role = role.unwrap_or(ROLE_STAFF);

        with_write_retry(|| insert_staff(&pool.conn, &email, name, role))?;
        ttlog(&pool.conn, "staff_add", &email, role)?;
        success(format!("{} added to the roster as '{}'.", name, role));
        Ok(())
    }

    /// Edit a roster entry. `new_email` rebinds the identity join key;
    /// the staff member's shift history stays attached through the id.
    pub fn edit(
        pool: &mut DbPool,
        cfg: &Config,
        actor: &str,
        email: &str,
        new_email: Option<&str>,
        name: Option<&str>,
        role: Option<&str>,
    ) -> AppResult<()> {
        require(pool, cfg, actor, Action::EditStaff)?;

        if new_email.is_none() && name.is_none() && role.is_none() {
            return Err(AppError::Other(
                "nothing to do: specify --email, --name and/or --role".into(),
            ));
        }

        let email = StaffMember::normalize_email(email)
            .ok_or_else(|| AppError::InvalidEmail(email.to_string()))?;
        let new_email = match new_email {
            Some(raw) => Some(
                StaffMember::normalize_email(raw)
                    .ok_or_else(|| AppError::InvalidEmail(raw.to_string()))?,
            ),
            None => None,
        };

        with_write_retry(|| {
            update_staff(&pool.conn, &email, new_email.as_deref(), name, role)
        })?;
        ttlog(&pool.conn, "staff_edit", &email, "roster entry updated")?;
        success(format!("Roster entry for {} updated.", email));
        Ok(())
    }

    /// Removing a staff member never touches their shift history: the
    /// work_logs rows keep the denormalized name and id.
    pub fn del(pool: &mut DbPool, cfg: &Config, actor: &str, email: &str) -> AppResult<()> {
        require(pool, cfg, actor, Action::DeleteStaff)?;

        let email = email.to_lowercase();
        with_write_retry(|| delete_staff(&pool.conn, &email))?;
        ttlog(&pool.conn, "staff_del", &email, "removed from roster")?;
        success(format!("{} removed from the roster.", email));
        Ok(())
    }

    /// Listing is ungated: the public menu already shows staff members
    /// for ratings and tips.
    pub fn list(pool: &mut DbPool) -> AppResult<()> {
        let staff = load_staff(&pool.conn)?;
        if staff.is_empty() {
            println!("The roster is empty.");
            return Ok(());
        }
        print!("{}", render_roster(&staff));
        Ok(())
    }

    /// Live roster view: re-renders whenever another session commits a
    /// change to the store. Runs until interrupted.
    pub fn watch(pool: &mut DbPool, interval_secs: u64) -> AppResult<()> {
        info("Watching the roster. Press Ctrl-C to stop.");

        let mut feed = StoreFeed::new(pool);
        loop {
            match feed.poll()? {
                Some(snapshot) => {
                    println!();
                    if snapshot.staff.is_empty() {
                        warning("The roster is empty.");
                    } else {
                        print!("{}", render_roster(&snapshot.staff));
                    }
                }
                None => {
                    std::thread::sleep(std::time::Duration::from_secs(interval_secs.max(1)));
                }
            }
        }
    }
}
