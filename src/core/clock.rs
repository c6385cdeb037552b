//! Clock orchestration: gate → engine transition → store write(s).
//!
//! The engine itself is pure (`core::shift`); this layer owns the store
//! round-trips. Writes target a single staff row each, so a failed write
//! leaves the observable session state unchanged.

use crate::config::Config;
use crate::core::access::{Action, authorize, authorize_clock};
use crate::core::roles::resolve_actor;
use crate::core::shift;
use crate::db::db_utils::with_write_retry;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{
    find_staff_by_email, insert_work_log, last_work_log_for, update_session,
};
use crate::errors::{AppError, AppResult};
use crate::models::session::ShiftState;
use crate::models::staff::StaffMember;
use crate::ui::messages::{info, success, warning};
use crate::utils::time::fmt_ts;
use crate::utils::mins2readable;
use chrono::Utc;

pub struct ClockLogic;

fn acting_email(actor: &str) -> AppResult<String> {
    StaffMember::normalize_email(actor).ok_or_else(|| AppError::InvalidEmail(actor.to_string()))
}

/// Authorize a clock transition and load the target staff row.
fn gate(pool: &DbPool, cfg: &Config, actor: &str, target: &str) -> AppResult<StaffMember> {
    let tier = resolve_actor(pool, cfg, actor)?;
    if !authorize_clock(tier, actor, target) {
        return Err(AppError::Unauthorized);
    }
    find_staff_by_email(&pool.conn, target)?
        .ok_or_else(|| AppError::UnknownStaff(target.to_string()))
}

impl ClockLogic {
    pub fn clock_in(
        pool: &mut DbPool,
        cfg: &Config,
        actor: &str,
        target: Option<&str>,
    ) -> AppResult<()> {
        let actor = acting_email(actor)?;
        let target = target.map(str::to_lowercase).unwrap_or_else(|| actor.clone());
        gate(pool, cfg, &actor, &target)?;

        // The store has no document locks. Re-read the row immediately
        // before writing to narrow the window of two racing starts.
        let fresh = find_staff_by_email(&pool.conn, &target)?
            .ok_or_else(|| AppError::UnknownStaff(target.clone()))?;
        let now = Utc::now();
        let next = shift::start(&fresh.session, now)?;

        with_write_retry(|| update_session(&pool.conn, fresh.id, &next))?;
        ttlog(&pool.conn, "clock_in", &target, &fmt_ts(&now))?;
        success(format!("Shift started for {} at {}.", fresh.name, fmt_ts(&now)));
        Ok(())
    }

    pub fn clock_pause(
        pool: &mut DbPool,
        cfg: &Config,
        actor: &str,
        target: Option<&str>,
    ) -> AppResult<()> {
        let actor = acting_email(actor)?;
        let target = target.map(str::to_lowercase).unwrap_or_else(|| actor.clone());
        let member = gate(pool, cfg, &actor, &target)?;

        let now = Utc::now();
        let next = shift::pause(&member.session, now)?;

        with_write_retry(|| update_session(&pool.conn, member.id, &next))?;
        ttlog(&pool.conn, "clock_pause", &target, &fmt_ts(&now))?;
        success(format!("Shift paused for {}.", member.name));
        Ok(())
    }

    pub fn clock_resume(
        pool: &mut DbPool,
        cfg: &Config,
        actor: &str,
        target: Option<&str>,
    ) -> AppResult<()> {
        let actor = acting_email(actor)?;
        let target = target.map(str::to_lowercase).unwrap_or_else(|| actor.clone());
        let member = gate(pool, cfg, &actor, &target)?;

        let now = Utc::now();
        let next = shift::resume(&member.session, now)?;

        with_write_retry(|| update_session(&pool.conn, member.id, &next))?;
        ttlog(&pool.conn, "clock_resume", &target, &fmt_ts(&now))?;

        if let ShiftState::Active { paused_minutes, .. } = next {
            success(format!(
                "Shift resumed for {} ({} paused so far).",
                member.name,
                mins2readable(paused_minutes)
            ));
        }
        Ok(())
    }

    /// Finish is two independent writes (append log, clear session) with
    /// no transaction across them; an interruption in between is detected
    /// lazily by `status` and resolved by an explicit finish, never by
    /// discarding worked time.
    pub fn clock_out(
        pool: &mut DbPool,
        cfg: &Config,
        actor: &str,
        target: Option<&str>,
    ) -> AppResult<()> {
        let actor = acting_email(actor)?;
        let target = target.map(str::to_lowercase).unwrap_or_else(|| actor.clone());
        let member = gate(pool, cfg, &actor, &target)?;

        let now = Utc::now();
        let closed = shift::finish(&member.session, now)?;

        with_write_retry(|| {
            insert_work_log(
                &pool.conn,
                member.id,
                &member.name,
                &closed.start,
                &closed.end,
                closed.duration_minutes,
                closed.paused_minutes,
            )
        })?;
        with_write_retry(|| update_session(&pool.conn, member.id, &ShiftState::Off))?;

        ttlog(
            &pool.conn,
            "clock_out",
            &target,
            &format!(
                "worked {} / paused {}",
                mins2readable(closed.duration_minutes),
                mins2readable(closed.paused_minutes)
            ),
        )?;
        success(format!(
            "Shift finished for {}: {} worked, {} paused.",
            member.name,
            mins2readable(closed.duration_minutes),
            mins2readable(closed.paused_minutes)
        ));
        Ok(())
    }

    /// Show the caller's session state. Viewing someone else's requires
    /// the shift-history tier.
    ///
    /// Elapsed figures shown here are derived client-side and are
    /// display-only; the authoritative numbers are computed at finish.
    pub fn status(
        pool: &mut DbPool,
        cfg: &Config,
        actor: &str,
        target: Option<&str>,
    ) -> AppResult<()> {
        let actor = acting_email(actor)?;
        let target = target.map(str::to_lowercase).unwrap_or_else(|| actor.clone());

        if target == actor {
            let tier = resolve_actor(pool, cfg, &actor)?;
            if !authorize(tier, Action::ClockSelf) {
                return Err(AppError::Unauthorized);
            }
        } else {
            let tier = resolve_actor(pool, cfg, &actor)?;
            if !authorize(tier, Action::ViewShiftHistory) {
                return Err(AppError::Unauthorized);
            }
        }

        let member = find_staff_by_email(&pool.conn, &target)?
            .ok_or_else(|| AppError::UnknownStaff(target.clone()))?;

        let now = Utc::now();
        match &member.session {
            ShiftState::Off => {
                info(format!("{} has no open session.", member.name));
                return Ok(());
            }
            ShiftState::Active {
                start,
                paused_minutes,
            } => {
                let worked = (shift::round_minutes(now - *start) - paused_minutes).max(0);
                info(format!(
                    "{} is on shift since {} (~{} worked, {} paused).",
                    member.name,
                    fmt_ts(start),
                    mins2readable(worked),
                    mins2readable(*paused_minutes)
                ));
            }
            ShiftState::Paused {
                start,
                paused_minutes,
                pause_start,
            } => {
                info(format!(
                    "{} is on a break since {} (shift started {}, {} paused before this break).",
                    member.name,
                    fmt_ts(pause_start),
                    fmt_ts(start),
                    mins2readable(*paused_minutes)
                ));
            }
        }

        // Interrupted-finish detection: a work log recorded at or after
        // this session's start means the log write landed but the session
        // was never cleared.
        if let Some(session_start) = member.session.start()
            && let Some(last) = last_work_log_for(&pool.conn, member.id)?
            && last.start_time >= session_start
        {
            warning(
                "A finished shift is already on record for this session. \
                 The open session is likely left over from an interrupted \
                 finish; close it with 'barshift clock out'.",
            );
        } else if !member.session.is_off() {
            info("Use 'barshift clock out' to finish, or continue working.");
        }

        Ok(())
    }
}
