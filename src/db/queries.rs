//! Row mapping and CRUD over the four collections.
//!
//! Every collection read returns fully decoded model values; a staff row
//! whose session columns are inconsistent fails the read instead of
//! producing a half-valid state.

use crate::errors::{AppError, AppResult};
use crate::models::custom_role::{CustomRole, RoleLevel};
use crate::models::rating::RatingStats;
use crate::models::session::{SessionColumns, ShiftState};
use crate::models::staff::StaffMember;
use crate::models::work_log::WorkLog;
use crate::utils::period::period_condition;
use crate::utils::time;
use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

// ---------------------------------------------------------------------
// staff_members
// ---------------------------------------------------------------------

pub fn map_staff_row(row: &Row) -> Result<StaffMember> {
    let email: String = row.get("email")?;

    let cols = SessionColumns {
        session_start: row.get("session_start")?,
        session_status: row.get("session_status")?,
        pause_start: row.get("pause_start")?,
        paused_minutes: row.get("paused_minutes")?,
    };

    let session = ShiftState::from_columns(&email, &cols).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(StaffMember {
        id: row.get("id")?,
        email,
        name: row.get("name")?,
        role: row.get("role")?,
        session,
        created_at: row.get("created_at")?,
    })
}

pub fn load_staff(conn: &Connection) -> AppResult<Vec<StaffMember>> {
    let mut stmt = conn.prepare("SELECT * FROM staff_members ORDER BY name ASC")?;
    let rows = stmt.query_map([], map_staff_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn find_staff_by_email(conn: &Connection, email: &str) -> AppResult<Option<StaffMember>> {
    let mut stmt = conn.prepare("SELECT * FROM staff_members WHERE email = ?1")?;
    let found = stmt
        .query_row([email.to_lowercase()], map_staff_row)
        .optional()?;
    Ok(found)
}

pub fn insert_staff(conn: &Connection, email: &str, name: &str, role: &str) -> AppResult<i64> {
    if find_staff_by_email(conn, email)?.is_some() {
        return Err(AppError::DuplicateStaff(email.to_string()));
    }

    conn.execute(
        "INSERT INTO staff_members (email, name, role, paused_minutes, created_at)
         VALUES (?1, ?2, ?3, 0, ?4)",
        params![email, name, role, time::fmt_ts(&Utc::now())],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Update a roster entry. A new email must not collide with another
/// staff member's; rebinding keeps the row id, so work_logs follow.
pub fn update_staff(
    conn: &Connection,
    email: &str,
    new_email: Option<&str>,
    name: Option<&str>,
    role: Option<&str>,
) -> AppResult<()> {
    let existing = find_staff_by_email(conn, email)?
        .ok_or_else(|| AppError::UnknownStaff(email.to_string()))?;

    if let Some(candidate) = new_email
        && candidate != existing.email
        && find_staff_by_email(conn, candidate)?.is_some()
    {
        return Err(AppError::DuplicateStaff(candidate.to_string()));
    }

    conn.execute(
        "UPDATE staff_members SET email = ?1, name = ?2, role = ?3 WHERE id = ?4",
        params![
            new_email.unwrap_or(&existing.email),
            name.unwrap_or(&existing.name),
            role.unwrap_or(&existing.role),
            existing.id
        ],
    )?;
    Ok(())
}

/// Remove a staff member. Their work_logs rows are left untouched: the
/// history keeps the denormalized name and id.
pub fn delete_staff(conn: &Connection, email: &str) -> AppResult<()> {
    let n = conn.execute(
        "DELETE FROM staff_members WHERE email = ?1",
        [email.to_lowercase()],
    )?;
    if n == 0 {
        return Err(AppError::UnknownStaff(email.to_string()));
    }
    Ok(())
}

/// Overwrite the embedded session columns of one staff row.
/// This is the only mutation the shift engine performs on the roster.
pub fn update_session(conn: &Connection, staff_id: i64, state: &ShiftState) -> AppResult<()> {
    let cols = state.to_columns();
    conn.execute(
        "UPDATE staff_members
         SET session_start = ?1, session_status = ?2,
             pause_start = ?3, paused_minutes = ?4
         WHERE id = ?5",
        params![
            cols.session_start,
            cols.session_status,
            cols.pause_start,
            cols.paused_minutes,
            staff_id
        ],
    )?;
    Ok(())
}

// ---------------------------------------------------------------------
// work_logs
// ---------------------------------------------------------------------

pub fn map_log_row(row: &Row) -> Result<WorkLog> {
    let start_raw: String = row.get("start_time")?;
    let end_raw: String = row.get("end_time")?;

    let bad_ts = |s: &str| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::Other(format!("unreadable timestamp: {s}"))),
        )
    };

    Ok(WorkLog {
        id: row.get("id")?,
        staff_id: row.get("staff_id")?,
        staff_name: row.get("staff_name")?,
        start_time: time::parse_ts(&start_raw).ok_or_else(|| bad_ts(&start_raw))?,
        end_time: time::parse_ts(&end_raw).ok_or_else(|| bad_ts(&end_raw))?,
        duration_minutes: row.get("duration_minutes")?,
        paused_minutes: row.get("paused_minutes")?,
    })
}

pub fn insert_work_log(
    conn: &Connection,
    staff_id: i64,
    staff_name: &str,
    start: &chrono::DateTime<Utc>,
    end: &chrono::DateTime<Utc>,
    duration_minutes: i64,
    paused_minutes: i64,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO work_logs (staff_id, staff_name, start_time, end_time, duration_minutes, paused_minutes)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            staff_id,
            staff_name,
            time::fmt_ts(start),
            time::fmt_ts(end),
            duration_minutes,
            paused_minutes
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_work_logs(
    conn: &Connection,
    period: Option<&str>,
    staff_id: Option<i64>,
) -> AppResult<Vec<WorkLog>> {
    let mut sql = "SELECT * FROM work_logs".to_string();
    let mut conditions: Vec<String> = Vec::new();
    let mut str_params: Vec<String> = Vec::new();

    if let Some(p) = period {
        let (cond, params) = period_condition("start_time", p)?;
        conditions.push(cond);
        str_params.extend(params);
    }
    if let Some(id) = staff_id {
        conditions.push(format!("staff_id = {id}"));
    }
    if !conditions.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&conditions.join(" AND "));
    }
    sql.push_str(" ORDER BY start_time ASC");

    let mut stmt = conn.prepare(&sql)?;
    let params_ref: Vec<&dyn rusqlite::ToSql> =
        str_params.iter().map(|s| s as &dyn rusqlite::ToSql).collect();
    let rows = stmt.query_map(rusqlite::params_from_iter(params_ref), map_log_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Most recent finished shift for one staff member, if any.
/// Used by the stale-session detection after an interrupted finish.
pub fn last_work_log_for(conn: &Connection, staff_id: i64) -> AppResult<Option<WorkLog>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM work_logs WHERE staff_id = ?1
         ORDER BY start_time DESC LIMIT 1",
    )?;
    let found = stmt.query_row([staff_id], map_log_row).optional()?;
    Ok(found)
}

// ---------------------------------------------------------------------
// custom_roles
// ---------------------------------------------------------------------

pub fn map_role_row(row: &Row) -> Result<CustomRole> {
    let level_raw: String = row.get("level")?;
    let level = RoleLevel::from_db_str(&level_raw).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidRoleLevel(level_raw.clone())),
        )
    })?;

    Ok(CustomRole {
        id: row.get("id")?,
        name: row.get("name")?,
        level,
        created_at: row.get("created_at")?,
    })
}

pub fn load_custom_roles(conn: &Connection) -> AppResult<Vec<CustomRole>> {
    let mut stmt = conn.prepare("SELECT * FROM custom_roles ORDER BY name ASC")?;
    let rows = stmt.query_map([], map_role_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_custom_role(conn: &Connection, name: &str, level: RoleLevel) -> AppResult<i64> {
    let exists: Option<i64> = conn
        .query_row(
            "SELECT id FROM custom_roles WHERE name = ?1",
            [name],
            |row| row.get(0),
        )
        .optional()?;
    if exists.is_some() {
        return Err(AppError::DuplicateRole(name.to_string()));
    }

    conn.execute(
        "INSERT INTO custom_roles (name, level, created_at) VALUES (?1, ?2, ?3)",
        params![name, level.to_db_str(), time::fmt_ts(&Utc::now())],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn delete_custom_role(conn: &Connection, name: &str) -> AppResult<()> {
    let n = conn.execute("DELETE FROM custom_roles WHERE name = ?1", [name])?;
    if n == 0 {
        return Err(AppError::UnknownRole(name.to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------
// ratings
// ---------------------------------------------------------------------

pub fn insert_rating(conn: &Connection, staff_id: i64, score: u8) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO ratings (staff_id, score, created_at) VALUES (?1, ?2, ?3)",
        params![staff_id, score, time::fmt_ts(&Utc::now())],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Per-staff average and count. Ratings for removed staff members are
/// kept and shown under a placeholder name.
pub fn load_rating_stats(conn: &Connection) -> AppResult<Vec<RatingStats>> {
    let mut stmt = conn.prepare(
        "SELECT r.staff_id,
                COALESCE(s.name, '(removed)') AS staff_name,
                AVG(r.score) AS average,
                COUNT(*) AS cnt
         FROM ratings r
         LEFT JOIN staff_members s ON s.id = r.staff_id
         GROUP BY r.staff_id
         ORDER BY average DESC, staff_name ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(RatingStats {
            staff_id: row.get("staff_id")?,
            staff_name: row.get("staff_name")?,
            average: row.get("average")?,
            count: row.get("cnt")?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------------------------------------------------
// internal log
// ---------------------------------------------------------------------

pub fn load_audit(conn: &Connection) -> AppResult<Vec<(i64, String, String, String, String)>> {
    let mut stmt =
        conn.prepare("SELECT id, date, operation, target, message FROM log ORDER BY id ASC")?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get(0)?,
            row.get(1)?,
            row.get(2)?,
            row.get(3)?,
            row.get(4)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
