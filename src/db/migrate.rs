//! Schema migration engine.
//!
//! The schema version lives in `PRAGMA user_version`; each migration
//! step is idempotent and recorded in the internal log table.

use crate::errors::{AppError, AppResult};
use rusqlite::Connection;

const SCHEMA_VERSION: i32 = 1;

fn current_version(conn: &Connection) -> AppResult<i32> {
    let v: i32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    Ok(v)
}

fn set_version(conn: &Connection, v: i32) -> AppResult<()> {
    // PRAGMA does not accept bound parameters.
    conn.execute_batch(&format!("PRAGMA user_version = {v}"))?;
    Ok(())
}

/// v1: full initial schema — the four collections plus the audit log.
fn migrate_to_v1(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS staff_members (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            email          TEXT NOT NULL UNIQUE,
            name           TEXT NOT NULL,
            role           TEXT NOT NULL DEFAULT 'Staff',
            session_start  TEXT,
            session_status TEXT CHECK(session_status IN ('active','paused')),
            pause_start    TEXT,
            paused_minutes INTEGER NOT NULL DEFAULT 0,
            created_at     TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS work_logs (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            staff_id         INTEGER NOT NULL,
            staff_name       TEXT NOT NULL,
            start_time       TEXT NOT NULL,
            end_time         TEXT NOT NULL,
            duration_minutes INTEGER NOT NULL,
            paused_minutes   INTEGER NOT NULL DEFAULT 0
        );

        CREATE INDEX IF NOT EXISTS idx_work_logs_staff ON work_logs(staff_id);
        CREATE INDEX IF NOT EXISTS idx_work_logs_start ON work_logs(start_time);

        CREATE TABLE IF NOT EXISTS custom_roles (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            name       TEXT NOT NULL UNIQUE,
            level      TEXT NOT NULL CHECK(level IN ('staff','gerente','dueno')),
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS ratings (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            staff_id   INTEGER NOT NULL,
            score      INTEGER NOT NULL CHECK(score BETWEEN 1 AND 5),
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Run all migrations newer than the stored schema version.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    let mut v = current_version(conn)?;

    if v > SCHEMA_VERSION {
        return Err(AppError::Migration(format!(
            "database schema version {v} is newer than this binary supports ({SCHEMA_VERSION})"
        )));
    }

    while v < SCHEMA_VERSION {
        let next = v + 1;
        match next {
            1 => migrate_to_v1(conn)?,
            other => {
                return Err(AppError::Migration(format!(
                    "no migration step defined for version {other}"
                )));
            }
        }
        set_version(conn, next)?;
        crate::db::log::ttlog(
            conn,
            "migration_applied",
            &format!("v{next}"),
            "schema migrated",
        )?;
        v = next;
    }

    Ok(())
}
