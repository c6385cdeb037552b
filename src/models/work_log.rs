use chrono::{DateTime, Utc};
use serde::Serialize;

/// Immutable record of one finished shift.
///
/// `staff_name` is denormalized at finish time so the history stays
/// readable after roster edits or deletions; `staff_id` is a plain
/// number, never a referential constraint.
///
/// Invariant: `duration_minutes = max(0, round(end − start) − paused_minutes)`.
#[derive(Debug, Clone, Serialize)]
pub struct WorkLog {
    pub id: i64,
    pub staff_id: i64,
    pub staff_name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Net worked minutes, paused intervals excluded.
    pub duration_minutes: i64,
    /// Total paused minutes, including a pause still open at finish.
    pub paused_minutes: i64,
}
