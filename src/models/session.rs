//! Clock session state for one staff member.
//!
//! The session is a sum type, not a nullable struct with a status string:
//! a `Paused` value cannot exist without its pause start, so the invariant
//! "status = paused ⇔ pause_start is set" holds by construction. The store
//! keeps the state as four nullable columns on `staff_members`; decoding a
//! row that violates the invariant is a hard error, never a repaired state.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};

pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_PAUSED: &str = "paused";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ShiftState {
    /// No open session. Initial and terminal state of every cycle.
    #[default]
    Off,
    Active {
        start: DateTime<Utc>,
        /// Minutes from *completed* pause intervals only.
        paused_minutes: i64,
    },
    Paused {
        start: DateTime<Utc>,
        paused_minutes: i64,
        pause_start: DateTime<Utc>,
    },
}

/// Raw session columns as stored on a `staff_members` row.
#[derive(Debug, Clone, Default)]
pub struct SessionColumns {
    pub session_start: Option<String>,
    pub session_status: Option<String>,
    pub pause_start: Option<String>,
    pub paused_minutes: i64,
}

impl ShiftState {
    pub fn is_off(&self) -> bool {
        matches!(self, ShiftState::Off)
    }

    /// Session start instant, if a session is open.
    pub fn start(&self) -> Option<DateTime<Utc>> {
        match self {
            ShiftState::Off => None,
            ShiftState::Active { start, .. } | ShiftState::Paused { start, .. } => Some(*start),
        }
    }

    /// Encode for a single-row UPDATE of the session columns.
    pub fn to_columns(&self) -> SessionColumns {
        match self {
            ShiftState::Off => SessionColumns::default(),
            ShiftState::Active {
                start,
                paused_minutes,
            } => SessionColumns {
                session_start: Some(crate::utils::time::fmt_ts(start)),
                session_status: Some(STATUS_ACTIVE.to_string()),
                pause_start: None,
                paused_minutes: *paused_minutes,
            },
            ShiftState::Paused {
                start,
                paused_minutes,
                pause_start,
            } => SessionColumns {
                session_start: Some(crate::utils::time::fmt_ts(start)),
                session_status: Some(STATUS_PAUSED.to_string()),
                pause_start: Some(crate::utils::time::fmt_ts(pause_start)),
                paused_minutes: *paused_minutes,
            },
        }
    }

    /// Decode the session columns of a staff row.
    ///
    /// `who` is only used in error messages (the staff email).
    pub fn from_columns(who: &str, cols: &SessionColumns) -> AppResult<Self> {
        let corrupt =
            |msg: &str| AppError::CorruptSession(who.to_string(), msg.to_string());

        let status = match cols.session_status.as_deref() {
            None => {
                if cols.session_start.is_some() || cols.pause_start.is_some() {
                    return Err(corrupt("session columns set without a status"));
                }
                return Ok(ShiftState::Off);
            }
            Some(s) => s,
        };

        let start_raw = cols
            .session_start
            .as_deref()
            .ok_or_else(|| corrupt("open session without a start time"))?;
        let start = crate::utils::time::parse_ts(start_raw)
            .ok_or_else(|| corrupt("unreadable session start time"))?;

        if cols.paused_minutes < 0 {
            return Err(corrupt("negative accumulated pause"));
        }

        match status {
            STATUS_ACTIVE => {
                if cols.pause_start.is_some() {
                    return Err(corrupt("active session with a pause start"));
                }
                Ok(ShiftState::Active {
                    start,
                    paused_minutes: cols.paused_minutes,
                })
            }
            STATUS_PAUSED => {
                let ps_raw = cols
                    .pause_start
                    .as_deref()
                    .ok_or_else(|| corrupt("paused session without a pause start"))?;
                let pause_start = crate::utils::time::parse_ts(ps_raw)
                    .ok_or_else(|| corrupt("unreadable pause start time"))?;
                Ok(ShiftState::Paused {
                    start,
                    paused_minutes: cols.paused_minutes,
                    pause_start,
                })
            }
            other => Err(corrupt(&format!("unknown session status '{other}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 5, 18, 0, 0).unwrap()
    }

    #[test]
    fn off_round_trips_through_columns() {
        let cols = ShiftState::Off.to_columns();
        assert!(cols.session_status.is_none());
        let back = ShiftState::from_columns("a@b.c", &cols).unwrap();
        assert_eq!(back, ShiftState::Off);
    }

    #[test]
    fn paused_round_trips_through_columns() {
        let st = ShiftState::Paused {
            start: t0(),
            paused_minutes: 12,
            pause_start: t0() + chrono::Duration::minutes(90),
        };
        let back = ShiftState::from_columns("a@b.c", &st.to_columns()).unwrap();
        assert_eq!(back, st);
    }

    #[test]
    fn paused_without_pause_start_is_corrupt() {
        let cols = SessionColumns {
            session_start: Some(crate::utils::time::fmt_ts(&t0())),
            session_status: Some(STATUS_PAUSED.to_string()),
            pause_start: None,
            paused_minutes: 0,
        };
        let err = ShiftState::from_columns("a@b.c", &cols).unwrap_err();
        assert!(matches!(err, AppError::CorruptSession(..)));
    }

    #[test]
    fn status_without_start_is_corrupt() {
        let cols = SessionColumns {
            session_start: None,
            session_status: Some(STATUS_ACTIVE.to_string()),
            pause_start: None,
            paused_minutes: 0,
        };
        assert!(ShiftState::from_columns("a@b.c", &cols).is_err());
    }

    #[test]
    fn stray_start_without_status_is_corrupt() {
        let cols = SessionColumns {
            session_start: Some(crate::utils::time::fmt_ts(&t0())),
            session_status: None,
            pause_start: None,
            paused_minutes: 0,
        };
        assert!(ShiftState::from_columns("a@b.c", &cols).is_err());
    }
}
