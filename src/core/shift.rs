//! Shift session state machine.
//!
//! Pure transition functions over `ShiftState`; all store I/O lives in
//! the clock orchestration layer. Preconditions are contractual: an
//! illegal transition returns `InvalidTransition` and the caller must
//! not write anything.
//!
//! Arithmetic is done in whole minutes, rounded at each pause-closing
//! event rather than only at finish, so a shift with many pause/resume
//! cycles accumulates the same way regardless of how often it toggles.

use crate::errors::{AppError, AppResult};
use crate::models::session::ShiftState;
use chrono::{DateTime, Duration, Utc};

/// Result of a Finish transition: everything a WorkLog needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosedShift {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Net worked minutes. Clamped at zero: a skewed clock must not trap
    /// the worker in an un-closeable session.
    pub duration_minutes: i64,
    /// All paused minutes, including a pause still open at finish.
    pub paused_minutes: i64,
}

/// Round a span to whole minutes. Negative spans (clock skew) count as 0.
pub fn round_minutes(d: Duration) -> i64 {
    let secs = d.num_seconds();
    if secs <= 0 { 0 } else { (secs + 30) / 60 }
}

/// Minutes of a completed pause interval. Rounded to the nearest minute,
/// but never 0 when any time at all elapsed: a 20-second pause must not
/// be silently dropped.
fn pause_interval_minutes(pause_start: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let secs = (now - pause_start).num_seconds();
    if secs <= 0 {
        0
    } else {
        round_minutes(now - pause_start).max(1)
    }
}

/// NoSession → Active. Rejected while any session is open: silently
/// overwriting an open session would lose unaccounted time.
pub fn start(state: &ShiftState, now: DateTime<Utc>) -> AppResult<ShiftState> {
    match state {
        ShiftState::Off => Ok(ShiftState::Active {
            start: now,
            paused_minutes: 0,
        }),
        ShiftState::Active { .. } | ShiftState::Paused { .. } => Err(AppError::InvalidTransition(
            "a session is already open; finish it before starting a new one".into(),
        )),
    }
}

/// Active → Paused. Does not touch the accumulated pause total yet.
pub fn pause(state: &ShiftState, now: DateTime<Utc>) -> AppResult<ShiftState> {
    match state {
        ShiftState::Active {
            start,
            paused_minutes,
        } => Ok(ShiftState::Paused {
            start: *start,
            paused_minutes: *paused_minutes,
            pause_start: now,
        }),
        ShiftState::Off => Err(AppError::InvalidTransition(
            "no open session to pause".into(),
        )),
        ShiftState::Paused { .. } => Err(AppError::InvalidTransition(
            "the session is already paused".into(),
        )),
    }
}

/// Paused → Active, folding the closed pause interval into the total.
pub fn resume(state: &ShiftState, now: DateTime<Utc>) -> AppResult<ShiftState> {
    match state {
        ShiftState::Paused {
            start,
            paused_minutes,
            pause_start,
        } => Ok(ShiftState::Active {
            start: *start,
            paused_minutes: paused_minutes + pause_interval_minutes(*pause_start, now),
        }),
        ShiftState::Off => Err(AppError::InvalidTransition(
            "no open session to resume".into(),
        )),
        ShiftState::Active { .. } => Err(AppError::InvalidTransition(
            "the session is not paused".into(),
        )),
    }
}

/// Active | Paused → NoSession, yielding the figures for the WorkLog.
/// A pause still open at finish is folded with the same rounding rule
/// Resume uses.
pub fn finish(state: &ShiftState, now: DateTime<Utc>) -> AppResult<ClosedShift> {
    let (start, paused) = match state {
        ShiftState::Active {
            start,
            paused_minutes,
        } => (*start, *paused_minutes),
        ShiftState::Paused {
            start,
            paused_minutes,
            pause_start,
        } => (
            *start,
            paused_minutes + pause_interval_minutes(*pause_start, now),
        ),
        ShiftState::Off => {
            return Err(AppError::InvalidTransition(
                "no open session to finish".into(),
            ));
        }
    };

    let total_elapsed = round_minutes(now - start);
    Ok(ClosedShift {
        start,
        end: now,
        duration_minutes: (total_elapsed - paused).max(0),
        paused_minutes: paused,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t(min: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 5, 18, 0, 0).unwrap() + Duration::minutes(min)
    }

    #[test]
    fn full_cycle_accounting_invariant() {
        // Start → (Pause → Resume) × N → Finish:
        // duration + paused always equals the rounded total span.
        for n in 0..5 {
            let mut st = start(&ShiftState::Off, t(0)).unwrap();
            let mut clock = 0;
            for _ in 0..n {
                clock += 25;
                st = pause(&st, t(clock)).unwrap();
                clock += 7;
                st = resume(&st, t(clock)).unwrap();
            }
            clock += 40;
            let closed = finish(&st, t(clock)).unwrap();

            assert_eq!(closed.paused_minutes, 7 * n);
            assert_eq!(
                closed.duration_minutes + closed.paused_minutes,
                round_minutes(closed.end - closed.start)
            );
        }
    }

    #[test]
    fn start_rejected_while_session_open() {
        let active = start(&ShiftState::Off, t(0)).unwrap();
        assert!(matches!(
            start(&active, t(5)),
            Err(AppError::InvalidTransition(_))
        ));

        let paused = pause(&active, t(5)).unwrap();
        assert!(matches!(
            start(&paused, t(6)),
            Err(AppError::InvalidTransition(_))
        ));
    }

    #[test]
    fn pause_and_resume_guards() {
        assert!(pause(&ShiftState::Off, t(0)).is_err());
        assert!(resume(&ShiftState::Off, t(0)).is_err());

        let active = start(&ShiftState::Off, t(0)).unwrap();
        assert!(resume(&active, t(1)).is_err());

        let paused = pause(&active, t(1)).unwrap();
        assert!(pause(&paused, t(2)).is_err());
    }

    #[test]
    fn finish_while_paused_folds_open_pause() {
        // Start at T+0, pause at T+10, finish at T+15:
        // paused = 5, worked = 10.
        let st = start(&ShiftState::Off, t(0)).unwrap();
        let st = pause(&st, t(10)).unwrap();
        let closed = finish(&st, t(15)).unwrap();

        assert_eq!(closed.paused_minutes, 5);
        assert_eq!(closed.duration_minutes, 10);
        assert_eq!(closed.start, t(0));
        assert_eq!(closed.end, t(15));
    }

    #[test]
    fn short_pause_counts_at_least_one_minute() {
        let st = start(&ShiftState::Off, t(0)).unwrap();
        let st = pause(&st, t(10)).unwrap();
        // resume 20 seconds later
        let st = resume(&st, t(10) + Duration::seconds(20)).unwrap();
        match st {
            ShiftState::Active { paused_minutes, .. } => assert_eq!(paused_minutes, 1),
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[test]
    fn zero_length_pause_is_zero() {
        let st = start(&ShiftState::Off, t(0)).unwrap();
        let st = pause(&st, t(10)).unwrap();
        let st = resume(&st, t(10)).unwrap();
        match st {
            ShiftState::Active { paused_minutes, .. } => assert_eq!(paused_minutes, 0),
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[test]
    fn clock_skew_clamps_duration_to_zero() {
        // Finish before start: duration 0, never negative.
        let st = start(&ShiftState::Off, t(10)).unwrap();
        let closed = finish(&st, t(5)).unwrap();
        assert_eq!(closed.duration_minutes, 0);
        assert_eq!(closed.paused_minutes, 0);

        // Paused longer than the whole span: still clamped.
        let st = start(&ShiftState::Off, t(0)).unwrap();
        let st = pause(&st, t(1)).unwrap();
        let st = resume(&st, t(50)).unwrap();
        let closed = finish(&st, t(40)).unwrap();
        assert_eq!(closed.duration_minutes, 0);
    }

    #[test]
    fn rounding_is_to_nearest_minute() {
        assert_eq!(round_minutes(Duration::seconds(29)), 0);
        assert_eq!(round_minutes(Duration::seconds(30)), 1);
        assert_eq!(round_minutes(Duration::seconds(89)), 1);
        assert_eq!(round_minutes(Duration::seconds(90)), 2);
        assert_eq!(round_minutes(Duration::seconds(-10)), 0);
    }

    #[test]
    fn finish_from_off_is_rejected() {
        assert!(matches!(
            finish(&ShiftState::Off, t(0)),
            Err(AppError::InvalidTransition(_))
        ));
    }
}
