//! Time utilities: timestamp storage format and minute formatting.
//!
//! All instants are absolute UTC timestamps; minutes are the unit of
//! record. No time-zone conversion happens anywhere in the core.

use chrono::{DateTime, SecondsFormat, Utc};

/// Storage format for instants: RFC 3339, whole seconds, `Z` suffix.
/// Lexicographic order equals chronological order, which the period
/// filters rely on.
pub fn fmt_ts(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub fn parse_ts(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Human rendering of a minute count, e.g. "7h 45m" or "45m".
pub fn mins2readable(mins: i64) -> String {
    let m = mins.abs();
    let (h, r) = (m / 60, m % 60);
    let body = if h > 0 {
        format!("{h}h {r:02}m")
    } else {
        format!("{r}m")
    };
    if mins < 0 { format!("-{body}") } else { body }
}
