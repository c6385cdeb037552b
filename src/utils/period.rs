//! Period filters over RFC 3339 timestamp columns.
//!
//! Accepted forms: "2026" (year), "2026-03" (month), "2026-03-05" (day),
//! and "start:end" ranges of any single form with matching granularity.
//! The SQL compares `substr(col, 1, n)` prefixes, which is correct because
//! the storage format sorts lexicographically.

use crate::errors::{AppError, AppResult};

/// Accepts exactly "YYYY", "YYYY-MM" or "YYYY-MM-DD".
fn prefix_len(p: &str) -> Option<usize> {
    let b = p.as_bytes();
    let digits = |range: std::ops::Range<usize>| b[range].iter().all(u8::is_ascii_digit);

    match b.len() {
        4 if digits(0..4) => Some(4),
        7 if digits(0..4) && b[4] == b'-' && digits(5..7) => Some(7),
        10 if digits(0..4) && b[4] == b'-' && digits(5..7) && b[7] == b'-' && digits(8..10) => {
            Some(10)
        }
        _ => None,
    }
}

/// Build a SQL condition over `col` for the given period expression.
/// Returns the condition text and its positional parameters.
pub fn period_condition(col: &str, period: &str) -> AppResult<(String, Vec<String>)> {
    let invalid = || AppError::InvalidPeriod(period.to_string());

    if let Some((start_raw, end_raw)) = period.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();
        let n = prefix_len(start).ok_or_else(invalid)?;
        if prefix_len(end) != Some(n) {
            return Err(invalid());
        }
        return Ok((
            format!("substr({col}, 1, {n}) >= ? AND substr({col}, 1, {n}) <= ?"),
            vec![start.to_string(), end.to_string()],
        ));
    }

    let p = period.trim();
    let n = prefix_len(p).ok_or_else(invalid)?;
    Ok((
        format!("substr({col}, 1, {n}) = ?"),
        vec![p.to_string()],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_day() {
        let (cond, params) = period_condition("start_time", "2026-03-05").unwrap();
        assert_eq!(cond, "substr(start_time, 1, 10) = ?");
        assert_eq!(params, vec!["2026-03-05"]);
    }

    #[test]
    fn month_range() {
        let (cond, params) = period_condition("start_time", "2026-01:2026-03").unwrap();
        assert!(cond.contains(">= ?"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn mismatched_range_rejected() {
        assert!(period_condition("start_time", "2026:2026-03").is_err());
        assert!(period_condition("start_time", "yesterday").is_err());
    }

    #[test]
    fn malformed_shapes_rejected_at_every_length() {
        // Same lengths as the valid forms, wrong content.
        assert!(period_condition("start_time", "garbage").is_err());
        assert!(period_condition("start_time", "2026/03").is_err());
        assert!(period_condition("start_time", "2026-03-xy").is_err());
        assert!(period_condition("start_time", "abcd").is_err());
    }
}
