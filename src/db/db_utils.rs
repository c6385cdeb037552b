//! Small store helpers shared by the write paths.

use crate::errors::{AppError, AppResult};
use std::thread;
use std::time::Duration;

fn is_transient(e: &rusqlite::Error) -> bool {
    matches!(
        e,
        rusqlite::Error::SqliteFailure(err, _)
            if err.code == rusqlite::ErrorCode::DatabaseBusy
                || err.code == rusqlite::ErrorCode::DatabaseLocked
    )
}

/// Run a store write, retrying exactly once when the database reports a
/// transient busy/locked condition. Anything else surfaces immediately.
pub fn with_write_retry<T, F>(mut f: F) -> AppResult<T>
where
    F: FnMut() -> AppResult<T>,
{
    match f() {
        Err(AppError::Db(ref e)) if is_transient(e) => {
            thread::sleep(Duration::from_millis(50));
            f()
        }
        other => other,
    }
}
