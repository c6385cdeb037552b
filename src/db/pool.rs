//! SQLite connection wrapper (lightweight for CLI usage).

use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        // Writers from other sessions hit the same file; give them a
        // moment before reporting busy.
        conn.busy_timeout(std::time::Duration::from_millis(250))?;
        Ok(Self { conn })
    }
}
