//! JSON export of the shift history.

use crate::errors::{AppError, AppResult};
use crate::models::work_log::WorkLog;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

pub fn write_work_logs(path: &Path, logs: &[WorkLog]) -> AppResult<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, logs).map_err(|e| AppError::Export(e.to_string()))?;
    Ok(())
}
