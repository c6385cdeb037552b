//! CSV export of the shift history.

use crate::errors::{AppError, AppResult};
use crate::models::work_log::WorkLog;
use std::path::Path;

pub fn write_work_logs(path: &Path, logs: &[WorkLog]) -> AppResult<()> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("cannot open {}: {e}", path.display())))?;

    for log in logs {
        writer
            .serialize(log)
            .map_err(|e| AppError::Export(e.to_string()))?;
    }

    writer.flush()?;
    Ok(())
}
