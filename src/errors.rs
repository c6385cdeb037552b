//! Unified application error type.
//! All modules (db, core, cli, sync) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store-related (transport)
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing / validation errors
    // ---------------------------
    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    #[error("Invalid period filter: {0}")]
    InvalidPeriod(String),

    #[error("Invalid role level '{0}'. Use one of: staff, gerente, dueno")]
    InvalidRoleLevel(String),

    #[error("Invalid score {0}: must be between 1 and 5")]
    InvalidScore(u8),

    // ---------------------------
    // Shift session errors
    // ---------------------------
    #[error("Invalid shift transition: {0}")]
    InvalidTransition(String),

    /// A staff row whose session columns violate the session invariant
    /// (e.g. status 'paused' with no pause start). Never repaired silently.
    #[error("Corrupt session state for {0}: {1}")]
    CorruptSession(String, String),

    // ---------------------------
    // Authorization errors
    // ---------------------------
    /// Deliberately generic: the message never names the tier that would
    /// have been required.
    #[error("Access denied")]
    Unauthorized,

    #[error("No acting identity. Pass --user <email> or set BARSHIFT_USER")]
    MissingIdentity,

    // ---------------------------
    // Roster errors
    // ---------------------------
    #[error("No staff member with email {0}")]
    UnknownStaff(String),

    #[error("A staff member with email {0} already exists")]
    DuplicateStaff(String),

    #[error("No custom role named {0}")]
    UnknownRole(String),

    #[error("A custom role named {0} already exists")]
    DuplicateRole(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
