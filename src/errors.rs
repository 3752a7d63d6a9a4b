//! Unified application error type.
//! All modules (store, core, cli, db) return AppError to keep the error
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
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    /// A record-store write or read that could not be committed.
    /// Prior persisted state is always left intact.
    #[error("Storage failure: {0}")]
    Storage(String),

    // ---------------------------
    // Attendance / location
    // ---------------------------
    #[error("Location permission not granted")]
    PermissionDenied,

    #[error("No location fix available")]
    LocationUnavailable,

    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Work description must not be empty")]
    EmptyDescription,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
