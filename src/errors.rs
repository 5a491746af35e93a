//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
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
    // Storage-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Stored data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("All required fields must be filled in: {0}")]
    MissingFields(String),

    #[error("An activity needs at least one participant")]
    NoParticipants,

    #[error("All participant fields must be filled in (participant #{0})")]
    IncompleteParticipant(usize),

    #[error("Invalid participant index: {0}")]
    InvalidParticipantIndex(usize),

    #[error("Invalid participant position: '{0}'")]
    InvalidParticipantPosition(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Activity not found: {0}")]
    ActivityNotFound(i64),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export / import errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("Import error: {0}")]
    Import(String),
}

pub type AppResult<T> = Result<T, AppError>;
