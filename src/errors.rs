//! Unified application error type.
//! All modules (storage, core, cli, export) return AppError to keep the error
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

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid presence value: {0}")]
    InvalidPresence(String),

    #[error("Spreadsheet error: {0}")]
    Import(String),

    // ---------------------------
    // Signature errors
    // ---------------------------
    #[error("Invalid signature script: {0}")]
    SignatureScript(String),

    #[error("Signature encoding error: {0}")]
    SignatureEncode(String),

    // ---------------------------
    // Lookup errors
    // ---------------------------
    #[error("No visitor entry with id {0}")]
    UnknownEntry(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type AppResult<T> = Result<T, AppError>;
