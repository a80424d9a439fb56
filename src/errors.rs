//! Unified application error type.
//! All modules (db, core, api, cli, utils) return AppError to keep the error
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

    // ---------------------------
    // Parsing / validation errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid ISO week: {0} (expected YYYY-Www)")]
    InvalidWeek(String),

    #[error("Invalid month key: {0} (expected YYYY-MM)")]
    InvalidMonthKey(String),

    #[error("Invalid hours value: {0}")]
    InvalidHours(String),

    #[error("Missing required fields: {0}")]
    MissingFields(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Lookup errors
    // ---------------------------
    #[error("Entry {0} not found")]
    EntryNotFound(String),

    #[error("Project '{project}' of company '{company}' not found")]
    ProjectNotFound { company: String, project: String },

    #[error("Work division item {0} not found")]
    ItemNotFound(i64),

    // ---------------------------
    // Auth errors
    // ---------------------------
    #[error("Password hash is not configured (set app_pass_hash or APP_PASS_HASH)")]
    PasswordHashNotSet,

    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration file error: {0}")]
    ConfigFile(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Server
    // ---------------------------
    #[error("Server error: {0}")]
    Server(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
