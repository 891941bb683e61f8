//! Error types for docker-detective.
//!
//! Only genuine failures live here. Conditions the scanner treats as
//! recoverable (unreadable files, inaccessible directories, empty sessions)
//! never become an error value.

use thiserror::Error;

/// Top-level error for CLI operations.
#[derive(Debug, Error)]
pub enum DetectiveError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Report rendering failed: {0}")]
    Template(#[from] tera::Error),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] inquire::InquireError),
}

/// Errors raised while reading configuration or parsing enum values.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParsingFailed(String),

    #[error("Unknown severity '{0}' (expected critical, high, medium, low or info)")]
    InvalidSeverity(String),

    #[error("Unknown category '{0}' (expected security, performance, best_practice or reliability)")]
    InvalidCategory(String),
}

pub type Result<T> = std::result::Result<T, DetectiveError>;
