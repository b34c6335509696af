//! Error handling for the rynt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use thiserror::Error;

/// Main error type for the rynt CLI application.
///
/// This enum represents all possible errors that can occur during the
/// execution of rynt commands.
#[derive(Error, Debug)]
pub enum RyntError {
    /// Error when configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when a checked file contains diagnostics.
    #[error("Check failed: {0}")]
    CheckFailed(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error surfaced by the compile driver.
    #[error(transparent)]
    Driver(#[from] rync_drv::DriverError),
}

/// Result type alias using RyntError.
pub type Result<T> = std::result::Result<T, RyntError>;
