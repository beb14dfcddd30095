//! Error types for ndjson2parquet
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure reported by a [`Converter`](crate::convert::Converter) engine
///
/// Carries both ends of the conversion so the operator can tell which
/// table aborted the run.
#[derive(Error, Debug)]
#[error("Failed to convert {} to {}: {message}", .input.display(), .output.display())]
pub struct ConversionError {
    /// NDJSON file being read
    pub input: PathBuf,
    /// Parquet file being written
    pub output: PathBuf,
    /// Engine-provided reason
    pub message: String,
}

impl ConversionError {
    /// Create a conversion error for an input/output pair
    pub fn new(input: &Path, output: &Path, message: impl Into<String>) -> Self {
        Self {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            message: message.into(),
        }
    }
}

/// The main error type for ndjson2parquet
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    // ============================================================================
    // Conversion Errors
    // ============================================================================
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error("Invalid input file {path}: {message}")]
    InvalidInput { path: String, message: String },

    #[error("Engine error: {message}")]
    Engine { message: String },

    // ============================================================================
    // Arrow/Parquet Errors
    // ============================================================================
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("Output error: {message}")]
    Output { message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(path: &Path, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            path: path.display().to_string(),
            message: message.into(),
        }
    }

    /// Create an engine setup error
    pub fn engine(message: impl Into<String>) -> Self {
        Self::Engine {
            message: message.into(),
        }
    }

    /// Create an output error
    pub fn output(message: impl Into<String>) -> Self {
        Self::Output {
            message: message.into(),
        }
    }

    /// Check if this error was raised before any conversion started
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Error::MissingConfigField { .. } | Error::InvalidConfigValue { .. }
        )
    }
}

/// Result type alias for ndjson2parquet
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
