//! Conversion run configuration
//!
//! A run is fully described by three settings: where to read NDJSON from,
//! where to root the Parquet tree, and the run identifier that names every
//! output file. They are read once (from the environment or the CLI) and
//! validated before any filesystem access happens.

use crate::error::{Error, Result};
use crate::types::ParquetCompression;
use std::path::PathBuf;

// ============================================================================
// Environment Variables
// ============================================================================

/// Input directory scanned for `*.ndjson` files
pub const ENV_NDJSON_DIR: &str = "NDJSON_DIR";

/// Root of the Parquet output tree
pub const ENV_PARQUET_DIR: &str = "PARQUET_DIR";

/// Run tag used as the output file name
pub const ENV_RUN_ID: &str = "RUN_ID";

/// Parquet compression codec
pub const ENV_PARQUET_COMPRESSION: &str = "PARQUET_COMPRESSION";

/// Default input directory
pub const DEFAULT_NDJSON_DIR: &str = "analytics_work/ndjson";

/// Default output root
pub const DEFAULT_PARQUET_DIR: &str = "analytics_store/parquet";

// ============================================================================
// Convert Config
// ============================================================================

/// Settings for one batch conversion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    /// Directory holding the NDJSON exports (non-recursive)
    pub input_dir: PathBuf,
    /// Root of the `<table>/<run_id>.parquet` tree
    pub output_dir: PathBuf,
    /// Run identifier, never empty once validated
    pub run_id: String,
    /// Codec applied to every written file
    pub compression: ParquetCompression,
}

impl ConvertConfig {
    /// Create a config with default directories for the given run
    pub fn new(run_id: impl Into<String>) -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_NDJSON_DIR),
            output_dir: PathBuf::from(DEFAULT_PARQUET_DIR),
            run_id: run_id.into(),
            compression: ParquetCompression::default(),
        }
    }

    /// Set the input directory
    #[must_use]
    pub fn with_input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.input_dir = dir.into();
        self
    }

    /// Set the output root
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the compression codec
    #[must_use]
    pub fn with_compression(mut self, compression: ParquetCompression) -> Self {
        self.compression = compression;
        self
    }

    /// Build a config from an optional run id, failing if it is absent
    pub fn from_run_id(run_id: Option<String>) -> Result<Self> {
        let run_id = run_id.ok_or_else(|| Error::missing_field(ENV_RUN_ID))?;
        let config = Self::new(run_id);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Unset directories fall back to their defaults. `RUN_ID` has no
    /// default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::from_run_id(lookup(ENV_RUN_ID))?;

        if let Some(dir) = lookup(ENV_NDJSON_DIR) {
            config.input_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup(ENV_PARQUET_DIR) {
            config.output_dir = PathBuf::from(dir);
        }
        if let Some(codec) = lookup(ENV_PARQUET_COMPRESSION) {
            config.compression = codec.parse()?;
        }

        Ok(config)
    }

    /// Check the config before any I/O is attempted
    pub fn validate(&self) -> Result<()> {
        validate_run_id(&self.run_id)
    }
}

/// Check that a run id can be used verbatim as a file name
pub fn validate_run_id(run_id: &str) -> Result<()> {
    if run_id.is_empty() {
        return Err(Error::missing_field(ENV_RUN_ID));
    }

    if let Some(bad) = run_id.chars().find(|c| matches!(c, '/' | '\\' | '\0')) {
        return Err(Error::invalid_value(
            ENV_RUN_ID,
            format!("must not contain {bad:?}"),
        ));
    }

    Ok(())
}
