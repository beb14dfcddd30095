//! Common types used throughout ndjson2parquet
//!
//! Shared enums that appear in configuration, on the command line and in
//! the run summary.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Parquet Compression
// ============================================================================

/// Compression codec for written Parquet files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParquetCompression {
    /// Snappy (DuckDB's default)
    #[default]
    Snappy,
    /// Zstandard
    Zstd,
    /// Gzip
    Gzip,
    /// No compression
    Uncompressed,
}

impl ParquetCompression {
    /// Codec name as DuckDB's `COPY ... (COMPRESSION '<name>')` expects it
    pub fn duckdb_name(self) -> &'static str {
        match self {
            ParquetCompression::Snappy => "SNAPPY",
            ParquetCompression::Zstd => "ZSTD",
            ParquetCompression::Gzip => "GZIP",
            ParquetCompression::Uncompressed => "UNCOMPRESSED",
        }
    }
}

impl From<ParquetCompression> for parquet::basic::Compression {
    fn from(compression: ParquetCompression) -> Self {
        match compression {
            ParquetCompression::Snappy => parquet::basic::Compression::SNAPPY,
            ParquetCompression::Zstd => {
                parquet::basic::Compression::ZSTD(parquet::basic::ZstdLevel::default())
            }
            ParquetCompression::Gzip => {
                parquet::basic::Compression::GZIP(parquet::basic::GzipLevel::default())
            }
            ParquetCompression::Uncompressed => parquet::basic::Compression::UNCOMPRESSED,
        }
    }
}

impl FromStr for ParquetCompression {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "snappy" => Ok(ParquetCompression::Snappy),
            "zstd" => Ok(ParquetCompression::Zstd),
            "gzip" => Ok(ParquetCompression::Gzip),
            "uncompressed" | "none" => Ok(ParquetCompression::Uncompressed),
            other => Err(Error::invalid_value(
                "PARQUET_COMPRESSION",
                format!("unknown codec '{other}' (expected snappy, zstd, gzip or uncompressed)"),
            )),
        }
    }
}

impl fmt::Display for ParquetCompression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.duckdb_name().to_lowercase())
    }
}

// ============================================================================
// Engine Kind
// ============================================================================

/// Which conversion engine backs a run
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// Embedded DuckDB (`read_json_auto` + `COPY ... FORMAT PARQUET`)
    #[default]
    Duckdb,
    /// Arrow JSON reader + Parquet ArrowWriter
    Arrow,
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineKind::Duckdb => f.write_str("duckdb"),
            EngineKind::Arrow => f.write_str("arrow"),
        }
    }
}
