//! # ndjson2parquet
//!
//! Batch conversion of newline-delimited JSON exports into Parquet tables,
//! one table per input file, tagged with a run identifier.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ndjson2parquet::batch::BatchConverter;
//! use ndjson2parquet::config::ConvertConfig;
//! use ndjson2parquet::convert::DuckDbConverter;
//!
//! fn main() -> ndjson2parquet::Result<()> {
//!     // NDJSON_DIR, PARQUET_DIR, RUN_ID
//!     let config = ConvertConfig::from_env()?;
//!     let engine = DuckDbConverter::new(config.compression)?;
//!
//!     let summary = BatchConverter::new(config, engine)?.run()?;
//!     println!("converted {} tables", summary.file_count());
//!     Ok(())
//! }
//! ```
//!
//! ## Layout
//!
//! ```text
//! NDJSON_DIR/                      PARQUET_DIR/
//!   events.ndjson    ──convert──▶    events/<RUN_ID>.parquet
//!   users.ndjson     ──convert──▶    users/<RUN_ID>.parquet
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Shared enums
pub mod types;

/// Run configuration
pub mod config;

/// Output layout and Parquet writing
pub mod output;

/// Conversion engines
pub mod convert;

/// Input scanning and run orchestration
pub mod batch;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use batch::{BatchConverter, RunSummary};
pub use config::ConvertConfig;
pub use convert::{ArrowConverter, Converter, DuckDbConverter};
pub use error::{ConversionError, Error, Result};
pub use types::{EngineKind, ParquetCompression};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
