//! Conversion engines
//!
//! # Overview
//!
//! The batch converter never touches JSON or Parquet itself. Each file is
//! handed to a [`Converter`], which performs the "read JSON, write Parquet"
//! step as one operation:
//!
//! - [`DuckDbConverter`] - embedded DuckDB, `read_json_auto` + `COPY TO` (default)
//! - [`ArrowConverter`] - arrow-json decoding + Parquet ArrowWriter

mod arrow_engine;
mod duckdb_engine;
mod types;

pub use arrow_engine::{ArrowConverter, DEFAULT_BATCH_SIZE};
pub use duckdb_engine::DuckDbConverter;
pub use types::Converter;

use crate::error::Result;
use crate::types::{EngineKind, ParquetCompression};

/// Build the engine selected for a run
pub fn build_converter(
    engine: EngineKind,
    compression: ParquetCompression,
) -> Result<Box<dyn Converter>> {
    match engine {
        EngineKind::Duckdb => Ok(Box::new(DuckDbConverter::new(compression)?)),
        EngineKind::Arrow => Ok(Box::new(ArrowConverter::new(compression))),
    }
}
