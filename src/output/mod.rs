//! Output module
//!
//! Handles where Parquet artifacts land and how Arrow data is written.
//!
//! # Overview
//!
//! This module provides utilities for:
//! - Deriving table names from input files
//! - Building `{root}/{table}/{run_id}.parquet` destinations
//! - Writing Arrow RecordBatches to Parquet files

mod layout;
mod writer;

pub use layout::{ensure_table_dir, output_path, table_dir, table_name, PARQUET_EXTENSION};
pub use writer::{ParquetWriter, ParquetWriterConfig};
