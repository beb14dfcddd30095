//! Batch module
//!
//! Orchestrates one conversion run.
//!
//! # Overview
//!
//! - Scan the input directory for `*.ndjson` files
//! - Derive each file's table and destination
//! - Hand each file to the configured [`Converter`](crate::convert::Converter)

mod converter;
mod scanner;
mod types;

pub use converter::BatchConverter;
pub use scanner::{scan_ndjson_files, NDJSON_EXTENSION};
pub use types::{ConvertedTable, PlannedConversion, RunSummary};
