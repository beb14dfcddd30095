//! Batch plan and summary types

use serde::Serialize;
use std::path::PathBuf;

/// One input file and where it will land
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedConversion {
    /// Table name derived from the input file
    pub table: String,
    /// NDJSON source
    pub input: PathBuf,
    /// Parquet destination
    pub output: PathBuf,
}

/// A table converted during the run
#[derive(Debug, Clone, Serialize)]
pub struct ConvertedTable {
    /// Table name
    pub table: String,
    /// NDJSON source
    pub input: PathBuf,
    /// Written Parquet file
    pub output: PathBuf,
    /// Wall time spent in the engine
    pub elapsed_ms: u64,
}

/// Outcome of a completed run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Run identifier every output is named after
    pub run_id: String,
    /// Engine that performed the conversions
    pub engine: String,
    /// Converted tables, in processing order
    pub tables: Vec<ConvertedTable>,
    /// Wall time for the whole run
    pub elapsed_ms: u64,
}

impl RunSummary {
    /// Number of files converted
    pub fn file_count(&self) -> usize {
        self.tables.len()
    }
}
