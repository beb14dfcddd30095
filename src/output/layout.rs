//! Output tree layout
//!
//! Every input file maps to `{root}/{table}/{run_id}.parquet`, where the
//! table is the input's base name with its rightmost extension removed.

use crate::error::{Error, Result, ResultExt};
use std::fs;
use std::path::{Path, PathBuf};

/// File extension of written artifacts
pub const PARQUET_EXTENSION: &str = "parquet";

/// Derive the table name from an input file path
///
/// Examples:
/// - `exports/orders.ndjson` -> `orders`
/// - `exports/a.b.ndjson` -> `a.b`
pub fn table_name(path: &Path) -> Result<String> {
    let stem = path
        .file_stem()
        .ok_or_else(|| Error::invalid_input(path, "no file name"))?;

    stem.to_str()
        .map(str::to_string)
        .ok_or_else(|| Error::invalid_input(path, "file name is not valid UTF-8"))
}

/// Directory holding every run of a table
pub fn table_dir(root: &Path, table: &str) -> PathBuf {
    root.join(table)
}

/// Destination of one table for one run
///
/// Format: `{root}/{table}/{run_id}.parquet`
pub fn output_path(root: &Path, table: &str, run_id: &str) -> PathBuf {
    table_dir(root, table).join(format!("{run_id}.{PARQUET_EXTENSION}"))
}

/// Create the table directory (and any parents) if missing
pub fn ensure_table_dir(root: &Path, table: &str) -> Result<PathBuf> {
    let dir = table_dir(root, table);
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create table directory {}", dir.display()))?;
    Ok(dir)
}
