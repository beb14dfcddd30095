//! CLI module
//!
//! Command-line interface for a conversion run.
//!
//! Every option can also come from the environment (`NDJSON_DIR`,
//! `PARQUET_DIR`, `RUN_ID`, `PARQUET_COMPRESSION`), so the binary drops
//! straight into env-driven pipeline jobs.

mod commands;
mod runner;

pub use commands::{Cli, OutputFormat};
pub use runner::Runner;
