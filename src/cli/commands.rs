//! CLI arguments and parsing

use crate::config::{
    DEFAULT_NDJSON_DIR, DEFAULT_PARQUET_DIR, ENV_NDJSON_DIR, ENV_PARQUET_COMPRESSION,
    ENV_PARQUET_DIR, ENV_RUN_ID,
};
use crate::types::EngineKind;
use clap::Parser;
use std::path::PathBuf;

/// Convert a directory of NDJSON exports into run-tagged Parquet tables
#[derive(Parser, Debug)]
#[command(name = "ndjson2parquet")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory scanned (non-recursively) for *.ndjson files
    #[arg(long, env = ENV_NDJSON_DIR, default_value = DEFAULT_NDJSON_DIR)]
    pub ndjson_dir: PathBuf,

    /// Root of the output tree: <parquet-dir>/<table>/<run-id>.parquet
    #[arg(long, env = ENV_PARQUET_DIR, default_value = DEFAULT_PARQUET_DIR)]
    pub parquet_dir: PathBuf,

    /// Run identifier used as the output file name (required)
    #[arg(long, env = ENV_RUN_ID)]
    pub run_id: Option<String>,

    /// Parquet compression codec: snappy (default), zstd, gzip or uncompressed
    #[arg(long, env = ENV_PARQUET_COMPRESSION)]
    pub compression: Option<String>,

    /// Conversion engine
    #[arg(long, value_enum, default_value_t = EngineKind::Duckdb)]
    pub engine: EngineKind,

    /// Summary output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,

    /// List planned conversions without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Pretty,
    /// JSON output (single document)
    Json,
}
