//! DuckDB-based conversion engine
//!
//! DuckDB reads the NDJSON with `read_json_auto` (schema inferred from the
//! data) and writes Parquet directly via `COPY ... TO`.

use crate::convert::Converter;
use crate::error::{ConversionError, Error, Result};
use crate::types::ParquetCompression;
use duckdb::Connection;
use std::path::Path;

/// Conversion engine backed by an in-memory DuckDB connection
pub struct DuckDbConverter {
    /// DuckDB connection, reused across files
    conn: Connection,
    /// Codec passed to `COPY`
    compression: ParquetCompression,
}

impl DuckDbConverter {
    /// Create a new engine
    pub fn new(compression: ParquetCompression) -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| Error::engine(format!("Failed to create DuckDB connection: {e}")))?;

        Ok(Self { conn, compression })
    }

    /// Get the configured codec
    pub fn compression(&self) -> ParquetCompression {
        self.compression
    }

    /// Build the `COPY` statement for one file
    pub fn copy_statement(input: &str, output: &str, compression: ParquetCompression) -> String {
        format!(
            "COPY (SELECT * FROM read_json_auto('{}')) TO '{}' (FORMAT PARQUET, COMPRESSION '{}');",
            sql_string(input),
            sql_string(output),
            compression.duckdb_name()
        )
    }
}

impl Converter for DuckDbConverter {
    fn name(&self) -> &'static str {
        "duckdb"
    }

    fn convert(&self, input: &Path, output: &Path) -> std::result::Result<(), ConversionError> {
        let input_str = input
            .to_str()
            .ok_or_else(|| ConversionError::new(input, output, "input path is not valid UTF-8"))?;
        let output_str = output
            .to_str()
            .ok_or_else(|| ConversionError::new(input, output, "output path is not valid UTF-8"))?;

        let copy_sql = Self::copy_statement(input_str, output_str, self.compression);

        tracing::debug!("Executing query: {}", copy_sql);

        self.conn
            .execute_batch(&copy_sql)
            .map_err(|e| ConversionError::new(input, output, e.to_string()))
    }
}

/// Escape a value for use inside a single-quoted SQL literal
fn sql_string(value: &str) -> String {
    value.replace('\'', "''")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_copy_statement() {
        let sql = DuckDbConverter::copy_statement(
            "in/users.ndjson",
            "out/users/r1.parquet",
            ParquetCompression::Snappy,
        );
        assert_eq!(
            sql,
            "COPY (SELECT * FROM read_json_auto('in/users.ndjson')) \
             TO 'out/users/r1.parquet' (FORMAT PARQUET, COMPRESSION 'SNAPPY');"
        );
    }

    #[test]
    fn test_copy_statement_escapes_quotes() {
        let sql = DuckDbConverter::copy_statement(
            "in/o'brien.ndjson",
            "out/o'brien/r1.parquet",
            ParquetCompression::Zstd,
        );
        assert!(sql.contains("read_json_auto('in/o''brien.ndjson')"));
        assert!(sql.contains("TO 'out/o''brien/r1.parquet'"));
        assert!(sql.ends_with("COMPRESSION 'ZSTD');"));
    }

    #[test]
    fn test_sql_string() {
        assert_eq!(sql_string("plain"), "plain");
        assert_eq!(sql_string("it's"), "it''s");
        assert_eq!(sql_string("''"), "''''");
    }

    #[test]
    fn test_new_engine() {
        let engine = DuckDbConverter::new(ParquetCompression::Gzip).unwrap();
        assert_eq!(engine.name(), "duckdb");
        assert_eq!(engine.compression(), ParquetCompression::Gzip);
    }
}
