//! Arrow-based conversion engine
//!
//! Infers an Arrow schema from the NDJSON file, decodes it in batches with
//! the arrow JSON reader and streams the batches into a Parquet file.

use crate::convert::Converter;
use crate::error::{ConversionError, Result};
use crate::output::{ParquetWriter, ParquetWriterConfig};
use crate::types::ParquetCompression;
use arrow::json::reader::infer_json_schema_from_seekable;
use arrow::json::ReaderBuilder;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

/// Rows decoded per RecordBatch
pub const DEFAULT_BATCH_SIZE: usize = 8192;

/// Conversion engine built on arrow-json and the Parquet ArrowWriter
#[derive(Debug, Clone)]
pub struct ArrowConverter {
    writer_config: ParquetWriterConfig,
    batch_size: usize,
    /// Records sampled for schema inference (None = whole file)
    infer_max_records: Option<usize>,
}

impl ArrowConverter {
    /// Create a new engine
    pub fn new(compression: ParquetCompression) -> Self {
        Self {
            writer_config: ParquetWriterConfig::new().with_compression(compression),
            batch_size: DEFAULT_BATCH_SIZE,
            infer_max_records: None,
        }
    }

    /// Set rows per decoded batch
    #[must_use]
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size.max(1);
        self
    }

    /// Cap the number of records read for schema inference
    #[must_use]
    pub fn with_infer_max_records(mut self, max: usize) -> Self {
        self.infer_max_records = Some(max);
        self
    }

    /// Convert and return the number of rows written
    pub fn write_parquet(&self, input: &Path, output: &Path) -> Result<usize> {
        let mut reader = BufReader::new(File::open(input)?);

        let (schema, _) = infer_json_schema_from_seekable(&mut reader, self.infer_max_records)?;
        let schema = Arc::new(schema);

        // Inference widens mixed scalars to Utf8; decode them the same way
        let batches = ReaderBuilder::new(schema.clone())
            .with_batch_size(self.batch_size)
            .with_coerce_primitive(true)
            .build(reader)?;

        let mut writer = ParquetWriter::new(output, schema, &self.writer_config)?;
        for batch in batches {
            writer.write(&batch?)?;
        }
        writer.close()
    }
}

impl Converter for ArrowConverter {
    fn name(&self) -> &'static str {
        "arrow"
    }

    fn convert(&self, input: &Path, output: &Path) -> std::result::Result<(), ConversionError> {
        let rows = self
            .write_parquet(input, output)
            .map_err(|e| ConversionError::new(input, output, e.to_string()))?;

        tracing::debug!(rows, output = %output.display(), "wrote parquet");
        Ok(())
    }
}
