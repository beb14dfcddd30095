//! Converter trait
//!
//! Defines the single seam between orchestration and the engine that
//! actually understands JSON and Parquet.

use crate::error::ConversionError;
use std::path::Path;

/// A format-conversion engine: one NDJSON file in, one Parquet file out
///
/// Implementations read the whole input with an inferred schema and write
/// exactly one Parquet file at `output`, replacing whatever was there. The
/// parent directory of `output` already exists when this is called.
pub trait Converter {
    /// Short engine name, used in logs and run summaries
    fn name(&self) -> &'static str;

    /// Convert `input` into `output`
    fn convert(&self, input: &Path, output: &Path) -> Result<(), ConversionError>;
}

impl<C: Converter + ?Sized> Converter for Box<C> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn convert(&self, input: &Path, output: &Path) -> Result<(), ConversionError> {
        (**self).convert(input, output)
    }
}
