//! Batch converter
//!
//! Walks the input listing once, in file-name order, converting each file
//! before moving to the next. The first failure aborts the run; outputs
//! already written are left in place.

use crate::batch::scanner::scan_ndjson_files;
use crate::batch::types::{ConvertedTable, PlannedConversion, RunSummary};
use crate::config::ConvertConfig;
use crate::convert::Converter;
use crate::error::Result;
use crate::output::{ensure_table_dir, output_path, table_name};
use std::time::Instant;

/// Converts every NDJSON file of a directory into the run's Parquet tree
pub struct BatchConverter<C> {
    config: ConvertConfig,
    converter: C,
}

impl<C: Converter> BatchConverter<C> {
    /// Create a batch converter, validating the config up front
    pub fn new(config: ConvertConfig, converter: C) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, converter })
    }

    /// Get the underlying engine
    pub fn converter(&self) -> &C {
        &self.converter
    }

    /// List the conversions a run would perform, without writing anything
    pub fn plan(&self) -> Result<Vec<PlannedConversion>> {
        scan_ndjson_files(&self.config.input_dir)?
            .into_iter()
            .map(|input| {
                let table = table_name(&input)?;
                let output = output_path(&self.config.output_dir, &table, &self.config.run_id);
                Ok(PlannedConversion {
                    table,
                    input,
                    output,
                })
            })
            .collect()
    }

    /// Convert every planned file, stopping at the first error
    pub fn run(&self) -> Result<RunSummary> {
        let started = Instant::now();
        let plan = self.plan()?;

        tracing::info!(
            run_id = %self.config.run_id,
            engine = self.converter.name(),
            files = plan.len(),
            input_dir = %self.config.input_dir.display(),
            "starting conversion run"
        );

        let mut tables = Vec::with_capacity(plan.len());
        for item in plan {
            ensure_table_dir(&self.config.output_dir, &item.table)?;

            let file_started = Instant::now();
            self.converter.convert(&item.input, &item.output)?;
            let elapsed_ms = file_started.elapsed().as_millis() as u64;

            tracing::info!(
                table = %item.table,
                output = %item.output.display(),
                elapsed_ms,
                "converted"
            );

            tables.push(ConvertedTable {
                table: item.table,
                input: item.input,
                output: item.output,
                elapsed_ms,
            });
        }

        Ok(RunSummary {
            run_id: self.config.run_id.clone(),
            engine: self.converter.name().to_string(),
            tables,
            elapsed_ms: started.elapsed().as_millis() as u64,
        })
    }
}
