//! CLI runner - executes a conversion run

use crate::batch::{BatchConverter, PlannedConversion, RunSummary};
use crate::cli::commands::{Cli, OutputFormat};
use crate::config::ConvertConfig;
use crate::convert::{build_converter, Converter};
use crate::error::Result;
use std::fmt::Write as _;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        // RUN_ID is checked before the engine is opened or any path touched
        let config = self.build_config()?;
        let converter = build_converter(self.cli.engine, config.compression)?;
        let batch = BatchConverter::new(config, converter)?;

        let rendered = if self.cli.dry_run {
            tracing::debug!(engine = batch.converter().name(), "dry run, nothing is written");
            self.render_plan(&batch.plan()?)?
        } else {
            self.render_summary(&batch.run()?)?
        };

        print!("{rendered}");
        Ok(())
    }

    /// Build the validated run config from parsed arguments
    pub fn build_config(&self) -> Result<ConvertConfig> {
        let mut config = ConvertConfig::from_run_id(self.cli.run_id.clone())?
            .with_input_dir(&self.cli.ndjson_dir)
            .with_output_dir(&self.cli.parquet_dir);

        // Same parser as ConvertConfig::from_env, so flag and env agree
        if let Some(codec) = &self.cli.compression {
            config = config.with_compression(codec.parse()?);
        }
        Ok(config)
    }

    fn render_plan(&self, plan: &[PlannedConversion]) -> Result<String> {
        match self.cli.format {
            OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string(plan)?)),
            OutputFormat::Pretty => {
                let mut out = format!("{} file(s) would be converted\n", plan.len());
                for item in plan {
                    let _ = writeln!(
                        out,
                        "  {} -> {}",
                        item.input.display(),
                        item.output.display()
                    );
                }
                Ok(out)
            }
        }
    }

    fn render_summary(&self, summary: &RunSummary) -> Result<String> {
        match self.cli.format {
            OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string(summary)?)),
            OutputFormat::Pretty => {
                let mut out = format!(
                    "Converted {} file(s) for run {} with {} in {}ms\n",
                    summary.file_count(),
                    summary.run_id,
                    summary.engine,
                    summary.elapsed_ms
                );
                for table in &summary.tables {
                    let _ = writeln!(
                        out,
                        "  {} -> {} ({}ms)",
                        table.table,
                        table.output.display(),
                        table.elapsed_ms
                    );
                }
                Ok(out)
            }
        }
    }
}
