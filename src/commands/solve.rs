use std::path::{Path, PathBuf};
use tracing::info;

use crate::core::{load_config, read_csv, render, solve_rows, units_row};
use crate::error::FrobeniusError;
use crate::models::{BatchSummary, OutputFormat};

/// Where the generator rows come from
#[derive(Debug, Clone)]
pub enum InputSource {
    /// A single comma separated literal
    Units(String),
    /// A CSV file with one row per line
    File(PathBuf),
}

/// Solve options
#[derive(Debug, Clone)]
pub struct SolveOptions {
    pub source: InputSource,
    /// Output format override
    pub format: Option<OutputFormat>,
    /// Concurrency override (0 = all rows at once)
    pub max_concurrent: Option<usize>,
    /// Stop after the first failing row
    pub stop_on_error: bool,
}

/// Solve every row and print the rendered report
///
/// Returns the summary so the caller can choose an exit code.
pub async fn run_solve(
    project_root: &Path,
    options: SolveOptions,
) -> Result<BatchSummary, FrobeniusError> {
    let config = load_config(
        project_root,
        options.format,
        options.max_concurrent,
        options.stop_on_error,
    )?;

    let rows = match &options.source {
        InputSource::Units(units) => {
            info!("Solving units literal: {}", units);
            units_row(units)?
        }
        InputSource::File(path) => read_csv(&project_root.join(path))?,
    };

    let summary = solve_rows(rows, &config).await?;

    println!("{}", render(&summary, config.output.format)?);
    if config.output.format == OutputFormat::Text && summary.processed > 1 {
        println!();
        println!("{}", summary);
    }

    Ok(summary)
}
