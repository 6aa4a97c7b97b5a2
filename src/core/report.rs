//! Rendering of row reports for stdout

use crate::error::Result;
use crate::models::{BatchSummary, OutputFormat, RowReport};

/// Human-readable sentence for one row
pub fn render_row(report: &RowReport) -> String {
    if let Some(ref error) = report.error {
        return format!("Line {}: {}", report.line, error);
    }
    match report.frobenius {
        Some(n) => format!(
            "The Frobenius number of {:?} is {} (largest unreachable value).",
            report.generators, n
        ),
        None => format!(
            "{:?} has no finite Frobenius number.",
            report.generators
        ),
    }
}

/// Render every report in the requested format
pub fn render(summary: &BatchSummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(summary
            .reports
            .iter()
            .map(render_row)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&summary.reports)?),
    }
}
