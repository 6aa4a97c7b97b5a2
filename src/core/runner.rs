// Batch orchestration - solves independent rows on the blocking pool

use futures::future::join_all;
use tokio::task::JoinError;
use tracing::{info, warn};

use crate::core::input::RowInput;
use crate::core::solver::solve;
use crate::error::{FrobeniusError, Result};
use crate::models::{BatchSummary, Config, LimitsConfig, RowReport};

/// Reject rows that exceed the configured limits
pub fn check_limits(generators: &[u64], limits: &LimitsConfig) -> Result<()> {
    let count = generators.iter().filter(|&&g| g > 0).count();
    if count > limits.max_generators {
        return Err(FrobeniusError::TooManyGenerators {
            count,
            max: limits.max_generators,
        });
    }

    if let Some(anchor) = generators.iter().copied().filter(|&g| g > 0).min() {
        if anchor > limits.max_anchor {
            return Err(FrobeniusError::AnchorTooLarge {
                anchor,
                max: limits.max_anchor,
            });
        }
    }

    Ok(())
}

/// Solve one row synchronously
pub fn solve_row(row: RowInput, limits: &LimitsConfig) -> RowReport {
    let generators = match row.parsed {
        Ok(values) => values,
        Err(e) => return RowReport::failed(row.line, Vec::new(), e.to_string()),
    };

    let outcome = check_limits(&generators, limits).and_then(|_| solve(&generators));
    match outcome {
        Ok(frobenius) => RowReport::solved(row.line, generators, frobenius),
        Err(e) => RowReport::failed(row.line, generators, e.to_string()),
    }
}

/// Turn a finished blocking task into a report, keeping join failures per row
fn joined_report(
    line: usize,
    generators: Vec<u64>,
    joined: std::result::Result<RowReport, JoinError>,
) -> RowReport {
    joined.unwrap_or_else(|e| {
        RowReport::failed(line, generators, FrobeniusError::TaskFailed(e.to_string()).to_string())
    })
}

/// Solve all rows, `max_concurrent` at a time (0 = all at once)
///
/// Reports come back in input order regardless of which row finishes first.
pub async fn solve_rows(rows: Vec<RowInput>, config: &Config) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();
    if rows.is_empty() {
        info!("No rows to process");
        return Ok(summary);
    }

    let max_concurrent = config.batch.max_concurrent;
    let group_size = if max_concurrent > 0 {
        max_concurrent
    } else {
        rows.len()
    };

    let mut groups: Vec<Vec<RowInput>> = Vec::new();
    let mut remaining = rows.into_iter().peekable();
    while remaining.peek().is_some() {
        groups.push(remaining.by_ref().take(group_size).collect());
    }

    info!(
        "Processing {} row(s) in {} group(s)",
        groups.iter().map(Vec::len).sum::<usize>(),
        groups.len()
    );

    let total_groups = groups.len();
    let mut stopped_early = false;

    for (group_idx, group) in groups.into_iter().enumerate() {
        if stopped_early {
            summary.skipped += group.len();
            continue;
        }

        info!(
            "=== Group {}/{}: {} row(s) ===",
            group_idx + 1,
            total_groups,
            group.len()
        );

        let mut rows_in_flight = Vec::with_capacity(group.len());
        let mut handles = Vec::with_capacity(group.len());
        for row in group {
            let generators = row.parsed.as_ref().cloned().unwrap_or_default();
            rows_in_flight.push((row.line, generators));
            let limits = config.limits.clone();
            handles.push(tokio::task::spawn_blocking(move || solve_row(row, &limits)));
        }
        let results = join_all(handles).await;

        let mut group_failed = false;
        for ((line, generators), joined) in rows_in_flight.into_iter().zip(results) {
            let report = joined_report(line, generators, joined);
            if let Some(ref error) = report.error {
                warn!("Line {} failed: {}", report.line, error);
                group_failed = true;
            }
            summary.record(report);
        }

        if group_failed && config.batch.stop_on_error {
            info!("Stopping batch due to row failure (--stop-on-error)");
            stopped_early = true;
        }
    }

    Ok(summary)
}
