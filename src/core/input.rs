//! Generator rows from a command-line literal or a CSV file

use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, info};

use crate::error::InputError;

/// One line of input and its parsed generators
#[derive(Debug)]
pub struct RowInput {
    /// 1-based line number
    pub line: usize,
    /// The line as written, trimmed
    pub source: String,
    /// Parsed values, or the reason the line was rejected
    pub parsed: Result<Vec<u64>, InputError>,
}

fn units_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9]+(,[0-9]+)*$").expect("units pattern is valid"))
}

/// Parse a comma separated list of non-negative integers, e.g. `6,9,20`
///
/// Only digits and commas are accepted: no signs, decimals, or inner spaces.
pub fn parse_units(s: &str) -> Result<Vec<u64>, InputError> {
    let trimmed = s.trim();
    if !units_pattern().is_match(trimmed) {
        return Err(InputError::Malformed(trimmed.to_string()));
    }

    trimmed
        .split(',')
        .map(|field| {
            field
                .parse::<u64>()
                .map_err(|_| InputError::ValueTooLarge(field.to_string()))
        })
        .collect()
}

/// Split file contents into rows, one per non-blank line
pub fn parse_rows(contents: &str) -> Vec<RowInput> {
    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            let source = line.trim().to_string();
            let parsed = parse_units(&source);
            if let Err(ref e) = parsed {
                debug!("Line {} rejected: {}", idx + 1, e);
            }
            RowInput {
                line: idx + 1,
                source,
                parsed,
            }
        })
        .collect()
}

/// Read a CSV file with one generator row per line
pub fn read_csv(path: &Path) -> Result<Vec<RowInput>, InputError> {
    let is_csv = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);
    if !is_csv {
        return Err(InputError::UnsupportedFile(path.to_path_buf()));
    }

    let contents =
        fs::read_to_string(path).map_err(|e| InputError::ReadError(path.to_path_buf(), e))?;
    let rows = parse_rows(&contents);
    if rows.is_empty() {
        return Err(InputError::Empty(path.to_path_buf()));
    }

    info!("Read {} row(s) from {}", rows.len(), path.display());
    Ok(rows)
}

/// Wrap a single `--units` literal as a one-row input
pub fn units_row(s: &str) -> Result<Vec<RowInput>, InputError> {
    let values = parse_units(s)?;
    Ok(vec![RowInput {
        line: 1,
        source: s.trim().to_string(),
        parsed: Ok(values),
    }])
}
