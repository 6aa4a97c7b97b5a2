use std::path::Path;

use crate::core::{check_limits, is_coprime, read_csv};
use crate::error::FrobeniusError;
use crate::models::Config;

/// Validation result
pub struct ValidationResult {
    pub valid: bool,
    pub rows: usize,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Check every row of a CSV file without solving it
pub fn validate_file(project_root: &Path, file: &Path) -> Result<ValidationResult, FrobeniusError> {
    let mut result = ValidationResult {
        valid: true,
        rows: 0,
        errors: Vec::new(),
        warnings: Vec::new(),
    };

    // Load config from frobenius.toml (or use defaults)
    let config = Config::load_from_dir(project_root)?;

    let rows = match read_csv(&project_root.join(file)) {
        Ok(rows) => rows,
        Err(e) => {
            result.errors.push(e.to_string());
            result.valid = false;
            return Ok(result);
        }
    };
    result.rows = rows.len();

    for row in rows {
        let generators = match row.parsed {
            Ok(values) => values,
            Err(e) => {
                result.errors.push(format!("Line {}: {}", row.line, e));
                result.valid = false;
                continue;
            }
        };

        if let Err(e) = check_limits(&generators, &config.limits) {
            result.errors.push(format!("Line {}: {}", row.line, e));
            result.valid = false;
            continue;
        }

        let nonzero: Vec<u64> = generators.iter().copied().filter(|&g| g > 0).collect();
        if nonzero.len() < 2 {
            result.warnings.push(format!(
                "Line {}: fewer than two nonzero values (no finite solution)",
                row.line
            ));
        } else if !is_coprime(&nonzero) {
            result.warnings.push(format!(
                "Line {}: values share a common factor (no finite solution)",
                row.line
            ));
        }
    }

    Ok(result)
}

/// Print validation result
pub fn print_validation_result(result: &ValidationResult) {
    println!("=== Validation Result ===\n");

    if result.valid {
        println!("Status: VALID ({} row(s))\n", result.rows);
    } else {
        println!("Status: INVALID\n");
    }

    if !result.errors.is_empty() {
        println!("Errors:");
        for error in &result.errors {
            println!("  - {}", error);
        }
        println!();
    }

    if !result.warnings.is_empty() {
        println!("Warnings:");
        for warning in &result.warnings {
            println!("  - {}", warning);
        }
        println!();
    }

    if result.valid && result.warnings.is_empty() {
        println!("All checks passed!");
    }
}
