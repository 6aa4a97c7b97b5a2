use serde::Serialize;
use std::fmt;

/// Outcome of one generator row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowReport {
    /// 1-based line number in the input
    pub line: usize,
    /// Generators as read, before normalization
    pub generators: Vec<u64>,
    /// Frobenius number, absent when no finite solution exists
    pub frobenius: Option<i64>,
    /// Error message when the row could not be solved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RowReport {
    pub fn solved(line: usize, generators: Vec<u64>, frobenius: Option<i64>) -> Self {
        Self {
            line,
            generators,
            frobenius,
            error: None,
        }
    }

    pub fn failed(line: usize, generators: Vec<u64>, error: impl Into<String>) -> Self {
        Self {
            line,
            generators,
            frobenius: None,
            error: Some(error.into()),
        }
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

/// Summary of a batch run
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub processed: usize,
    pub finite: usize,
    pub unbounded: usize,
    pub failed: usize,
    pub skipped: usize,
    pub reports: Vec<RowReport>,
}

impl BatchSummary {
    /// Record a row outcome, keeping the counters in step with the reports
    pub fn record(&mut self, report: RowReport) {
        self.processed += 1;
        if report.is_failed() {
            self.failed += 1;
        } else if report.frobenius.is_some() {
            self.finite += 1;
        } else {
            self.unbounded += 1;
        }
        self.reports.push(report);
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Solved {} row(s): {} finite, {} without a finite solution, {} failed",
            self.processed, self.finite, self.unbounded, self.failed
        )?;
        if self.skipped > 0 {
            write!(f, ", {} skipped", self.skipped)?;
        }
        Ok(())
    }
}
