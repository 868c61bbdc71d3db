//! Flat two-column CSV output: `Issue,Details`.

use crate::findings::AuditReport;
use crate::reporter::Reporter;

pub struct CsvReporter;

impl CsvReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CsvReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Quote a field when it contains a comma, quote, or newline.
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

impl Reporter for CsvReporter {
    fn report(&self, report: &AuditReport) -> String {
        let mut out = String::from("Issue,Details\n");
        for finding in &report.findings {
            out.push_str(&escape(finding.category.issue_label()));
            out.push(',');
            out.push_str(&escape(&finding.details_column()));
            out.push('\n');
        }
        out
    }
}
