//! Wires the CLI to the audit pipeline.

use std::fs;
use std::process::ExitCode;

use tracing::debug;

use crate::aggregator::run_detectors;
use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::error::Result;
use crate::findings::AuditReport;
use crate::gateway::SnapshotGateway;
use crate::reporter::{csv::CsvReporter, json::JsonReporter, terminal::TerminalReporter, Reporter};

/// Load the snapshot and configuration, then run all detectors.
pub fn run_audit(cli: &Cli) -> Result<AuditReport> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load(cli.snapshot.parent()),
    };
    if !cli.admin_policies.is_empty() {
        config.admin_policies = cli.admin_policies.clone();
    }
    debug!(admin_policies = ?config.admin_policies, "Effective configuration");

    let gateway = SnapshotGateway::from_file(&cli.snapshot)?;
    Ok(run_detectors(
        &gateway,
        &cli.snapshot.display().to_string(),
        &config,
    ))
}

pub fn format_report(cli: &Cli, report: &AuditReport) -> String {
    match cli.format {
        OutputFormat::Terminal => TerminalReporter::new(cli.verbose).report(report),
        OutputFormat::Csv => CsvReporter::new().report(report),
        OutputFormat::Json => JsonReporter::new().report(report),
    }
}

/// Exit codes: 0 clean, 1 findings or failed detectors, 2 operational error.
pub fn execute(cli: &Cli) -> ExitCode {
    let report = match run_audit(cli) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    let output = format_report(cli, &report);
    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &output) {
                eprintln!("Failed to write report to {}: {}", path.display(), e);
                return ExitCode::from(2);
            }
            println!("Report written to {}", path.display());
        }
        None => print!("{}", output),
    }

    if report.summary.passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}
