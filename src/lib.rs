pub mod aggregator;
pub mod cli;
pub mod config;
pub mod detectors;
pub mod error;
pub mod findings;
pub mod gateway;
pub mod model;
pub mod reporter;
pub mod run;

#[cfg(test)]
pub mod test_utils;

pub use cli::{Cli, OutputFormat};
pub use config::Config;
pub use error::{AuditError, Result};
pub use findings::{AuditReport, Category, DetectorFailure, Finding, Summary, Warning};
pub use gateway::{GatewayError, ResourceGateway, SnapshotGateway};
pub use reporter::{csv::CsvReporter, json::JsonReporter, terminal::TerminalReporter, Reporter};
