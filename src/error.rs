//! Error types for cloud-audit.

use crate::gateway::GatewayError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Snapshot file not found: {0}")]
    SnapshotNotFound(String),

    #[error("Failed to read {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON snapshot: {path}")]
    ParseJson {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse YAML snapshot: {path}")]
    ParseYaml {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Unsupported snapshot format: {path} (expected .json, .yaml or .yml)")]
    UnsupportedFormat { path: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to write report to {path}")]
    WriteReport {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

/// Result type alias for cloud-audit operations.
pub type Result<T> = std::result::Result<T, AuditError>;
