//! Configuration loading.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AuditError, Result};

/// Default full-access policy name flagged by the admin-role detector.
pub const DEFAULT_ADMIN_POLICY: &str = "AdministratorAccess";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Policy names treated as granting full access. Exact-name matching;
    /// add custom admin-equivalent policies here to have them flagged.
    pub admin_policies: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            admin_policies: vec![DEFAULT_ADMIN_POLICY.to_string()],
        }
    }
}

impl Config {
    /// Load configuration from a YAML or JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AuditError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "yaml" | "yml" => serde_yaml::from_str(&content).map_err(|e| {
                AuditError::Config(format!("failed to parse {}: {}", path.display(), e))
            }),
            "json" => serde_json::from_str(&content).map_err(|e| {
                AuditError::Config(format!("failed to parse {}: {}", path.display(), e))
            }),
            _ => Err(AuditError::Config(format!(
                "unsupported config format: {}",
                path.display()
            ))),
        }
    }

    /// Load configuration next to the snapshot, falling back to defaults.
    ///
    /// Search order: `.cloud-audit.yaml`, `.cloud-audit.yml`,
    /// `.cloud-audit.json` in `dir`, then the default configuration.
    pub fn load(dir: Option<&Path>) -> Self {
        if let Some(dir) = dir {
            for filename in &[".cloud-audit.yaml", ".cloud-audit.yml", ".cloud-audit.json"] {
                let path = dir.join(filename);
                if path.exists() {
                    if let Ok(config) = Self::from_file(&path) {
                        return config;
                    }
                }
            }
        }
        Self::default()
    }
}
