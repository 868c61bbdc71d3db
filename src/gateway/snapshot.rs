//! Gateway implementation backed by an account snapshot file.

use std::fs;
use std::path::Path;

use crate::error::{AuditError, Result};
use crate::gateway::{GatewayError, ResourceGateway};
use crate::model::{PolicyAttachment, Role, SecurityGroup, Snapshot, User};

/// Serves gateway queries from a snapshot pulled in a single pass.
#[derive(Debug, Clone)]
pub struct SnapshotGateway {
    snapshot: Snapshot,
}

impl SnapshotGateway {
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    /// Load a snapshot from a JSON or YAML file, selected by extension.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(AuditError::SnapshotNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path).map_err(|e| AuditError::Read {
            path: path.display().to_string(),
            source: e,
        })?;

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        let snapshot = match ext.as_str() {
            "json" => serde_json::from_str(&content).map_err(|e| AuditError::ParseJson {
                path: path.display().to_string(),
                source: e,
            })?,
            "yaml" | "yml" => serde_yaml::from_str(&content).map_err(|e| AuditError::ParseYaml {
                path: path.display().to_string(),
                source: e,
            })?,
            _ => {
                return Err(AuditError::UnsupportedFormat {
                    path: path.display().to_string(),
                })
            }
        };

        Ok(Self::new(snapshot))
    }
}

impl ResourceGateway for SnapshotGateway {
    fn list_roles(&self) -> std::result::Result<Vec<Role>, GatewayError> {
        Ok(self.snapshot.roles.clone())
    }

    fn list_attached_policies(
        &self,
        role_name: &str,
    ) -> std::result::Result<Vec<PolicyAttachment>, GatewayError> {
        let role = self
            .snapshot
            .roles
            .iter()
            .find(|r| r.name == role_name)
            .ok_or_else(|| GatewayError::Resource {
                operation: "list_attached_policies",
                resource: role_name.to_string(),
                message: "no such role in snapshot".to_string(),
            })?;

        Ok(role
            .attached_policies
            .iter()
            .map(|policy| PolicyAttachment {
                role_name: role.name.clone(),
                policy_name: policy.clone(),
            })
            .collect())
    }

    fn list_users(&self) -> std::result::Result<Vec<User>, GatewayError> {
        Ok(self.snapshot.users.clone())
    }

    fn list_mfa_devices(&self, user_name: &str) -> std::result::Result<Vec<String>, GatewayError> {
        let user = self
            .snapshot
            .users
            .iter()
            .find(|u| u.name == user_name)
            .ok_or_else(|| GatewayError::Resource {
                operation: "list_mfa_devices",
                resource: user_name.to_string(),
                message: "no such user in snapshot".to_string(),
            })?;

        Ok(user.mfa_devices.clone())
    }

    fn list_security_groups(&self) -> std::result::Result<Vec<SecurityGroup>, GatewayError> {
        Ok(self.snapshot.security_groups.clone())
    }

    fn list_key_pair_names(&self) -> std::result::Result<Vec<String>, GatewayError> {
        Ok(self.snapshot.key_pairs.clone())
    }

    fn list_instance_key_pair_references(&self) -> std::result::Result<Vec<String>, GatewayError> {
        Ok(self
            .snapshot
            .instances
            .iter()
            .filter_map(|i| i.key_name.clone())
            .collect())
    }
}
