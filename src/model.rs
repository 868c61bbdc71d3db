//! Resource snapshot data model.
//!
//! These types mirror what the cloud provider's listing APIs return at scan
//! time. They are read-only: detectors consume them and never mutate them,
//! so the same snapshot always produces the same findings.

use serde::{Deserialize, Serialize};

/// An identity role and the policy names attached to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub name: String,
    #[serde(default)]
    pub attached_policies: Vec<String>,
}

/// A (role, policy) attachment pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyAttachment {
    pub role_name: String,
    pub policy_name: String,
}

/// An identity user and their registered MFA device ids (possibly none).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    #[serde(default)]
    pub mfa_devices: Vec<String>,
}

/// A network security group with its inbound rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityGroup {
    pub group_id: String,
    #[serde(default)]
    pub ingress_rules: Vec<IngressRule>,
}

/// One inbound permission entry. A missing port means "all ports".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngressRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default)]
    pub cidr_ranges: Vec<String>,
}

/// A compute instance and the key pair it references, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    pub instance_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,
}

/// A full account snapshot as pulled from the provider in one pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub roles: Vec<Role>,
    pub users: Vec<User>,
    pub security_groups: Vec<SecurityGroup>,
    pub key_pairs: Vec<String>,
    pub instances: Vec<Instance>,
}
