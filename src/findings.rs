use serde::{Deserialize, Serialize};

/// The four audit categories, in report order.
///
/// The declaration order here is the order categories appear in the final
/// report, regardless of which detector finishes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    OverlyPermissiveRole,
    UserWithoutMfa,
    ExposedSecurityGroup,
    UnusedKeyPair,
}

impl Category {
    /// All categories in report order.
    pub const ALL: [Category; 4] = [
        Category::OverlyPermissiveRole,
        Category::UserWithoutMfa,
        Category::ExposedSecurityGroup,
        Category::UnusedKeyPair,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::OverlyPermissiveRole => "overly_permissive_role",
            Category::UserWithoutMfa => "user_without_mfa",
            Category::ExposedSecurityGroup => "exposed_security_group",
            Category::UnusedKeyPair => "unused_key_pair",
        }
    }

    /// Human-readable label used in the `Issue` column of tabular output.
    pub fn issue_label(&self) -> &'static str {
        match self {
            Category::OverlyPermissiveRole => "Overly Permissive Role",
            Category::UserWithoutMfa => "User Without MFA",
            Category::ExposedSecurityGroup => "Publicly Accessible Security Group",
            Category::UnusedKeyPair => "Unused EC2 Key Pair",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.issue_label())
    }
}

/// A single reported security issue.
///
/// Findings are immutable value objects with no identity beyond their fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub category: Category,
    /// Identifier of the offending resource (role name, user name, group id, key name).
    pub subject: String,
    /// Category-specific detail, e.g. the open port for exposed security groups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Finding {
    pub fn new(category: Category, subject: impl Into<String>) -> Self {
        Self {
            category,
            subject: subject.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Rendering for the `Details` column of tabular output.
    pub fn details_column(&self) -> String {
        match &self.detail {
            Some(detail) => format!("{} (Port {})", self.subject, detail),
            None => self.subject.clone(),
        }
    }
}

/// A non-fatal problem encountered while scanning a single resource.
///
/// The resource is skipped, the detector continues, and the warning is
/// surfaced in the report so that no gap goes unnoticed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    pub category: Category,
    pub resource: String,
    pub message: String,
}

/// A detector that could not run at all (top-level listing failed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectorFailure {
    pub category: Category,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub overly_permissive_roles: usize,
    pub users_without_mfa: usize,
    pub exposed_security_groups: usize,
    pub unused_key_pairs: usize,
    pub passed: bool,
}

impl Summary {
    pub fn from_findings(findings: &[Finding], failures: &[DetectorFailure]) -> Self {
        let (roles, mfa, groups, keys) =
            findings
                .iter()
                .fold((0, 0, 0, 0), |(r, m, g, k), f| match f.category {
                    Category::OverlyPermissiveRole => (r + 1, m, g, k),
                    Category::UserWithoutMfa => (r, m + 1, g, k),
                    Category::ExposedSecurityGroup => (r, m, g + 1, k),
                    Category::UnusedKeyPair => (r, m, g, k + 1),
                });

        Self {
            overly_permissive_roles: roles,
            users_without_mfa: mfa,
            exposed_security_groups: groups,
            unused_key_pairs: keys,
            passed: findings.is_empty() && failures.is_empty(),
        }
    }

    pub fn total(&self) -> usize {
        self.overly_permissive_roles
            + self.users_without_mfa
            + self.exposed_security_groups
            + self.unused_key_pairs
    }
}

/// The complete result of one audit pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    pub version: String,
    pub scanned_at: String,
    pub target: String,
    pub summary: Summary,
    pub findings: Vec<Finding>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<Warning>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failed_detectors: Vec<DetectorFailure>,
}
