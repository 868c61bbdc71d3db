//! Detects roles carrying a full-access policy.

use tracing::{debug, warn};

use crate::detectors::{Detector, DetectorReport};
use crate::findings::{Category, Finding, Warning};
use crate::gateway::{GatewayError, ResourceGateway};

/// Flags roles with an attached policy whose name exactly matches one of the
/// configured full-access policy names.
///
/// Matching is exact-name only. Wildcard or custom policies that grant
/// equivalent access are not detected; widen `admin_policies` in the config
/// to cover them.
pub struct AdminRoleDetector {
    admin_policies: Vec<String>,
}

impl AdminRoleDetector {
    pub fn new(admin_policies: Vec<String>) -> Self {
        Self { admin_policies }
    }
}

impl Detector for AdminRoleDetector {
    fn category(&self) -> Category {
        Category::OverlyPermissiveRole
    }

    fn detect(&self, gateway: &dyn ResourceGateway) -> Result<DetectorReport, GatewayError> {
        let roles = gateway.list_roles()?;
        debug!(roles = roles.len(), "Checking roles for admin policies");

        let mut report = DetectorReport::default();
        for role in &roles {
            let attachments = match gateway.list_attached_policies(&role.name) {
                Ok(attachments) => attachments,
                Err(e) => {
                    warn!(role = %role.name, error = %e, "Skipping role");
                    report.warnings.push(Warning {
                        category: Category::OverlyPermissiveRole,
                        resource: role.name.clone(),
                        message: e.to_string(),
                    });
                    continue;
                }
            };

            let is_admin = attachments
                .iter()
                .any(|a| self.admin_policies.iter().any(|p| *p == a.policy_name));
            if is_admin {
                report
                    .findings
                    .push(Finding::new(Category::OverlyPermissiveRole, &role.name));
            }
        }

        Ok(report)
    }
}
