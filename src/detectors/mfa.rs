//! Detects users with no registered MFA device.

use tracing::{debug, warn};

use crate::detectors::{Detector, DetectorReport};
use crate::findings::{Category, Finding, Warning};
use crate::gateway::{GatewayError, ResourceGateway};

pub struct MfaDetector;

impl Detector for MfaDetector {
    fn category(&self) -> Category {
        Category::UserWithoutMfa
    }

    fn detect(&self, gateway: &dyn ResourceGateway) -> Result<DetectorReport, GatewayError> {
        let users = gateway.list_users()?;
        debug!(users = users.len(), "Checking users for MFA devices");

        let mut report = DetectorReport::default();
        for user in &users {
            // One MFA lookup per user; a failure here must not abort the
            // scan for the remaining users.
            match gateway.list_mfa_devices(&user.name) {
                Ok(devices) => {
                    if devices.is_empty() {
                        report
                            .findings
                            .push(Finding::new(Category::UserWithoutMfa, &user.name));
                    }
                }
                Err(e) => {
                    warn!(user = %user.name, error = %e, "Skipping user");
                    report.warnings.push(Warning {
                        category: Category::UserWithoutMfa,
                        resource: user.name.clone(),
                        message: e.to_string(),
                    });
                }
            }
        }

        Ok(report)
    }
}
