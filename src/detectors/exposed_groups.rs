//! Detects security group rules open to the whole internet.

use tracing::debug;

use crate::detectors::{Detector, DetectorReport};
use crate::findings::{Category, Finding};
use crate::gateway::{GatewayError, ResourceGateway};

/// CIDR ranges that mean "every address".
const OPEN_CIDRS: [&str; 2] = ["0.0.0.0/0", "::/0"];

/// Sentinel used when a rule does not restrict to a specific port.
const ALL_PORTS: &str = "All";

pub struct ExposedGroupDetector;

impl Detector for ExposedGroupDetector {
    fn category(&self) -> Category {
        Category::ExposedSecurityGroup
    }

    fn detect(&self, gateway: &dyn ResourceGateway) -> Result<DetectorReport, GatewayError> {
        let groups = gateway.list_security_groups()?;
        debug!(groups = groups.len(), "Checking security group ingress rules");

        let mut report = DetectorReport::default();
        for group in &groups {
            for rule in &group.ingress_rules {
                // Each matching range is its own finding, even on one rule.
                for cidr in &rule.cidr_ranges {
                    if OPEN_CIDRS.contains(&cidr.as_str()) {
                        let port = rule
                            .port
                            .map(|p| p.to_string())
                            .unwrap_or_else(|| ALL_PORTS.to_string());
                        report.findings.push(
                            Finding::new(Category::ExposedSecurityGroup, &group.group_id)
                                .with_detail(port),
                        );
                    }
                }
            }
        }

        Ok(report)
    }
}
