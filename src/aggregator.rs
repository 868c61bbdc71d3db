//! Runs all detectors and merges their output into one report.
//!
//! Detector order is fixed: overly permissive roles, users without MFA,
//! exposed security groups, unused key pairs. Findings are concatenated in
//! that order with no cross-detector deduplication; a resource appearing
//! under two categories is two independent concerns.

use chrono::Utc;
use tracing::{info, warn};

use crate::config::Config;
use crate::detectors::{
    AdminRoleDetector, Detector, ExposedGroupDetector, MfaDetector, UnusedKeyPairDetector,
};
use crate::findings::{AuditReport, DetectorFailure, Summary};
use crate::gateway::ResourceGateway;

/// Run every detector against the gateway and aggregate the results.
///
/// A detector whose top-level listing fails is recorded in
/// `failed_detectors`; the remaining detectors still run. This function only
/// ever returns a report, never an error.
pub fn run_detectors(gateway: &dyn ResourceGateway, target: &str, config: &Config) -> AuditReport {
    let detectors: Vec<Box<dyn Detector>> = vec![
        Box::new(AdminRoleDetector::new(config.admin_policies.clone())),
        Box::new(MfaDetector),
        Box::new(ExposedGroupDetector),
        Box::new(UnusedKeyPairDetector),
    ];

    let mut findings = Vec::new();
    let mut warnings = Vec::new();
    let mut failed_detectors = Vec::new();

    info!(target, "Starting audit");
    for detector in &detectors {
        match detector.detect(gateway) {
            Ok(report) => {
                findings.extend(report.findings);
                warnings.extend(report.warnings);
            }
            Err(e) => {
                warn!(category = detector.category().as_str(), error = %e, "Detector failed");
                failed_detectors.push(DetectorFailure {
                    category: detector.category(),
                    message: e.to_string(),
                });
            }
        }
    }
    info!(
        findings = findings.len(),
        warnings = warnings.len(),
        failed = failed_detectors.len(),
        "Audit completed"
    );

    let summary = Summary::from_findings(&findings, &failed_detectors);
    AuditReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        scanned_at: Utc::now().to_rfc3339(),
        target: target.to_string(),
        summary,
        findings,
        warnings,
        failed_detectors,
    }
}
