//! Posture detectors.
//!
//! Each detector is stateless: it reads from the gateway and produces
//! findings plus warnings for resources it had to skip. Detectors never
//! depend on each other's output.

pub mod admin_roles;
pub mod exposed_groups;
pub mod mfa;
pub mod unused_keys;

pub use admin_roles::AdminRoleDetector;
pub use exposed_groups::ExposedGroupDetector;
pub use mfa::MfaDetector;
pub use unused_keys::UnusedKeyPairDetector;

use crate::findings::{Category, Finding, Warning};
use crate::gateway::{GatewayError, ResourceGateway};

/// Findings and per-resource warnings from one detector run.
#[derive(Debug, Default)]
pub struct DetectorReport {
    pub findings: Vec<Finding>,
    pub warnings: Vec<Warning>,
}

/// Core trait for all posture detectors.
///
/// `detect` returns `Err` only when the detector cannot run at all (its
/// top-level listing failed). Per-resource failures are reported as
/// warnings inside an `Ok` report.
pub trait Detector {
    fn category(&self) -> Category;

    fn detect(&self, gateway: &dyn ResourceGateway) -> Result<DetectorReport, GatewayError>;
}
