//! Detects key pairs not referenced by any instance.

use std::collections::BTreeSet;

use tracing::debug;

use crate::detectors::{Detector, DetectorReport};
use crate::findings::{Category, Finding};
use crate::gateway::{GatewayError, ResourceGateway};

pub struct UnusedKeyPairDetector;

impl Detector for UnusedKeyPairDetector {
    fn category(&self) -> Category {
        Category::UnusedKeyPair
    }

    fn detect(&self, gateway: &dyn ResourceGateway) -> Result<DetectorReport, GatewayError> {
        // BTreeSet keeps the set difference sorted by name, so the report
        // order is reproducible run to run.
        let declared: BTreeSet<String> = gateway.list_key_pair_names()?.into_iter().collect();
        let referenced: BTreeSet<String> = gateway
            .list_instance_key_pair_references()?
            .into_iter()
            .collect();
        debug!(
            declared = declared.len(),
            referenced = referenced.len(),
            "Checking key pair usage"
        );

        let mut report = DetectorReport::default();
        for key in declared.difference(&referenced) {
            report
                .findings
                .push(Finding::new(Category::UnusedKeyPair, key));
        }

        Ok(report)
    }
}
