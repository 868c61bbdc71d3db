#[cfg(test)]
pub mod fixtures {
    use crate::findings::{AuditReport, Finding, Summary};
    use crate::gateway::{GatewayError, ResourceGateway, SnapshotGateway};
    use crate::model::{Instance, PolicyAttachment, Role, SecurityGroup, Snapshot, User};
    use std::collections::HashSet;

    pub fn report_with_findings(findings: Vec<Finding>) -> AuditReport {
        let summary = Summary::from_findings(&findings, &[]);
        AuditReport {
            version: "0.1.0".to_string(),
            scanned_at: "2026-08-28T12:00:00+00:00".to_string(),
            target: "snapshot.json".to_string(),
            summary,
            findings,
            warnings: vec![],
            failed_detectors: vec![],
        }
    }

    pub fn role(name: &str, policies: &[&str]) -> Role {
        Role {
            name: name.to_string(),
            attached_policies: policies.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn user(name: &str, mfa_devices: &[&str]) -> User {
        User {
            name: name.to_string(),
            mfa_devices: mfa_devices.iter().map(|d| d.to_string()).collect(),
        }
    }

    pub fn instance(id: &str, key_name: Option<&str>) -> Instance {
        Instance {
            instance_id: id.to_string(),
            key_name: key_name.map(|k| k.to_string()),
        }
    }

    /// Gateway test double that fails selected operations or resources.
    ///
    /// Operations named in `fail_operations` return a top-level `Listing`
    /// error; resources named in `fail_resources` return a per-resource
    /// `Resource` error. Everything else delegates to the snapshot.
    pub struct FlakyGateway {
        inner: SnapshotGateway,
        fail_operations: HashSet<&'static str>,
        fail_resources: HashSet<String>,
    }

    impl FlakyGateway {
        pub fn new(snapshot: Snapshot) -> Self {
            Self {
                inner: SnapshotGateway::new(snapshot),
                fail_operations: HashSet::new(),
                fail_resources: HashSet::new(),
            }
        }

        pub fn fail_operation(mut self, operation: &'static str) -> Self {
            self.fail_operations.insert(operation);
            self
        }

        pub fn fail_resource(mut self, resource: &str) -> Self {
            self.fail_resources.insert(resource.to_string());
            self
        }

        fn check_operation(&self, operation: &'static str) -> Result<(), GatewayError> {
            if self.fail_operations.contains(operation) {
                return Err(GatewayError::Listing {
                    operation,
                    message: "access denied".to_string(),
                });
            }
            Ok(())
        }

        fn check_resource(
            &self,
            operation: &'static str,
            resource: &str,
        ) -> Result<(), GatewayError> {
            if self.fail_resources.contains(resource) {
                return Err(GatewayError::Resource {
                    operation,
                    resource: resource.to_string(),
                    message: "throttled".to_string(),
                });
            }
            Ok(())
        }
    }

    impl ResourceGateway for FlakyGateway {
        fn list_roles(&self) -> Result<Vec<Role>, GatewayError> {
            self.check_operation("list_roles")?;
            self.inner.list_roles()
        }

        fn list_attached_policies(
            &self,
            role_name: &str,
        ) -> Result<Vec<PolicyAttachment>, GatewayError> {
            self.check_operation("list_attached_policies")?;
            self.check_resource("list_attached_policies", role_name)?;
            self.inner.list_attached_policies(role_name)
        }

        fn list_users(&self) -> Result<Vec<User>, GatewayError> {
            self.check_operation("list_users")?;
            self.inner.list_users()
        }

        fn list_mfa_devices(&self, user_name: &str) -> Result<Vec<String>, GatewayError> {
            self.check_operation("list_mfa_devices")?;
            self.check_resource("list_mfa_devices", user_name)?;
            self.inner.list_mfa_devices(user_name)
        }

        fn list_security_groups(&self) -> Result<Vec<SecurityGroup>, GatewayError> {
            self.check_operation("list_security_groups")?;
            self.inner.list_security_groups()
        }

        fn list_key_pair_names(&self) -> Result<Vec<String>, GatewayError> {
            self.check_operation("list_key_pair_names")?;
            self.inner.list_key_pair_names()
        }

        fn list_instance_key_pair_references(&self) -> Result<Vec<String>, GatewayError> {
            self.check_operation("list_instance_key_pair_references")?;
            self.inner.list_instance_key_pair_references()
        }
    }
}
