//! Read-only access to cloud resource metadata.
//!
//! The core never talks to a cloud SDK directly. Everything it needs comes
//! through the `ResourceGateway` trait, so detectors can be driven by a live
//! adapter, a snapshot file, or an in-memory test double interchangeably.

pub mod snapshot;

pub use snapshot::SnapshotGateway;

use crate::model::{PolicyAttachment, Role, SecurityGroup, User};
use thiserror::Error;

/// Failure of a single gateway listing operation.
///
/// `Listing` means the operation failed outright (fatal to the detector that
/// needed it). `Resource` means it failed for one specific resource (the
/// detector skips that resource and continues).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("{operation} failed: {message}")]
    Listing {
        operation: &'static str,
        message: String,
    },

    #[error("{operation} failed for {resource}: {message}")]
    Resource {
        operation: &'static str,
        resource: String,
        message: String,
    },
}

/// Read-only listing operations over the account's resources.
pub trait ResourceGateway {
    fn list_roles(&self) -> Result<Vec<Role>, GatewayError>;

    fn list_attached_policies(&self, role_name: &str)
        -> Result<Vec<PolicyAttachment>, GatewayError>;

    fn list_users(&self) -> Result<Vec<User>, GatewayError>;

    fn list_mfa_devices(&self, user_name: &str) -> Result<Vec<String>, GatewayError>;

    fn list_security_groups(&self) -> Result<Vec<SecurityGroup>, GatewayError>;

    fn list_key_pair_names(&self) -> Result<Vec<String>, GatewayError>;

    /// Key-pair names currently referenced by any declared instance.
    fn list_instance_key_pair_references(&self) -> Result<Vec<String>, GatewayError>;
}
