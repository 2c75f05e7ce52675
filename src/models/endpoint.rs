//! VPC endpoint data model.

use serde::{Deserialize, Serialize};

/// A VPC endpoint. Gateway endpoints carry no ENIs and attach at the VPC
/// level; interface endpoints attach under whichever subnets their ENIs are
/// placed in.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct VpcEndpoint {
    pub id: String,
    /// `Interface` or `Gateway`.
    pub endpoint_type: String,
    /// Service name the endpoint fronts.
    pub service: String,
    pub vpc_id: String,
    pub state: String,
    pub private_dns: bool,
    /// ENI ids, explicit on the provider record.
    pub enis: Vec<String>,
}
