//! VPC peering data model.

use serde::{Deserialize, Serialize};

/// One side of a peering connection.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct PeeringVpcInfo {
    pub cidrs: Vec<String>,
    pub vpc_id: String,
    pub account: String,
}

/// A VPC peering connection. Rendered under both the requester and the
/// accepter VPC when both are in the inventoried account.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct VpcPeering {
    pub id: String,
    pub name: Option<String>,
    pub logical_id: Option<String>,
    pub status: String,
    pub requester: PeeringVpcInfo,
    pub accepter: PeeringVpcInfo,
}
