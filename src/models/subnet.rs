//! Subnet data model.

use serde::{Deserialize, Serialize};

/// A subnet inside a VPC. Every network interface is placed in exactly one
/// subnet, which makes subnets the grouping level for ENI accounting.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Subnet {
    /// Subnet id (`subnet-…`).
    pub id: String,
    /// Friendly name from the `Name` tag, if set.
    pub name: Option<String>,
    /// Id of the VPC containing this subnet.
    pub vpc_id: String,
    /// Availability zone.
    pub az: String,
    /// IPv4 CIDR block.
    pub v4_cidr: String,
    /// Number of free IP addresses remaining in the subnet.
    pub available_ips: u32,
}
