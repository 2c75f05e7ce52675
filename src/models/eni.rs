//! Network interface (ENI) data model.
//!
//! The ENI is the central join entity of the inventory: every higher-level
//! resource with network presence (gateway, load balancer, database, compute
//! instance, serverless function) operates through one or more ENIs. The
//! provider does not expose that ownership directly — the correlator infers it
//! from the fields kept here.

use serde::{Deserialize, Serialize};

/// One IP address bound to an ENI.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct EniIp {
    /// Private IPv4 address.
    pub private: String,
    /// Associated public IP, if one is mapped.
    pub public: Option<String>,
    /// Account owning the public IP association (e.g. `amazon`), if any.
    pub owned_by: Option<String>,
}

/// A network interface, normalized from `describe-network-interfaces`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Eni {
    /// Interface id (`eni-…`).
    pub id: String,
    /// Free-text description. Several owning services stamp a recognizable
    /// marker in here; empty string when the provider omits it.
    pub description: String,
    /// Subnet the interface is placed in. Always populated (sentinel if the
    /// provider response lacked it).
    pub subnet_id: String,
    /// Interface type tag (e.g. `api_gateway_managed`).
    pub interface_type: String,
    /// Service owning the attachment (e.g. `amazon-rds`).
    pub interface_owner: String,
    /// Value of the `VpcLinkId` tag for API-gateway managed interfaces.
    pub vpc_link_id: String,
    /// All IP addresses bound to the interface.
    pub ips: Vec<EniIp>,
    /// Ids of the security groups attached to the interface.
    pub sec_groups: Vec<String>,
}
