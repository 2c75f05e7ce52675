//! Gateway data models: internet, NAT, virtual-private and transit gateways,
//! plus the VPN plumbing hanging off virtual gateways.

use serde::{Deserialize, Serialize};

/// An internet gateway, attached to zero or more VPCs.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct InternetGateway {
    pub id: String,
    pub name: Option<String>,
    /// VPCs with an `available` attachment.
    pub vpc_ids: Vec<String>,
}

/// A NAT gateway. Placed in one subnet; its ENIs are explicit on the record.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct NatGateway {
    pub id: String,
    pub name: Option<String>,
    pub subnet_id: String,
    pub enis: Vec<String>,
}

/// A customer (on-premises) gateway referenced by VPN connections.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct CustomerGateway {
    pub id: String,
    pub name: Option<String>,
    pub state: String,
    pub gw_type: String,
    pub asn: Option<String>,
    pub ip: String,
}

/// One VPN tunnel endpoint with its telemetry status.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct VpnTunnel {
    pub outside_ip: String,
    pub status: String,
}

/// A site-to-site VPN connection. `customer_gateway` is resolved from
/// `customer_gateway_id` during correlation; not-found stays `None`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct VpnConnection {
    pub id: String,
    pub name: Option<String>,
    pub tunnels: Vec<VpnTunnel>,
    pub customer_gateway_id: Option<String>,
    pub customer_gateway: Option<CustomerGateway>,
    pub vpn_gateway_id: Option<String>,
    pub transit_gateway_id: Option<String>,
    pub state: String,
    pub vpn_type: String,
}

/// A virtual private gateway. `vpn_connections` is filled during correlation
/// by joining VPN connections on `vpn_gateway_id`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct VirtualGateway {
    pub id: String,
    pub name: Option<String>,
    pub logical_id: Option<String>,
    pub asn: Option<i64>,
    pub gw_type: String,
    pub state: String,
    /// VPCs with an `attached` attachment.
    pub vpc_ids: Vec<String>,
    pub vpn_connections: Vec<VpnConnection>,
}

/// A transit gateway, referenced by its attachments.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Tgw {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub state: String,
    pub owner: String,
    pub asn: Option<i64>,
}

/// A transit-gateway attachment. Its ENIs are inferred by the correlator:
/// the managed ENI's description contains the attachment id.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct TgwAttachment {
    pub id: String,
    pub name: Option<String>,
    pub logical_id: Option<String>,
    /// Id of the transit gateway this attachment belongs to.
    pub transit_gateway_id: Option<String>,
    /// Resolved transit gateway, when the id lookup succeeds.
    pub tgw: Option<Tgw>,
    pub state: String,
    pub vpc_id: String,
    /// Subnets of the claimed ENIs; filled during correlation.
    pub subnets: Vec<String>,
    /// Claimed ENI ids; filled during correlation.
    pub enis: Vec<String>,
}
