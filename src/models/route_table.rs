//! Route table data model.

use serde::{Deserialize, Serialize};

/// One route in a route table.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Route {
    /// Destination CIDR (v4 or v6) or prefix-list id.
    pub destination: String,
    /// Next-hop target (gateway, instance, ENI, peering, …).
    pub via: String,
    /// Route state as reported by the provider.
    pub state: String,
    /// True when the route was propagated by a virtual gateway.
    pub propagated: bool,
}

/// A route table. The main table attaches beneath its VPC; a non-main table
/// attaches beneath each subnet it is associated with and may therefore appear
/// several times in the rendered tree.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RouteTable {
    /// Route-table id (`rtb-…`).
    pub id: String,
    /// Friendly name from the `Name` tag, if set.
    pub name: Option<String>,
    /// Whether this is the VPC's main route table.
    pub is_main: bool,
    /// Id of the VPC the table belongs to.
    pub vpc_id: String,
    /// Ids of subnets explicitly associated with this table.
    pub subnet_associations: Vec<String>,
    /// Ordered routes.
    pub routes: Vec<Route>,
}
