//! Domain models for the AWS network inventory.
//!
//! One immutable record type per resource category, normalized from the raw
//! provider responses with sentinel defaults, plus [`AllResources`] — the
//! frozen snapshot everything downstream reads from:
//! - [`defaults`] - Sentinel constants applied at the fetch boundary
//! - [`Vpc`], [`Subnet`], [`Eni`] - Core placement entities
//! - Gateways, peerings, endpoints, firewalling, routing
//! - Compute and managed-service attachments

pub mod defaults;

mod compute;
mod endpoint;
mod eni;
mod gateway;
mod nacl;
mod peering;
mod route_table;
mod sec_group;
mod service;
mod subnet;
mod vpc;

pub use compute::{Ec2Instance, EcsAttachment, EcsContainer, EcsTask, Lambda};
pub use endpoint::VpcEndpoint;
pub use eni::{Eni, EniIp};
pub use gateway::{
    CustomerGateway, InternetGateway, NatGateway, Tgw, TgwAttachment, VirtualGateway,
    VpnConnection, VpnTunnel,
};

pub use nacl::{Nacl, NaclEntry};
pub use peering::{PeeringVpcInfo, VpcPeering};
pub use route_table::{Route, RouteTable};
pub use sec_group::{SecGroup, SecGroupRule};
pub use service::{ApiGwVpcLink, KafkaCluster, KafkaNode, LoadBalancer, RdsInstance};
pub use subnet::Subnet;
pub use vpc::Vpc;

use serde::{Deserialize, Serialize};

/// The complete fetched snapshot, one collection per resource category.
///
/// Built once per run, frozen after correlation, and only ever read from that
/// point on. Serializable so a whole run can be served from a cache file.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct AllResources {
    pub vpcs: Vec<Vpc>,
    pub subnets: Vec<Subnet>,
    pub enis: Vec<Eni>,
    pub nacls: Vec<Nacl>,
    pub sec_groups: Vec<SecGroup>,
    pub vpc_peerings: Vec<VpcPeering>,
    pub internet_gateways: Vec<InternetGateway>,
    pub nat_gateways: Vec<NatGateway>,
    pub route_tables: Vec<RouteTable>,
    pub vpc_endpoints: Vec<VpcEndpoint>,
    pub ecs_tasks: Vec<EcsTask>,
    pub load_balancers: Vec<LoadBalancer>,
    pub rds_instances: Vec<RdsInstance>,
    pub ec2_instances: Vec<Ec2Instance>,
    pub virtual_gateways: Vec<VirtualGateway>,
    pub vpn_connections: Vec<VpnConnection>,
    pub customer_gateways: Vec<CustomerGateway>,
    pub tgws: Vec<Tgw>,
    pub tgw_attachments: Vec<TgwAttachment>,
    pub lambdas: Vec<Lambda>,
    pub api_gw_vpc_links: Vec<ApiGwVpcLink>,
    pub kafka_nodes: Vec<KafkaNode>,
}
