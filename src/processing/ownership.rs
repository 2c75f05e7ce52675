//! Heuristic ENI-ownership correlation.
//!
//! The provider never says which ENIs a load balancer, database or function
//! operates through; the service that created the interface leaves traces in
//! its description, type and owner fields instead. Each function here encodes
//! one service's matching rule over those traces. All rules are pure and
//! total: empty inputs yield empty ownership, nothing ever fails, and input
//! record order is preserved.
//!
//! The rules are reproduced exactly as the services behave, including their
//! known ambiguities. They are heuristics, not authoritative data.

use crate::models::defaults::UNKNOWN_ENI;
use crate::models::{
    AllResources, ApiGwVpcLink, CustomerGateway, EcsTask, Eni, Lambda, LoadBalancer, RdsInstance,
    Tgw, TgwAttachment, VirtualGateway, VpnConnection,
};
use itertools::Itertools;

/// Description the RDS service stamps on every interface it manages.
pub const RDS_ENI_DESCRIPTION: &str = "RDSNetworkInterface";
/// Interface owner recorded on RDS-managed attachments.
pub const RDS_ENI_OWNER: &str = "amazon-rds";
/// Interface type of API-gateway managed interfaces.
pub const API_GW_INTERFACE_TYPE: &str = "api_gateway_managed";

/// Membership-based set intersection, duplicates ignored.
pub fn intersection_of<'a>(a: &'a [String], b: &[String]) -> Vec<&'a String> {
    a.iter().filter(|it| b.contains(it)).collect()
}

/// Run every correlation rule once and return the frozen snapshot.
pub fn correlate(mut all: AllResources) -> AllResources {
    all.load_balancers = correlate_load_balancers(all.load_balancers, &all.enis);
    all.rds_instances = correlate_rds_instances(all.rds_instances, &all.enis);
    all.lambdas = correlate_lambdas(all.lambdas, &all.enis);
    all.tgw_attachments = correlate_tgw_attachments(all.tgw_attachments, &all.tgws, &all.enis);
    all.api_gw_vpc_links = correlate_api_gw_links(all.api_gw_vpc_links, &all.enis);
    all.ecs_tasks = correlate_ecs_tasks(all.ecs_tasks);
    all.vpn_connections = correlate_vpn_connections(all.vpn_connections, &all.customer_gateways);
    all.virtual_gateways = correlate_virtual_gateways(all.virtual_gateways, &all.vpn_connections);
    all
}

/// A load balancer owns every ENI whose description contains its name.
///
/// Known limitation: two load balancers whose names are substrings of each
/// other will both match the same interface. Kept as the service behaves.
pub fn correlate_load_balancers(lbs: Vec<LoadBalancer>, enis: &[Eni]) -> Vec<LoadBalancer> {
    lbs.into_iter()
        .map(|mut lb| {
            let matched: Vec<&Eni> = enis
                .iter()
                .filter(|eni| eni.description.contains(&lb.name))
                .collect();
            lb.enis = matched.iter().map(|eni| eni.id.clone()).collect();
            lb.subnets = matched.iter().map(|eni| eni.subnet_id.clone()).collect();
            lb
        })
        .collect()
}

/// An RDS instance owns the RDS-managed ENIs placed in one of its subnets
/// whose security groups intersect its own.
///
/// Known limitation: databases sharing an identical subnet and security-group
/// assignment cannot be told apart and all claim the same interface.
pub fn correlate_rds_instances(dbs: Vec<RdsInstance>, enis: &[Eni]) -> Vec<RdsInstance> {
    dbs.into_iter()
        .map(|mut db| {
            db.enis = enis
                .iter()
                .filter(|eni| {
                    eni.description == RDS_ENI_DESCRIPTION
                        && eni.interface_owner == RDS_ENI_OWNER
                        && db.subnets.contains(&eni.subnet_id)
                        && !intersection_of(&eni.sec_groups, &db.sec_groups).is_empty()
                })
                .map(|eni| eni.id.clone())
                .collect();
            db
        })
        .collect()
}

/// A function owns the ENIs carrying its generated `ENI-<name>-` marker,
/// restricted to the subnets the function is configured for.
pub fn correlate_lambdas(lambdas: Vec<Lambda>, enis: &[Eni]) -> Vec<Lambda> {
    lambdas
        .into_iter()
        .map(|mut lambda| {
            let marker = format!("ENI-{}-", lambda.id);
            lambda.enis = enis
                .iter()
                .filter(|eni| {
                    eni.description.contains(&marker) && lambda.subnet_ids.contains(&eni.subnet_id)
                })
                .map(|eni| eni.id.clone())
                .collect();
            lambda
        })
        .collect()
}

/// An attachment owns the ENIs whose description contains its id; the
/// transit gateway itself is resolved by id, absence allowed.
pub fn correlate_tgw_attachments(
    attachments: Vec<TgwAttachment>,
    tgws: &[Tgw],
    enis: &[Eni],
) -> Vec<TgwAttachment> {
    attachments
        .into_iter()
        .map(|mut att| {
            let matched: Vec<&Eni> = enis
                .iter()
                .filter(|eni| eni.description.contains(&att.id))
                .collect();
            att.enis = matched.iter().map(|eni| eni.id.clone()).collect();
            att.subnets = matched.iter().map(|eni| eni.subnet_id.clone()).collect();
            att.tgw = att
                .transit_gateway_id
                .as_ref()
                .and_then(|id| tgws.iter().find(|tgw| &tgw.id == id))
                .cloned();
            att
        })
        .collect()
}

/// A VPC link owns the API-gateway managed ENIs tagged with its id.
pub fn correlate_api_gw_links(links: Vec<ApiGwVpcLink>, enis: &[Eni]) -> Vec<ApiGwVpcLink> {
    links
        .into_iter()
        .map(|mut link| {
            link.enis = enis
                .iter()
                .filter(|eni| {
                    eni.interface_type == API_GW_INTERFACE_TYPE && eni.vpc_link_id == link.id
                })
                .map(|eni| eni.id.clone())
                .collect();
            link
        })
        .collect()
}

/// Task-level ENI/subnet sets come from the attachment list; containers
/// resolve their attachment ids through the same list. An attachment id with
/// no match resolves to the unknown-ENI sentinel rather than disappearing.
pub fn correlate_ecs_tasks(tasks: Vec<EcsTask>) -> Vec<EcsTask> {
    tasks
        .into_iter()
        .map(|mut task| {
            task.subnet_ids = task
                .attachments
                .iter()
                .map(|att| att.subnet_id.clone())
                .unique()
                .collect();
            task.enis = task
                .attachments
                .iter()
                .map(|att| att.eni.clone())
                .unique()
                .collect();
            task.containers = task
                .containers
                .into_iter()
                .map(|mut cont| {
                    cont.enis = cont
                        .attachment_ids
                        .iter()
                        .map(|att_id| {
                            task.attachments
                                .iter()
                                .find(|att| &att.id == att_id)
                                .map(|att| att.eni.clone())
                                .unwrap_or_else(|| UNKNOWN_ENI.to_string())
                        })
                        .collect();
                    cont
                })
                .collect();
            task
        })
        .collect()
}

/// Resolve each connection's customer gateway by id. Not-found is absence.
pub fn correlate_vpn_connections(
    vpns: Vec<VpnConnection>,
    customer_gateways: &[CustomerGateway],
) -> Vec<VpnConnection> {
    vpns.into_iter()
        .map(|mut vpn| {
            vpn.customer_gateway = vpn
                .customer_gateway_id
                .as_ref()
                .and_then(|id| customer_gateways.iter().find(|cgw| &cgw.id == id))
                .cloned();
            vpn
        })
        .collect()
}

/// Attach VPN connections to their virtual gateway, a one-to-one id join.
pub fn correlate_virtual_gateways(
    vgws: Vec<VirtualGateway>,
    vpns: &[VpnConnection],
) -> Vec<VirtualGateway> {
    vgws.into_iter()
        .map(|mut vgw| {
            vgw.vpn_connections = vpns
                .iter()
                .filter(|vpn| vpn.vpn_gateway_id.as_deref() == Some(&vgw.id))
                .cloned()
                .collect();
            vgw
        })
        .collect()
}
