//! Parallel fetch fan-out across every resource category.
//!
//! Two waves of concurrent fetches joined by a single barrier each: the
//! second wave only exists because the ECS task fetch needs the cluster list
//! from the first. Any single failure aborts the whole run — correlation
//! requires a complete snapshot, partial inventories would misreport
//! ownership.

use super::{
    api_gw, ec2, ecs, elb, eni, igw, kafka, lambda, nacl, nat_gw, rds, route_table, sec_group,
    subnet, tgw, vpc, vpc_endpoint, vpc_peering, vpns,
};
use crate::models::AllResources;
use crate::BoxError;
use futures::try_join;

/// Fetch every resource category and return the frozen snapshot.
///
/// No correlation happens here: heuristic ENI ownership lists and secondary
/// joins are left empty for [`crate::processing::correlate`] to fill.
pub async fn fetch_all() -> Result<AllResources, BoxError> {
    log::info!("#Start fetch_all()");

    let (
        vpcs,
        subnets,
        enis,
        nacls,
        sec_groups,
        vpc_peerings,
        internet_gateways,
        nat_gateways,
        route_tables,
        ecs_clusters,
    ) = try_join!(
        vpc::fetch_vpcs(),
        subnet::fetch_subnets(),
        eni::fetch_enis(),
        nacl::fetch_nacls(),
        sec_group::fetch_security_groups(),
        vpc_peering::fetch_vpc_peerings(),
        igw::fetch_internet_gateways(),
        nat_gw::fetch_nat_gateways(),
        route_table::fetch_route_tables(),
        ecs::fetch_ecs_clusters(),
    )?;

    let (
        ec2_instances,
        vpc_endpoints,
        ecs_tasks,
        load_balancers,
        rds_instances,
        virtual_gateways,
        vpn_connections,
        customer_gateways,
        tgws,
        tgw_attachments,
        lambdas,
        api_gw_vpc_links,
        kafka_nodes,
    ) = try_join!(
        ec2::fetch_ec2_instances(),
        vpc_endpoint::fetch_vpc_endpoints(),
        ecs::fetch_ecs_tasks(&ecs_clusters),
        elb::fetch_load_balancers(),
        rds::fetch_rds_instances(),
        vpns::fetch_virtual_gateways(),
        vpns::fetch_vpn_connections(),
        vpns::fetch_customer_gateways(),
        tgw::fetch_tgws(),
        tgw::fetch_tgw_attachments(),
        lambda::fetch_lambdas(),
        api_gw::fetch_api_gw_vpc_links(),
        kafka::fetch_kafka_nodes(),
    )?;

    log::info!(
        "fetch_all(): {vpcs} vpcs, {subnets} subnets, {enis} enis",
        vpcs = vpcs.len(),
        subnets = subnets.len(),
        enis = enis.len()
    );

    Ok(AllResources {
        vpcs,
        subnets,
        enis,
        nacls,
        sec_groups,
        vpc_peerings,
        internet_gateways,
        nat_gateways,
        route_tables,
        vpc_endpoints,
        ecs_tasks,
        load_balancers,
        rds_instances,
        ec2_instances,
        virtual_gateways,
        vpn_connections,
        customer_gateways,
        tgws,
        tgw_attachments,
        lambdas,
        api_gw_vpc_links,
        kafka_nodes,
    })
}
