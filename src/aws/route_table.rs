//! Route-table fetcher (`aws ec2 describe-route-tables`).

use super::{cli, find_tag, or_sentinel, parse_response, RawTag};
use crate::models::defaults::{NAME_TAG, UNKNOWN, UNKNOWN_SUBNET, UNKNOWN_VPC};
use crate::models::{Route, RouteTable};
use crate::BoxError;
use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RouteTableResponse {
    route_tables: Vec<RawRouteTable>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawRouteTable {
    route_table_id: Option<String>,
    vpc_id: Option<String>,
    associations: Vec<RawAssociation>,
    routes: Vec<RawRoute>,
    tags: Vec<RawTag>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawAssociation {
    main: Option<bool>,
    subnet_id: Option<String>,
    association_state: Option<RawAssociationState>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawAssociationState {
    state: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawRoute {
    destination_cidr_block: Option<String>,
    destination_ipv6_cidr_block: Option<String>,
    destination_prefix_list_id: Option<String>,
    carrier_gateway_id: Option<String>,
    egress_only_internet_gateway_id: Option<String>,
    gateway_id: Option<String>,
    instance_id: Option<String>,
    local_gateway_id: Option<String>,
    nat_gateway_id: Option<String>,
    network_interface_id: Option<String>,
    transit_gateway_id: Option<String>,
    vpc_peering_connection_id: Option<String>,
    state: Option<String>,
    origin: Option<String>,
}

pub async fn fetch_route_tables() -> Result<Vec<RouteTable>, BoxError> {
    let raw = cli::run_async("aws ec2 describe-route-tables --output json").await?;
    let parsed: RouteTableResponse = parse_response(&raw, "describe-route-tables")?;
    Ok(parsed.route_tables.into_iter().map(normalize).collect())
}

fn normalize(table: RawRouteTable) -> RouteTable {
    RouteTable {
        id: or_sentinel(table.route_table_id, "unknown-route-table"),
        name: find_tag(&table.tags, NAME_TAG),
        is_main: table.associations.iter().any(|a| a.main == Some(true)),
        vpc_id: or_sentinel(table.vpc_id, UNKNOWN_VPC),
        subnet_associations: table
            .associations
            .into_iter()
            .filter(|a| {
                a.main != Some(true)
                    && a.association_state
                        .as_ref()
                        .and_then(|s| s.state.as_deref())
                        == Some("associated")
            })
            .map(|a| or_sentinel(a.subnet_id, UNKNOWN_SUBNET))
            .collect(),
        routes: table.routes.into_iter().map(normalize_route).collect(),
    }
}

fn normalize_route(route: RawRoute) -> Route {
    // Destination and next-hop fall through a fixed precedence, matching the
    // order the provider populates at most one of these fields.
    let destination = route
        .destination_cidr_block
        .or(route.destination_ipv6_cidr_block)
        .or(route.destination_prefix_list_id)
        .unwrap_or_else(|| UNKNOWN.to_string());
    let via = route
        .carrier_gateway_id
        .or(route.egress_only_internet_gateway_id)
        .or(route.gateway_id)
        .or(route.instance_id)
        .or(route.local_gateway_id)
        .or(route.nat_gateway_id)
        .or(route.network_interface_id)
        .or(route.transit_gateway_id)
        .or(route.vpc_peering_connection_id)
        .unwrap_or_else(|| UNKNOWN.to_string());
    Route {
        destination,
        via,
        state: or_sentinel(route.state, UNKNOWN),
        propagated: route.origin.as_deref() == Some("EnableVgwRoutePropagation"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_flag_from_associations() {
        let table = normalize(RawRouteTable {
            associations: vec![RawAssociation {
                main: Some(true),
                ..Default::default()
            }],
            ..Default::default()
        });
        assert!(table.is_main);
        assert!(
            table.subnet_associations.is_empty(),
            "main association carries no subnet"
        );
    }

    #[test]
    fn test_only_associated_subnets_kept() {
        let table = normalize(RawRouteTable {
            associations: vec![
                RawAssociation {
                    main: Some(false),
                    subnet_id: Some("subnet-1".into()),
                    association_state: Some(RawAssociationState {
                        state: Some("associated".into()),
                    }),
                },
                RawAssociation {
                    main: Some(false),
                    subnet_id: Some("subnet-2".into()),
                    association_state: Some(RawAssociationState {
                        state: Some("disassociated".into()),
                    }),
                },
            ],
            ..Default::default()
        });
        assert_eq!(table.subnet_associations, vec!["subnet-1"]);
    }

    #[test]
    fn test_route_via_precedence() {
        let route = normalize_route(RawRoute {
            destination_cidr_block: Some("0.0.0.0/0".into()),
            gateway_id: Some("igw-1".into()),
            nat_gateway_id: Some("nat-1".into()),
            state: Some("active".into()),
            ..Default::default()
        });
        assert_eq!(route.via, "igw-1", "gateway id beats nat gateway id");
    }

    #[test]
    fn test_propagated_flag() {
        let route = normalize_route(RawRoute {
            origin: Some("EnableVgwRoutePropagation".into()),
            ..Default::default()
        });
        assert!(route.propagated);
    }
}
