//! VPN fetchers (`aws ec2 describe-vpn-gateways`, `describe-vpn-connections`,
//! `describe-customer-gateways`).
//!
//! The three collections are fetched flat; the correlator joins VPN
//! connections onto their virtual gateway and resolves customer gateways.

use super::{cli, find_tag, or_sentinel, parse_response, RawTag};
use crate::models::defaults::{LOGICAL_ID_TAG, NAME_TAG, UNKNOWN, UNKNOWN_IP, UNKNOWN_VPC};
use crate::models::{CustomerGateway, VirtualGateway, VpnConnection, VpnTunnel};
use crate::BoxError;
use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct VpnGatewayResponse {
    vpn_gateways: Vec<RawVpnGateway>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawVpnGateway {
    vpn_gateway_id: Option<String>,
    amazon_side_asn: Option<i64>,
    #[serde(rename = "Type")]
    gw_type: Option<String>,
    state: Option<String>,
    vpc_attachments: Vec<RawVpcAttachment>,
    tags: Vec<RawTag>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawVpcAttachment {
    vpc_id: Option<String>,
    state: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct VpnConnectionResponse {
    vpn_connections: Vec<RawVpnConnection>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawVpnConnection {
    vpn_connection_id: Option<String>,
    customer_gateway_id: Option<String>,
    vpn_gateway_id: Option<String>,
    transit_gateway_id: Option<String>,
    state: Option<String>,
    #[serde(rename = "Type")]
    vpn_type: Option<String>,
    vgw_telemetry: Vec<RawTelemetry>,
    tags: Vec<RawTag>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawTelemetry {
    outside_ip_address: Option<String>,
    status: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct CustomerGatewayResponse {
    customer_gateways: Vec<RawCustomerGateway>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawCustomerGateway {
    customer_gateway_id: Option<String>,
    state: Option<String>,
    #[serde(rename = "Type")]
    gw_type: Option<String>,
    bgp_asn: Option<String>,
    ip_address: Option<String>,
    tags: Vec<RawTag>,
}

pub async fn fetch_virtual_gateways() -> Result<Vec<VirtualGateway>, BoxError> {
    let raw = cli::run_async("aws ec2 describe-vpn-gateways --output json").await?;
    let parsed: VpnGatewayResponse = parse_response(&raw, "describe-vpn-gateways")?;
    Ok(parsed
        .vpn_gateways
        .into_iter()
        .map(|vgw| VirtualGateway {
            id: or_sentinel(vgw.vpn_gateway_id, "unknown-virtual-gateway"),
            name: find_tag(&vgw.tags, NAME_TAG),
            logical_id: find_tag(&vgw.tags, LOGICAL_ID_TAG),
            asn: vgw.amazon_side_asn,
            gw_type: or_sentinel(vgw.gw_type, UNKNOWN),
            state: or_sentinel(vgw.state, UNKNOWN),
            vpc_ids: vgw
                .vpc_attachments
                .into_iter()
                .filter(|a| a.state.as_deref() == Some("attached"))
                .map(|a| or_sentinel(a.vpc_id, UNKNOWN_VPC))
                .collect(),
            vpn_connections: Vec::new(),
        })
        .collect())
}

pub async fn fetch_vpn_connections() -> Result<Vec<VpnConnection>, BoxError> {
    let raw = cli::run_async("aws ec2 describe-vpn-connections --output json").await?;
    let parsed: VpnConnectionResponse = parse_response(&raw, "describe-vpn-connections")?;
    Ok(parsed
        .vpn_connections
        .into_iter()
        .map(|vpn| VpnConnection {
            id: or_sentinel(vpn.vpn_connection_id, "unknown-vpn-connection"),
            name: find_tag(&vpn.tags, NAME_TAG),
            tunnels: vpn
                .vgw_telemetry
                .into_iter()
                .map(|t| VpnTunnel {
                    outside_ip: or_sentinel(t.outside_ip_address, UNKNOWN_IP),
                    status: or_sentinel(t.status, UNKNOWN),
                })
                .collect(),
            customer_gateway_id: vpn.customer_gateway_id,
            customer_gateway: None,
            vpn_gateway_id: vpn.vpn_gateway_id,
            transit_gateway_id: vpn.transit_gateway_id,
            state: or_sentinel(vpn.state, UNKNOWN),
            vpn_type: or_sentinel(vpn.vpn_type, UNKNOWN),
        })
        .collect())
}

pub async fn fetch_customer_gateways() -> Result<Vec<CustomerGateway>, BoxError> {
    let raw = cli::run_async("aws ec2 describe-customer-gateways --output json").await?;
    let parsed: CustomerGatewayResponse = parse_response(&raw, "describe-customer-gateways")?;
    Ok(parsed
        .customer_gateways
        .into_iter()
        .map(|cgw| CustomerGateway {
            id: or_sentinel(cgw.customer_gateway_id, "unknown-customer-gateway"),
            name: find_tag(&cgw.tags, NAME_TAG),
            state: or_sentinel(cgw.state, UNKNOWN),
            gw_type: or_sentinel(cgw.gw_type, UNKNOWN),
            asn: cgw.bgp_asn,
            ip: or_sentinel(cgw.ip_address, UNKNOWN_IP),
        })
        .collect())
}
