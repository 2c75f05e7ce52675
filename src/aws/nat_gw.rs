//! NAT-gateway fetcher (`aws ec2 describe-nat-gateways`).

use super::{cli, find_tag, or_sentinel, parse_response, RawTag};
use crate::models::defaults::{NAME_TAG, UNKNOWN_ENI, UNKNOWN_SUBNET};
use crate::models::NatGateway;
use crate::BoxError;
use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct NatGwResponse {
    nat_gateways: Vec<RawNatGw>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawNatGw {
    nat_gateway_id: Option<String>,
    subnet_id: Option<String>,
    nat_gateway_addresses: Vec<RawAddress>,
    tags: Vec<RawTag>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawAddress {
    network_interface_id: Option<String>,
}

pub async fn fetch_nat_gateways() -> Result<Vec<NatGateway>, BoxError> {
    let raw = cli::run_async("aws ec2 describe-nat-gateways --output json").await?;
    let parsed: NatGwResponse = parse_response(&raw, "describe-nat-gateways")?;
    Ok(parsed.nat_gateways.into_iter().map(normalize).collect())
}

fn normalize(gw: RawNatGw) -> NatGateway {
    NatGateway {
        id: or_sentinel(gw.nat_gateway_id, "unknown-nat-gw"),
        name: find_tag(&gw.tags, NAME_TAG),
        subnet_id: or_sentinel(gw.subnet_id, UNKNOWN_SUBNET),
        enis: gw
            .nat_gateway_addresses
            .into_iter()
            .map(|a| or_sentinel(a.network_interface_id, UNKNOWN_ENI))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enis_from_addresses() {
        let gw = normalize(RawNatGw {
            nat_gateway_id: Some("nat-1".into()),
            subnet_id: Some("subnet-1".into()),
            nat_gateway_addresses: vec![RawAddress {
                network_interface_id: Some("eni-1".into()),
            }],
            ..Default::default()
        });
        assert_eq!(gw.enis, vec!["eni-1"]);
        assert_eq!(gw.subnet_id, "subnet-1");
    }
}
