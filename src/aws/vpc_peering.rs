//! VPC-peering fetcher (`aws ec2 describe-vpc-peering-connections`).

use super::{cli, find_tag, or_sentinel, parse_response, RawTag};
use crate::models::defaults::{LOGICAL_ID_TAG, NAME_TAG, UNKNOWN, UNKNOWN_ACCOUNT, UNKNOWN_VPC};
use crate::models::{PeeringVpcInfo, VpcPeering};
use crate::BoxError;
use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct PeeringResponse {
    vpc_peering_connections: Vec<RawPeering>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawPeering {
    vpc_peering_connection_id: Option<String>,
    status: Option<RawStatus>,
    requester_vpc_info: Option<RawVpcInfo>,
    accepter_vpc_info: Option<RawVpcInfo>,
    tags: Vec<RawTag>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawStatus {
    code: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawVpcInfo {
    vpc_id: Option<String>,
    owner_id: Option<String>,
    cidr_block_set: Vec<RawCidr>,
    ipv6_cidr_block_set: Vec<RawIpv6Cidr>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawCidr {
    cidr_block: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawIpv6Cidr {
    ipv6_cidr_block: Option<String>,
}

pub async fn fetch_vpc_peerings() -> Result<Vec<VpcPeering>, BoxError> {
    let raw = cli::run_async("aws ec2 describe-vpc-peering-connections --output json").await?;
    let parsed: PeeringResponse = parse_response(&raw, "describe-vpc-peering-connections")?;
    Ok(parsed
        .vpc_peering_connections
        .into_iter()
        .map(normalize)
        .collect())
}

fn normalize(pcx: RawPeering) -> VpcPeering {
    VpcPeering {
        id: or_sentinel(pcx.vpc_peering_connection_id, "unknown-vpc-peering"),
        name: find_tag(&pcx.tags, NAME_TAG),
        logical_id: find_tag(&pcx.tags, LOGICAL_ID_TAG),
        status: pcx
            .status
            .and_then(|s| s.code)
            .unwrap_or_else(|| UNKNOWN.to_string()),
        requester: normalize_vpc_info(pcx.requester_vpc_info.unwrap_or_default()),
        accepter: normalize_vpc_info(pcx.accepter_vpc_info.unwrap_or_default()),
    }
}

fn normalize_vpc_info(info: RawVpcInfo) -> PeeringVpcInfo {
    let mut cidrs: Vec<String> = info
        .cidr_block_set
        .into_iter()
        .map(|c| or_sentinel(c.cidr_block, "unknown-cidr"))
        .collect();
    cidrs.extend(
        info.ipv6_cidr_block_set
            .into_iter()
            .map(|c| or_sentinel(c.ipv6_cidr_block, "unknown-cidr")),
    );
    PeeringVpcInfo {
        cidrs,
        vpc_id: or_sentinel(info.vpc_id, UNKNOWN_VPC),
        account: or_sentinel(info.owner_id, UNKNOWN_ACCOUNT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_sides_normalized() {
        let pcx = normalize(RawPeering {
            vpc_peering_connection_id: Some("pcx-1".into()),
            status: Some(RawStatus {
                code: Some("active".into()),
            }),
            requester_vpc_info: Some(RawVpcInfo {
                vpc_id: Some("vpc-1".into()),
                owner_id: Some("111111111111".into()),
                cidr_block_set: vec![RawCidr {
                    cidr_block: Some("10.0.0.0/16".into()),
                }],
                ..Default::default()
            }),
            accepter_vpc_info: None,
            ..Default::default()
        });
        assert_eq!(pcx.status, "active");
        assert_eq!(pcx.requester.vpc_id, "vpc-1");
        assert_eq!(pcx.requester.cidrs, vec!["10.0.0.0/16"]);
        assert_eq!(pcx.accepter.vpc_id, "unknown-vpc", "missing side defaults");
    }
}
