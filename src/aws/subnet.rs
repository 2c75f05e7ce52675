//! Subnet fetcher (`aws ec2 describe-subnets`).

use super::{cli, find_tag, or_sentinel, parse_response, RawTag};
use crate::models::defaults::{NAME_TAG, UNKNOWN, UNKNOWN_CIDR, UNKNOWN_SUBNET, UNKNOWN_VPC};
use crate::models::Subnet;
use crate::BoxError;
use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct SubnetResponse {
    subnets: Vec<RawSubnet>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawSubnet {
    subnet_id: Option<String>,
    vpc_id: Option<String>,
    availability_zone: Option<String>,
    cidr_block: Option<String>,
    available_ip_address_count: Option<u32>,
    tags: Vec<RawTag>,
}

pub async fn fetch_subnets() -> Result<Vec<Subnet>, BoxError> {
    let raw = cli::run_async("aws ec2 describe-subnets --output json").await?;
    let parsed: SubnetResponse = parse_response(&raw, "describe-subnets")?;
    Ok(parsed.subnets.into_iter().map(normalize).collect())
}

fn normalize(subnet: RawSubnet) -> Subnet {
    Subnet {
        id: or_sentinel(subnet.subnet_id, UNKNOWN_SUBNET),
        name: find_tag(&subnet.tags, NAME_TAG),
        vpc_id: or_sentinel(subnet.vpc_id, UNKNOWN_VPC),
        az: or_sentinel(subnet.availability_zone, UNKNOWN),
        v4_cidr: or_sentinel(subnet.cidr_block, UNKNOWN_CIDR),
        available_ips: subnet.available_ip_address_count.unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_defaults() {
        let subnet = normalize(RawSubnet::default());
        assert_eq!(subnet.id, "unknown-subnet");
        assert_eq!(subnet.vpc_id, "unknown-vpc");
        assert_eq!(subnet.available_ips, 0);
    }
}
