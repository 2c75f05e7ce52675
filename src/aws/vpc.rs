//! VPC fetcher (`aws ec2 describe-vpcs`).

use super::{cli, find_tag, or_sentinel, parse_response, RawTag};
use crate::models::defaults::{NAME_TAG, UNKNOWN_ACCOUNT, UNKNOWN_CIDR, UNKNOWN_VPC};
use crate::models::Vpc;
use crate::BoxError;
use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct VpcResponse {
    vpcs: Vec<RawVpc>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawVpc {
    vpc_id: Option<String>,
    cidr_block: Option<String>,
    cidr_block_association_set: Vec<RawCidrAssociation>,
    owner_id: Option<String>,
    tags: Vec<RawTag>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawCidrAssociation {
    cidr_block: Option<String>,
}

pub async fn fetch_vpcs() -> Result<Vec<Vpc>, BoxError> {
    let raw = cli::run_async("aws ec2 describe-vpcs --output json").await?;
    let parsed: VpcResponse = parse_response(&raw, "describe-vpcs")?;
    Ok(parsed.vpcs.into_iter().map(normalize).collect())
}

fn normalize(vpc: RawVpc) -> Vpc {
    let v4_cidrs = if vpc.cidr_block_association_set.is_empty() {
        vec![or_sentinel(vpc.cidr_block, UNKNOWN_CIDR)]
    } else {
        vpc.cidr_block_association_set
            .into_iter()
            .map(|assoc| or_sentinel(assoc.cidr_block, UNKNOWN_CIDR))
            .collect()
    };
    Vpc {
        id: or_sentinel(vpc.vpc_id, UNKNOWN_VPC),
        name: find_tag(&vpc.tags, NAME_TAG),
        v4_cidrs,
        account_id: or_sentinel(vpc.owner_id, UNKNOWN_ACCOUNT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_defaults() {
        let vpc = normalize(RawVpc::default());
        assert_eq!(vpc.id, "unknown-vpc");
        assert_eq!(vpc.v4_cidrs, vec!["unknown-cidr"]);
        assert_eq!(vpc.account_id, "unknown-account");
        assert!(vpc.name.is_none(), "No Name tag means no name");
    }

    #[test]
    fn test_normalize_association_set_wins() {
        let vpc = normalize(RawVpc {
            vpc_id: Some("vpc-1".into()),
            cidr_block: Some("10.0.0.0/16".into()),
            cidr_block_association_set: vec![
                RawCidrAssociation {
                    cidr_block: Some("10.0.0.0/16".into()),
                },
                RawCidrAssociation {
                    cidr_block: Some("10.1.0.0/16".into()),
                },
            ],
            ..Default::default()
        });
        assert_eq!(vpc.v4_cidrs, vec!["10.0.0.0/16", "10.1.0.0/16"]);
    }
}
