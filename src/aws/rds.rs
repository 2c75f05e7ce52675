//! RDS instance fetcher (`aws rds describe-db-instances`).

use super::{cli, find_tag, or_sentinel, parse_response, RawTag};
use crate::models::defaults::{LOGICAL_ID_TAG, UNKNOWN_SUBNET, UNKNOWN_VPC};
use crate::models::RdsInstance;
use crate::BoxError;
use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct DbInstancesResponse {
    #[serde(rename = "DBInstances")]
    db_instances: Vec<RawDbInstance>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawDbInstance {
    #[serde(rename = "DBInstanceIdentifier")]
    db_instance_identifier: Option<String>,
    #[serde(rename = "DBInstanceArn")]
    db_instance_arn: Option<String>,
    #[serde(rename = "DBSubnetGroup")]
    db_subnet_group: Option<RawSubnetGroup>,
    vpc_security_groups: Vec<RawVpcSecGroup>,
    tag_list: Vec<RawTag>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawSubnetGroup {
    vpc_id: Option<String>,
    subnets: Vec<RawGroupSubnet>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawGroupSubnet {
    subnet_identifier: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawVpcSecGroup {
    vpc_security_group_id: Option<String>,
    status: Option<String>,
}

pub async fn fetch_rds_instances() -> Result<Vec<RdsInstance>, BoxError> {
    let raw = cli::run_async("aws rds describe-db-instances --output json").await?;
    let parsed: DbInstancesResponse = parse_response(&raw, "describe-db-instances")?;
    Ok(parsed.db_instances.into_iter().map(normalize).collect())
}

fn normalize(db: RawDbInstance) -> RdsInstance {
    let (vpc_id, subnets) = match db.db_subnet_group {
        Some(group) => (
            or_sentinel(group.vpc_id, UNKNOWN_VPC),
            group
                .subnets
                .into_iter()
                .map(|s| or_sentinel(s.subnet_identifier, UNKNOWN_SUBNET))
                .collect(),
        ),
        None => (UNKNOWN_VPC.to_string(), Vec::new()),
    };
    RdsInstance {
        id: or_sentinel(db.db_instance_identifier, "unknown-rds-instance"),
        arn: or_sentinel(db.db_instance_arn, "unknown-rds-instance"),
        logical_id: find_tag(&db.tag_list, LOGICAL_ID_TAG),
        vpc_id,
        subnets,
        sec_groups: db
            .vpc_security_groups
            .into_iter()
            .filter(|sg| sg.status.as_deref() == Some("active"))
            .map(|sg| or_sentinel(sg.vpc_security_group_id, "unknown-sec-group"))
            .collect(),
        enis: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_active_sec_groups_kept() {
        let db = normalize(RawDbInstance {
            db_instance_identifier: Some("db-1".into()),
            vpc_security_groups: vec![
                RawVpcSecGroup {
                    vpc_security_group_id: Some("sg-1".into()),
                    status: Some("active".into()),
                },
                RawVpcSecGroup {
                    vpc_security_group_id: Some("sg-2".into()),
                    status: Some("removing".into()),
                },
            ],
            ..Default::default()
        });
        assert_eq!(db.sec_groups, vec!["sg-1"]);
    }

    #[test]
    fn test_subnets_from_subnet_group() {
        let db = normalize(RawDbInstance {
            db_subnet_group: Some(RawSubnetGroup {
                vpc_id: Some("vpc-1".into()),
                subnets: vec![RawGroupSubnet {
                    subnet_identifier: Some("subnet-1".into()),
                }],
            }),
            ..Default::default()
        });
        assert_eq!(db.vpc_id, "vpc-1");
        assert_eq!(db.subnets, vec!["subnet-1"]);
    }
}
