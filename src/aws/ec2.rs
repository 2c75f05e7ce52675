//! EC2 instance fetcher (`aws ec2 describe-instances`).

use super::{cli, find_tag, or_sentinel, parse_response, RawTag};
use crate::models::defaults::{
    LOGICAL_ID_TAG, NAME_TAG, UNKNOWN, UNKNOWN_ENI, UNKNOWN_SUBNET, UNKNOWN_VPC,
};
use crate::models::Ec2Instance;
use crate::BoxError;
use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct InstancesResponse {
    reservations: Vec<RawReservation>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawReservation {
    instances: Vec<RawInstance>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawInstance {
    instance_id: Option<String>,
    instance_type: Option<String>,
    state: Option<RawState>,
    vpc_id: Option<String>,
    network_interfaces: Vec<RawInstanceEni>,
    tags: Vec<RawTag>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawState {
    name: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawInstanceEni {
    network_interface_id: Option<String>,
    subnet_id: Option<String>,
}

pub async fn fetch_ec2_instances() -> Result<Vec<Ec2Instance>, BoxError> {
    let raw = cli::run_async("aws ec2 describe-instances --output json").await?;
    let parsed: InstancesResponse = parse_response(&raw, "describe-instances")?;
    Ok(parsed
        .reservations
        .into_iter()
        .flat_map(|r| r.instances)
        .map(normalize)
        .collect())
}

fn normalize(inst: RawInstance) -> Ec2Instance {
    Ec2Instance {
        id: or_sentinel(inst.instance_id, "unknown-ec2-instance"),
        name: find_tag(&inst.tags, NAME_TAG),
        logical_id: find_tag(&inst.tags, LOGICAL_ID_TAG),
        instance_type: or_sentinel(inst.instance_type, UNKNOWN),
        state: inst
            .state
            .and_then(|s| s.name)
            .unwrap_or_else(|| UNKNOWN.to_string()),
        vpc_id: or_sentinel(inst.vpc_id, UNKNOWN_VPC),
        subnets: inst
            .network_interfaces
            .iter()
            .map(|eni| or_sentinel(eni.subnet_id.clone(), UNKNOWN_SUBNET))
            .collect(),
        enis: inst
            .network_interfaces
            .iter()
            .map(|eni| or_sentinel(eni.network_interface_id.clone(), UNKNOWN_ENI))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_eni_ownership() {
        let inst = normalize(RawInstance {
            instance_id: Some("i-1".into()),
            network_interfaces: vec![
                RawInstanceEni {
                    network_interface_id: Some("eni-1".into()),
                    subnet_id: Some("subnet-1".into()),
                },
                RawInstanceEni {
                    network_interface_id: Some("eni-2".into()),
                    subnet_id: Some("subnet-2".into()),
                },
            ],
            ..Default::default()
        });
        assert_eq!(inst.enis, vec!["eni-1", "eni-2"]);
        assert_eq!(inst.subnets, vec!["subnet-1", "subnet-2"]);
    }
}
