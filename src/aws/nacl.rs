//! Network ACL fetcher (`aws ec2 describe-network-acls`).

use super::{cli, find_tag, or_sentinel, parse_response, RawTag};
use crate::models::defaults::{LOGICAL_ID_TAG, UNKNOWN, UNKNOWN_SUBNET, UNKNOWN_VPC};
use crate::models::{Nacl, NaclEntry};
use crate::BoxError;
use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct NaclResponse {
    network_acls: Vec<RawNacl>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawNacl {
    network_acl_id: Option<String>,
    vpc_id: Option<String>,
    is_default: Option<bool>,
    associations: Vec<RawAssociation>,
    entries: Vec<RawEntry>,
    tags: Vec<RawTag>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawAssociation {
    subnet_id: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawEntry {
    rule_number: Option<i64>,
    egress: Option<bool>,
    cidr_block: Option<String>,
    ipv6_cidr_block: Option<String>,
    port_range: Option<RawPortRange>,
    rule_action: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawPortRange {
    from: Option<i64>,
    to: Option<i64>,
}

pub async fn fetch_nacls() -> Result<Vec<Nacl>, BoxError> {
    let raw = cli::run_async("aws ec2 describe-network-acls --output json").await?;
    let parsed: NaclResponse = parse_response(&raw, "describe-network-acls")?;
    Ok(parsed.network_acls.into_iter().map(normalize).collect())
}

fn normalize(nacl: RawNacl) -> Nacl {
    let (egress, ingress): (Vec<_>, Vec<_>) = nacl
        .entries
        .into_iter()
        .partition(|e| e.egress == Some(true));
    let ordered = |entries: Vec<RawEntry>| {
        let mut entries: Vec<NaclEntry> = entries.into_iter().map(normalize_entry).collect();
        entries.sort_by_key(|e| e.rule_number);
        entries
    };
    Nacl {
        id: or_sentinel(nacl.network_acl_id, "unknown-nacl"),
        vpc_id: or_sentinel(nacl.vpc_id, UNKNOWN_VPC),
        logical_id: find_tag(&nacl.tags, LOGICAL_ID_TAG),
        associated_subnets: nacl
            .associations
            .into_iter()
            .map(|a| or_sentinel(a.subnet_id, UNKNOWN_SUBNET))
            .collect(),
        is_default: nacl.is_default.unwrap_or(false),
        ingress: ordered(ingress),
        egress: ordered(egress),
    }
}

fn normalize_entry(entry: RawEntry) -> NaclEntry {
    NaclEntry {
        rule_number: entry.rule_number.unwrap_or(-1),
        cidr: [
            entry.cidr_block.unwrap_or_default(),
            entry.ipv6_cidr_block.unwrap_or_default(),
        ]
        .iter()
        .filter(|c| !c.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join(","),
        dest_ports: entry.port_range.map(collapse_port_range),
        action: or_sentinel(entry.rule_action, UNKNOWN),
    }
}

// "443" when from == to, "1024-65535" otherwise.
fn collapse_port_range(range: RawPortRange) -> String {
    match (range.from, range.to) {
        (Some(from), Some(to)) if from == to => from.to_string(),
        (from, to) => format!("{}-{}", from.unwrap_or(-1), to.unwrap_or(-1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_partitioned_by_direction() {
        let nacl = normalize(RawNacl {
            entries: vec![
                RawEntry {
                    rule_number: Some(100),
                    egress: Some(false),
                    cidr_block: Some("0.0.0.0/0".into()),
                    rule_action: Some("allow".into()),
                    ..Default::default()
                },
                RawEntry {
                    rule_number: Some(200),
                    egress: Some(true),
                    cidr_block: Some("10.0.0.0/8".into()),
                    rule_action: Some("deny".into()),
                    ..Default::default()
                },
            ],
            ..Default::default()
        });
        assert_eq!(nacl.ingress.len(), 1);
        assert_eq!(nacl.egress.len(), 1);
        assert_eq!(nacl.ingress[0].rule_number, 100);
        assert_eq!(nacl.egress[0].action, "deny");
    }

    #[test]
    fn test_port_range_collapsed() {
        let single = RawPortRange {
            from: Some(443),
            to: Some(443),
        };
        assert_eq!(collapse_port_range(single), "443");
        let range = RawPortRange {
            from: Some(1024),
            to: Some(65535),
        };
        assert_eq!(collapse_port_range(range), "1024-65535");
    }

    #[test]
    fn test_missing_port_range_means_any() {
        let nacl = normalize(RawNacl {
            entries: vec![RawEntry {
                rule_number: Some(100),
                ..Default::default()
            }],
            ..Default::default()
        });
        assert!(nacl.ingress[0].dest_ports.is_none(), "no range = any ports");
    }

    #[test]
    fn test_dual_stack_cidrs_joined() {
        let entry = normalize_entry(RawEntry {
            cidr_block: Some("0.0.0.0/0".into()),
            ipv6_cidr_block: Some("::/0".into()),
            ..Default::default()
        });
        assert_eq!(entry.cidr, "0.0.0.0/0,::/0");
    }
}
