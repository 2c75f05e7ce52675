//! Security-group fetcher (`aws ec2 describe-security-groups`).

use super::{cli, or_sentinel, parse_response};
use crate::models::defaults::UNKNOWN_VPC;
use crate::models::{SecGroup, SecGroupRule};
use crate::BoxError;
use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct SecGroupResponse {
    security_groups: Vec<RawSecGroup>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawSecGroup {
    group_id: Option<String>,
    group_name: Option<String>,
    description: Option<String>,
    vpc_id: Option<String>,
    ip_permissions: Vec<RawPermission>,
    ip_permissions_egress: Vec<RawPermission>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawPermission {
    from_port: Option<i64>,
    to_port: Option<i64>,
    ip_ranges: Vec<RawIpRange>,
    ipv6_ranges: Vec<RawIpv6Range>,
    prefix_list_ids: Vec<RawPrefixList>,
    user_id_group_pairs: Vec<RawGroupPair>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawIpRange {
    cidr_ip: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawIpv6Range {
    cidr_ipv6: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawPrefixList {
    prefix_list_id: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawGroupPair {
    group_id: Option<String>,
}

pub async fn fetch_security_groups() -> Result<Vec<SecGroup>, BoxError> {
    let raw = cli::run_async("aws ec2 describe-security-groups --output json").await?;
    let parsed: SecGroupResponse = parse_response(&raw, "describe-security-groups")?;
    Ok(parsed.security_groups.into_iter().map(normalize).collect())
}

fn normalize(sg: RawSecGroup) -> SecGroup {
    SecGroup {
        id: or_sentinel(sg.group_id, "unknown-sec-group"),
        vpc_id: or_sentinel(sg.vpc_id, UNKNOWN_VPC),
        name: sg.group_name,
        description: sg.description,
        ingress: sg.ip_permissions.into_iter().map(normalize_rule).collect(),
        egress: sg
            .ip_permissions_egress
            .into_iter()
            .map(normalize_rule)
            .collect(),
    }
}

fn normalize_rule(rule: RawPermission) -> SecGroupRule {
    let port = match (rule.from_port, rule.to_port) {
        (from, to) if from == to => from.unwrap_or(-1).to_string(),
        (from, to) => format!("{}-{}", from.unwrap_or(-1), to.unwrap_or(-1)),
    };
    let mut peers: Vec<String> = Vec::new();
    peers.extend(
        rule.ip_ranges
            .into_iter()
            .map(|ip| or_sentinel(ip.cidr_ip, "unknown-cidr")),
    );
    peers.extend(
        rule.ipv6_ranges
            .into_iter()
            .map(|ip| or_sentinel(ip.cidr_ipv6, "unknown-cidr")),
    );
    peers.extend(
        rule.prefix_list_ids
            .into_iter()
            .map(|list| or_sentinel(list.prefix_list_id, "unknown-prefix-list")),
    );
    peers.extend(
        rule.user_id_group_pairs
            .into_iter()
            .map(|pair| or_sentinel(pair.group_id, "unknown-sec-group")),
    );
    SecGroupRule { port, peers }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_peers_concatenated_in_order() {
        let rule = normalize_rule(RawPermission {
            from_port: Some(443),
            to_port: Some(443),
            ip_ranges: vec![RawIpRange {
                cidr_ip: Some("10.0.0.0/8".into()),
            }],
            ipv6_ranges: vec![RawIpv6Range {
                cidr_ipv6: Some("::/0".into()),
            }],
            prefix_list_ids: vec![RawPrefixList {
                prefix_list_id: Some("pl-1".into()),
            }],
            user_id_group_pairs: vec![RawGroupPair {
                group_id: Some("sg-2".into()),
            }],
        });
        assert_eq!(rule.port, "443");
        assert_eq!(rule.peers, vec!["10.0.0.0/8", "::/0", "pl-1", "sg-2"]);
    }

    #[test]
    fn test_all_traffic_rule_port() {
        // No ports at all means an all-traffic rule; both sides collapse.
        let rule = normalize_rule(RawPermission::default());
        assert_eq!(rule.port, "-1");
    }

    #[test]
    fn test_port_range_kept() {
        let rule = normalize_rule(RawPermission {
            from_port: Some(1024),
            to_port: Some(65535),
            ..Default::default()
        });
        assert_eq!(rule.port, "1024-65535");
    }
}
