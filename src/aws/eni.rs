//! Network-interface fetcher (`aws ec2 describe-network-interfaces`).
//!
//! The ENI list is the one every heuristic correlation reads from, so the
//! normalization here is the place where sentinel defaulting matters most:
//! downstream matching predicates assume every field is populated.

use super::{cli, find_tag, or_sentinel, parse_response, RawTag};
use crate::models::defaults::{
    UNKNOWN, UNKNOWN_ENI, UNKNOWN_IP, UNKNOWN_SEC_GROUP, UNKNOWN_SUBNET, UNKNOWN_VPC_LINK,
    VPC_LINK_TAG,
};
use crate::models::{Eni, EniIp};
use crate::BoxError;
use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct EniResponse {
    network_interfaces: Vec<RawEni>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawEni {
    network_interface_id: Option<String>,
    description: Option<String>,
    subnet_id: Option<String>,
    interface_type: Option<String>,
    attachment: Option<RawAttachment>,
    private_ip_addresses: Vec<RawPrivateIp>,
    groups: Vec<RawGroup>,
    tag_set: Vec<RawTag>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawAttachment {
    instance_owner_id: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawPrivateIp {
    private_ip_address: Option<String>,
    association: Option<RawAssociation>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawAssociation {
    public_ip: Option<String>,
    ip_owner_id: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawGroup {
    group_id: Option<String>,
}

pub async fn fetch_enis() -> Result<Vec<Eni>, BoxError> {
    let raw = cli::run_async("aws ec2 describe-network-interfaces --output json").await?;
    let parsed: EniResponse = parse_response(&raw, "describe-network-interfaces")?;
    Ok(parsed.network_interfaces.into_iter().map(normalize).collect())
}

fn normalize(eni: RawEni) -> Eni {
    let interface_owner = eni
        .attachment
        .and_then(|att| att.instance_owner_id)
        .unwrap_or_else(|| UNKNOWN.to_string());
    Eni {
        id: or_sentinel(eni.network_interface_id, UNKNOWN_ENI),
        description: eni.description.unwrap_or_default(),
        subnet_id: or_sentinel(eni.subnet_id, UNKNOWN_SUBNET),
        interface_type: or_sentinel(eni.interface_type, UNKNOWN),
        interface_owner,
        vpc_link_id: find_tag(&eni.tag_set, VPC_LINK_TAG)
            .unwrap_or_else(|| UNKNOWN_VPC_LINK.to_string()),
        ips: eni
            .private_ip_addresses
            .into_iter()
            .map(|ip| {
                let (public, owned_by) = match ip.association {
                    Some(assoc) => (assoc.public_ip, assoc.ip_owner_id),
                    None => (None, None),
                };
                EniIp {
                    private: or_sentinel(ip.private_ip_address, UNKNOWN_IP),
                    public,
                    owned_by,
                }
            })
            .collect(),
        sec_groups: eni
            .groups
            .into_iter()
            .map(|g| or_sentinel(g.group_id, UNKNOWN_SEC_GROUP))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_defaults() {
        let eni = normalize(RawEni::default());
        assert_eq!(eni.id, "unknown-eni");
        assert_eq!(eni.description, "");
        assert_eq!(eni.subnet_id, "unknown-subnet", "subnet id is never absent");
        assert_eq!(eni.interface_owner, "unknown");
        assert_eq!(eni.vpc_link_id, "unknown-vpc-link");
    }

    #[test]
    fn test_normalize_ips_and_groups() {
        let eni = normalize(RawEni {
            network_interface_id: Some("eni-1".into()),
            private_ip_addresses: vec![RawPrivateIp {
                private_ip_address: Some("10.0.0.5".into()),
                association: Some(RawAssociation {
                    public_ip: Some("52.1.2.3".into()),
                    ip_owner_id: Some("amazon".into()),
                }),
            }],
            groups: vec![RawGroup {
                group_id: Some("sg-1".into()),
            }],
            ..Default::default()
        });
        assert_eq!(eni.ips[0].private, "10.0.0.5");
        assert_eq!(eni.ips[0].public.as_deref(), Some("52.1.2.3"));
        assert_eq!(eni.ips[0].owned_by.as_deref(), Some("amazon"));
        assert_eq!(eni.sec_groups, vec!["sg-1"]);
    }

    #[test]
    fn test_vpc_link_tag_extracted() {
        let eni = normalize(RawEni {
            interface_type: Some("api_gateway_managed".into()),
            tag_set: vec![RawTag {
                key: Some("VpcLinkId".into()),
                value: Some("vpclink-abc".into()),
            }],
            ..Default::default()
        });
        assert_eq!(eni.interface_type, "api_gateway_managed");
        assert_eq!(eni.vpc_link_id, "vpclink-abc");
    }
}
