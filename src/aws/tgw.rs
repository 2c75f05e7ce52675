//! Transit-gateway fetcher (`aws ec2 describe-transit-gateways` and
//! `describe-transit-gateway-attachments`).
//!
//! Attachments come back with empty ENI/subnet lists and an unresolved `tgw`
//! field; the correlator fills both from the ENI list and the gateway list.

use super::{cli, find_tag, or_sentinel, parse_response, RawTag};
use crate::models::defaults::{LOGICAL_ID_TAG, NAME_TAG, UNKNOWN, UNKNOWN_ACCOUNT, UNKNOWN_VPC};
use crate::models::{Tgw, TgwAttachment};
use crate::BoxError;
use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct TgwResponse {
    transit_gateways: Vec<RawTgw>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawTgw {
    transit_gateway_id: Option<String>,
    description: Option<String>,
    state: Option<String>,
    owner_id: Option<String>,
    options: Option<RawOptions>,
    tags: Vec<RawTag>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawOptions {
    amazon_side_asn: Option<i64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct AttachmentResponse {
    transit_gateway_attachments: Vec<RawAttachment>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawAttachment {
    transit_gateway_attachment_id: Option<String>,
    transit_gateway_id: Option<String>,
    resource_type: Option<String>,
    resource_id: Option<String>,
    state: Option<String>,
    tags: Vec<RawTag>,
}

pub async fn fetch_tgws() -> Result<Vec<Tgw>, BoxError> {
    let raw = cli::run_async("aws ec2 describe-transit-gateways --output json").await?;
    let parsed: TgwResponse = parse_response(&raw, "describe-transit-gateways")?;
    Ok(parsed
        .transit_gateways
        .into_iter()
        .map(|tgw| Tgw {
            id: or_sentinel(tgw.transit_gateway_id, "unknown-tgw"),
            name: find_tag(&tgw.tags, NAME_TAG),
            description: tgw.description,
            state: or_sentinel(tgw.state, UNKNOWN),
            owner: or_sentinel(tgw.owner_id, UNKNOWN_ACCOUNT),
            asn: tgw.options.and_then(|o| o.amazon_side_asn),
        })
        .collect())
}

pub async fn fetch_tgw_attachments() -> Result<Vec<TgwAttachment>, BoxError> {
    let raw = cli::run_async("aws ec2 describe-transit-gateway-attachments --output json").await?;
    let parsed: AttachmentResponse = parse_response(&raw, "describe-transit-gateway-attachments")?;
    Ok(parsed
        .transit_gateway_attachments
        .into_iter()
        .map(normalize_attachment)
        .collect())
}

fn normalize_attachment(att: RawAttachment) -> TgwAttachment {
    // Only VPC-type attachments carry a usable VPC id.
    let vpc_id = if att.resource_type.as_deref() == Some("vpc") {
        or_sentinel(att.resource_id, UNKNOWN_VPC)
    } else {
        UNKNOWN_VPC.to_string()
    };
    TgwAttachment {
        id: or_sentinel(att.transit_gateway_attachment_id, "unknown-tgw-attachment"),
        name: find_tag(&att.tags, NAME_TAG),
        logical_id: find_tag(&att.tags, LOGICAL_ID_TAG)
            .or_else(|| find_tag(&att.tags, "logical-id")),
        transit_gateway_id: att.transit_gateway_id,
        tgw: None,
        state: or_sentinel(att.state, UNKNOWN),
        vpc_id,
        subnets: Vec::new(),
        enis: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_vpc_attachment_has_sentinel_vpc() {
        let att = normalize_attachment(RawAttachment {
            transit_gateway_attachment_id: Some("tgw-attach-1".into()),
            resource_type: Some("vpn".into()),
            resource_id: Some("vpn-1".into()),
            ..Default::default()
        });
        assert_eq!(att.vpc_id, "unknown-vpc");
        assert!(att.enis.is_empty(), "ENIs are resolved by the correlator");
    }

    #[test]
    fn test_vpc_attachment_keeps_resource_id() {
        let att = normalize_attachment(RawAttachment {
            resource_type: Some("vpc".into()),
            resource_id: Some("vpc-9".into()),
            ..Default::default()
        });
        assert_eq!(att.vpc_id, "vpc-9");
    }
}
