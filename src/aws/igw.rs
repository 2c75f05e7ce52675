//! Internet-gateway fetcher (`aws ec2 describe-internet-gateways`).

use super::{cli, find_tag, or_sentinel, parse_response, RawTag};
use crate::models::defaults::{NAME_TAG, UNKNOWN_VPC};
use crate::models::InternetGateway;
use crate::BoxError;
use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct IgwResponse {
    internet_gateways: Vec<RawIgw>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawIgw {
    internet_gateway_id: Option<String>,
    attachments: Vec<RawAttachment>,
    tags: Vec<RawTag>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawAttachment {
    vpc_id: Option<String>,
    state: Option<String>,
}

pub async fn fetch_internet_gateways() -> Result<Vec<InternetGateway>, BoxError> {
    let raw = cli::run_async("aws ec2 describe-internet-gateways --output json").await?;
    let parsed: IgwResponse = parse_response(&raw, "describe-internet-gateways")?;
    Ok(parsed.internet_gateways.into_iter().map(normalize).collect())
}

fn normalize(igw: RawIgw) -> InternetGateway {
    InternetGateway {
        id: or_sentinel(igw.internet_gateway_id, "unknown-igw"),
        name: find_tag(&igw.tags, NAME_TAG),
        vpc_ids: igw
            .attachments
            .into_iter()
            .filter(|a| a.state.as_deref() == Some("available"))
            .map(|a| or_sentinel(a.vpc_id, UNKNOWN_VPC))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_available_attachments_kept() {
        let igw = normalize(RawIgw {
            internet_gateway_id: Some("igw-1".into()),
            attachments: vec![
                RawAttachment {
                    vpc_id: Some("vpc-1".into()),
                    state: Some("available".into()),
                },
                RawAttachment {
                    vpc_id: Some("vpc-2".into()),
                    state: Some("detaching".into()),
                },
            ],
            ..Default::default()
        });
        assert_eq!(igw.vpc_ids, vec!["vpc-1"]);
    }
}
