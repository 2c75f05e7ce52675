//! API-gateway VPC-link fetcher (`aws apigatewayv2 get-vpc-links`).

use super::{cli, or_sentinel, parse_response};
use crate::models::ApiGwVpcLink;
use crate::BoxError;
use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct VpcLinksResponse {
    items: Vec<RawVpcLink>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawVpcLink {
    vpc_link_id: Option<String>,
    name: Option<String>,
    vpc_link_status: Option<String>,
    subnet_ids: Vec<String>,
}

pub async fn fetch_api_gw_vpc_links() -> Result<Vec<ApiGwVpcLink>, BoxError> {
    let raw = cli::run_async("aws apigatewayv2 get-vpc-links --output json").await?;
    let parsed: VpcLinksResponse = parse_response(&raw, "get-vpc-links")?;
    Ok(parsed
        .items
        .into_iter()
        .map(|link| ApiGwVpcLink {
            id: or_sentinel(link.vpc_link_id, "unknown-apigw-vpclink"),
            name: link.name,
            status: or_sentinel(link.vpc_link_status, "UNKNOWN"),
            subnet_ids: link.subnet_ids,
            enis: Vec::new(),
        })
        .collect())
}
