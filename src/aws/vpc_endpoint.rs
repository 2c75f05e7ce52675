//! VPC-endpoint fetcher (`aws ec2 describe-vpc-endpoints`).

use super::{cli, or_sentinel, parse_response};
use crate::models::defaults::{UNKNOWN, UNKNOWN_VPC};
use crate::models::VpcEndpoint;
use crate::BoxError;
use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct EndpointResponse {
    vpc_endpoints: Vec<RawEndpoint>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawEndpoint {
    vpc_endpoint_id: Option<String>,
    vpc_endpoint_type: Option<String>,
    service_name: Option<String>,
    vpc_id: Option<String>,
    state: Option<String>,
    private_dns_enabled: Option<bool>,
    network_interface_ids: Vec<String>,
}

pub async fn fetch_vpc_endpoints() -> Result<Vec<VpcEndpoint>, BoxError> {
    let raw = cli::run_async("aws ec2 describe-vpc-endpoints --output json").await?;
    let parsed: EndpointResponse = parse_response(&raw, "describe-vpc-endpoints")?;
    Ok(parsed.vpc_endpoints.into_iter().map(normalize).collect())
}

fn normalize(endpoint: RawEndpoint) -> VpcEndpoint {
    VpcEndpoint {
        id: or_sentinel(endpoint.vpc_endpoint_id, "unknown-vpc-endpoint"),
        endpoint_type: or_sentinel(endpoint.vpc_endpoint_type, UNKNOWN),
        service: or_sentinel(endpoint.service_name, UNKNOWN),
        vpc_id: or_sentinel(endpoint.vpc_id, UNKNOWN_VPC),
        state: or_sentinel(endpoint.state, UNKNOWN),
        private_dns: endpoint.private_dns_enabled.unwrap_or(false),
        enis: endpoint.network_interface_ids,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_endpoint_has_no_enis() {
        let endpoint = normalize(RawEndpoint {
            vpc_endpoint_id: Some("vpce-1".into()),
            vpc_endpoint_type: Some("Gateway".into()),
            service_name: Some("com.amazonaws.eu-west-1.s3".into()),
            ..Default::default()
        });
        assert!(endpoint.enis.is_empty());
        assert!(!endpoint.private_dns);
    }
}
