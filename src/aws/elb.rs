//! Load-balancer fetcher (`aws elbv2 describe-load-balancers`).

use super::{cli, or_sentinel, parse_response};
use crate::models::defaults::{UNKNOWN, UNKNOWN_VPC};
use crate::models::LoadBalancer;
use crate::BoxError;
use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct LoadBalancerResponse {
    load_balancers: Vec<RawLoadBalancer>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawLoadBalancer {
    load_balancer_arn: Option<String>,
    load_balancer_name: Option<String>,
    #[serde(rename = "Type")]
    lb_type: Option<String>,
    vpc_id: Option<String>,
}

pub async fn fetch_load_balancers() -> Result<Vec<LoadBalancer>, BoxError> {
    let raw = cli::run_async("aws elbv2 describe-load-balancers --output json").await?;
    let parsed: LoadBalancerResponse = parse_response(&raw, "describe-load-balancers")?;
    Ok(parsed
        .load_balancers
        .into_iter()
        .map(|lb| LoadBalancer {
            arn: or_sentinel(lb.load_balancer_arn, "unknown-load-balancer"),
            name: or_sentinel(lb.load_balancer_name, "unknown-load-balancer"),
            lb_type: or_sentinel(lb.lb_type, UNKNOWN),
            vpc_id: or_sentinel(lb.vpc_id, UNKNOWN_VPC),
            enis: Vec::new(),
            subnets: Vec::new(),
        })
        .collect())
}
