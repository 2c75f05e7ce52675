//! Lambda fetcher (`aws lambda list-functions`).
//!
//! Only VPC-attached functions are kept; functions without a VPC config have
//! no network presence to inventory.

use super::{cli, or_sentinel, parse_response};
use crate::models::defaults::UNKNOWN_VPC;
use crate::models::Lambda;
use crate::BoxError;
use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct FunctionsResponse {
    functions: Vec<RawFunction>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawFunction {
    function_name: Option<String>,
    runtime: Option<String>,
    memory_size: Option<i64>,
    vpc_config: Option<RawVpcConfig>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawVpcConfig {
    vpc_id: Option<String>,
    subnet_ids: Vec<String>,
}

pub async fn fetch_lambdas() -> Result<Vec<Lambda>, BoxError> {
    let raw = cli::run_async("aws lambda list-functions --output json").await?;
    let parsed: FunctionsResponse = parse_response(&raw, "list-functions")?;
    Ok(parsed
        .functions
        .into_iter()
        .filter_map(normalize)
        .collect())
}

fn normalize(lambda: RawFunction) -> Option<Lambda> {
    let vpc_config = lambda.vpc_config?;
    Some(Lambda {
        id: or_sentinel(lambda.function_name, "unknown-lambda"),
        runtime: lambda.runtime,
        memory_size: lambda.memory_size,
        vpc_id: or_sentinel(vpc_config.vpc_id, UNKNOWN_VPC),
        subnet_ids: vpc_config.subnet_ids,
        enis: Vec::new(),
    })
}
