//! AWS CLI interaction.
//!
//! This module handles all provider-facing operations:
//! - [`cli`] - Command execution for the `aws` CLI
//! - [`cache`] - Snapshot caching of fetched inventory
//! - [`fetch`] - Parallel fan-out across all resource fetchers
//! - one fetcher module per describe API
//!
//! Fetchers normalize raw responses into the typed models with sentinel
//! defaults and perform no cross-resource correlation.

pub mod cache;
pub mod cli;
pub mod fetch;

mod api_gw;
mod ec2;
mod ecs;
mod elb;
mod eni;
mod igw;
mod kafka;
mod lambda;
mod nacl;
mod nat_gw;
mod rds;
mod route_table;
mod sec_group;
mod subnet;
mod tgw;
mod vpc;
mod vpc_endpoint;
mod vpc_peering;
mod vpns;

pub use cache::read_inventory_cache;
pub use fetch::fetch_all;

use crate::BoxError;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Deserialize a CLI JSON response, naming the failing JSON path on error.
pub(crate) fn parse_response<T: DeserializeOwned>(raw: &str, what: &str) -> Result<T, BoxError> {
    let mut deserializer = serde_json::Deserializer::from_str(raw);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        log::error!("OUTPUT START:\n\n{raw}\n\nOUTPUT END\n");
        format!("Error parsing {what} response: path={} error={}", e.path(), e).into()
    })
}

/// A raw resource tag as returned by the EC2-family APIs.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "PascalCase", default)]
pub(crate) struct RawTag {
    pub key: Option<String>,
    pub value: Option<String>,
}

/// Look up a tag value by key.
pub(crate) fn find_tag(tags: &[RawTag], key: &str) -> Option<String> {
    tags.iter()
        .find(|t| t.key.as_deref() == Some(key))
        .and_then(|t| t.value.clone())
}

/// Replace an absent field with its sentinel.
pub(crate) fn or_sentinel(value: Option<String>, sentinel: &str) -> String {
    value.unwrap_or_else(|| sentinel.to_string())
}
