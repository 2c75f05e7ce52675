//! MSK fetchers (`aws kafka list-clusters`, `list-nodes`).
//!
//! Nodes are listed per cluster, so the owning cluster is known at fetch time
//! and resolved here rather than in the correlator.

use super::{cli, or_sentinel, parse_response};
use crate::models::defaults::{UNKNOWN, UNKNOWN_ENI};
use crate::models::{KafkaCluster, KafkaNode};
use crate::BoxError;
use futures::future::try_join_all;
use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct ClustersResponse {
    cluster_info_list: Vec<RawCluster>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawCluster {
    cluster_arn: Option<String>,
    cluster_name: Option<String>,
    state: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct NodesResponse {
    node_info_list: Vec<RawNode>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawNode {
    #[serde(rename = "NodeARN")]
    node_arn: Option<String>,
    node_type: Option<String>,
    instance_type: Option<String>,
    broker_node_info: Option<RawBrokerInfo>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
struct RawBrokerInfo {
    #[serde(rename = "AttachedENIId")]
    attached_eni_id: Option<String>,
}

pub async fn fetch_kafka_nodes() -> Result<Vec<KafkaNode>, BoxError> {
    let raw = cli::run_async("aws kafka list-clusters --output json").await?;
    let parsed: ClustersResponse = parse_response(&raw, "list-clusters")?;
    let clusters: Vec<KafkaCluster> = parsed
        .cluster_info_list
        .into_iter()
        .map(|c| KafkaCluster {
            arn: or_sentinel(c.cluster_arn, "unknown-kafka-cluster"),
            name: or_sentinel(c.cluster_name, "unknown-kafka-cluster"),
            state: or_sentinel(c.state, "UNKNOWN"),
        })
        .collect();

    let per_cluster = try_join_all(clusters.iter().map(|cluster| fetch_cluster_nodes(cluster))).await?;
    Ok(per_cluster.into_iter().flatten().collect())
}

async fn fetch_cluster_nodes(cluster: &KafkaCluster) -> Result<Vec<KafkaNode>, BoxError> {
    let raw = cli::run_async(&format!(
        "aws kafka list-nodes --cluster-arn '{arn}' --output json",
        arn = cluster.arn
    ))
    .await?;
    let parsed: NodesResponse = parse_response(&raw, "list-nodes")?;
    Ok(parsed
        .node_info_list
        .into_iter()
        .map(|node| KafkaNode {
            id: or_sentinel(node.node_arn, "unknown-kafka-node"),
            node_type: or_sentinel(node.node_type, "UNKNOWN"),
            instance_type: or_sentinel(node.instance_type, UNKNOWN),
            cluster: Some(cluster.clone()),
            eni: node
                .broker_node_info
                .and_then(|info| info.attached_eni_id)
                .unwrap_or_else(|| UNKNOWN_ENI.to_string()),
        })
        .collect())
}
