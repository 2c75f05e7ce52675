//! ECS fetchers (`aws ecs list-clusters`, `list-tasks`, `describe-tasks`).
//!
//! Tasks are listed per cluster and described in one batch per cluster. The
//! task-level subnet/ENI sets and the container ENI resolution both go through
//! the attachment list and are computed by the correlator, not here.

use super::{cli, or_sentinel, parse_response};
use crate::models::defaults::{UNKNOWN, UNKNOWN_ENI, UNKNOWN_SUBNET};
use crate::models::{EcsAttachment, EcsContainer, EcsTask};
use crate::BoxError;
use futures::future::try_join_all;
use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
struct ClusterListResponse {
    cluster_arns: Vec<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
struct TaskListResponse {
    task_arns: Vec<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
struct TasksResponse {
    tasks: Vec<RawTask>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
struct RawTask {
    task_arn: Option<String>,
    connectivity: Option<String>,
    attachments: Vec<RawAttachment>,
    containers: Vec<RawContainer>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
struct RawAttachment {
    id: Option<String>,
    details: Vec<RawDetail>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
struct RawDetail {
    name: Option<String>,
    value: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
struct RawContainer {
    container_arn: Option<String>,
    name: Option<String>,
    last_status: Option<String>,
    health_status: Option<String>,
    network_interfaces: Vec<RawContainerEni>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
struct RawContainerEni {
    attachment_id: Option<String>,
}

pub async fn fetch_ecs_clusters() -> Result<Vec<String>, BoxError> {
    let raw = cli::run_async("aws ecs list-clusters --output json").await?;
    let parsed: ClusterListResponse = parse_response(&raw, "list-clusters")?;
    Ok(parsed.cluster_arns)
}

pub async fn fetch_ecs_tasks(cluster_arns: &[String]) -> Result<Vec<EcsTask>, BoxError> {
    let per_cluster = try_join_all(cluster_arns.iter().map(|arn| fetch_cluster_tasks(arn))).await?;
    Ok(per_cluster.into_iter().flatten().collect())
}

async fn fetch_cluster_tasks(cluster_arn: &str) -> Result<Vec<EcsTask>, BoxError> {
    let raw = cli::run_async(&format!(
        "aws ecs list-tasks --cluster '{cluster_arn}' --output json"
    ))
    .await?;
    let listed: TaskListResponse = parse_response(&raw, "list-tasks")?;
    if listed.task_arns.is_empty() {
        return Ok(Vec::new());
    }

    let raw = cli::run_async(&format!(
        "aws ecs describe-tasks --cluster '{cluster_arn}' --tasks {tasks} --output json",
        tasks = listed.task_arns.join(" ")
    ))
    .await?;
    let described: TasksResponse = parse_response(&raw, "describe-tasks")?;
    Ok(described.tasks.into_iter().map(normalize).collect())
}

fn normalize(task: RawTask) -> EcsTask {
    EcsTask {
        arn: or_sentinel(task.task_arn, "unknown-task"),
        connectivity: or_sentinel(task.connectivity, UNKNOWN),
        subnet_ids: Vec::new(),
        enis: Vec::new(),
        attachments: task.attachments.into_iter().map(normalize_attachment).collect(),
        containers: task.containers.into_iter().map(normalize_container).collect(),
    }
}

fn normalize_attachment(att: RawAttachment) -> EcsAttachment {
    let detail = |key: &str| {
        att.details
            .iter()
            .find(|d| d.name.as_deref() == Some(key))
            .and_then(|d| d.value.clone())
    };
    EcsAttachment {
        eni: detail("networkInterfaceId").unwrap_or_else(|| UNKNOWN_ENI.to_string()),
        subnet_id: detail("subnetId").unwrap_or_else(|| UNKNOWN_SUBNET.to_string()),
        id: or_sentinel(att.id, UNKNOWN),
    }
}

fn normalize_container(cont: RawContainer) -> EcsContainer {
    EcsContainer {
        arn: or_sentinel(cont.container_arn, "unknown-container"),
        name: cont.name,
        status: or_sentinel(cont.last_status, "UNKNOWN"),
        health: or_sentinel(cont.health_status, "UNKNOWN"),
        attachment_ids: cont
            .network_interfaces
            .into_iter()
            .map(|eni| or_sentinel(eni.attachment_id, UNKNOWN))
            .collect(),
        enis: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachment_details_extracted() {
        let att = normalize_attachment(RawAttachment {
            id: Some("att-1".into()),
            details: vec![
                RawDetail {
                    name: Some("subnetId".into()),
                    value: Some("subnet-1".into()),
                },
                RawDetail {
                    name: Some("networkInterfaceId".into()),
                    value: Some("eni-1".into()),
                },
            ],
        });
        assert_eq!(att.id, "att-1");
        assert_eq!(att.eni, "eni-1");
        assert_eq!(att.subnet_id, "subnet-1");
    }

    #[test]
    fn test_missing_details_default() {
        let att = normalize_attachment(RawAttachment {
            id: Some("att-1".into()),
            details: vec![],
        });
        assert_eq!(att.eni, "unknown-eni");
        assert_eq!(att.subnet_id, "unknown-subnet");
    }

    #[test]
    fn test_container_keeps_attachment_indirection() {
        let cont = normalize_container(RawContainer {
            container_arn: Some("arn:container/1".into()),
            network_interfaces: vec![RawContainerEni {
                attachment_id: Some("att-1".into()),
            }],
            ..Default::default()
        });
        assert_eq!(cont.attachment_ids, vec!["att-1"]);
        assert!(cont.enis.is_empty(), "resolution happens in the correlator");
    }
}
