//! Compute data models: EC2 instances, ECS tasks and Lambda functions.

use serde::{Deserialize, Serialize};

/// An EC2 instance. ENI ownership is explicit on the provider record.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Ec2Instance {
    pub id: String,
    pub name: Option<String>,
    pub logical_id: Option<String>,
    pub instance_type: String,
    pub state: String,
    pub vpc_id: String,
    pub subnets: Vec<String>,
    pub enis: Vec<String>,
}

/// One ECS task attachment, mapping an attachment id to the ENI and subnet it
/// provisioned. Containers reference attachments by id, not ENIs directly.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct EcsAttachment {
    pub id: String,
    pub eni: String,
    pub subnet_id: String,
}

/// A container inside an ECS task. `enis` is resolved from `attachment_ids`
/// through the task's attachment list during correlation.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct EcsContainer {
    pub arn: String,
    pub name: Option<String>,
    pub status: String,
    pub health: String,
    pub attachment_ids: Vec<String>,
    pub enis: Vec<String>,
}

/// An ECS task with its network attachments and containers.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct EcsTask {
    pub arn: String,
    pub connectivity: String,
    pub subnet_ids: Vec<String>,
    pub enis: Vec<String>,
    pub attachments: Vec<EcsAttachment>,
    pub containers: Vec<EcsContainer>,
}

/// A VPC-attached Lambda function. Functions without a VPC config are dropped
/// at fetch time. ENI ownership is inferred by the correlator from the
/// `ENI-<name>-` marker the service stamps into interface descriptions.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Lambda {
    pub id: String,
    pub runtime: Option<String>,
    pub memory_size: Option<i64>,
    pub vpc_id: String,
    pub subnet_ids: Vec<String>,
    /// Claimed ENI ids; filled during correlation.
    pub enis: Vec<String>,
}
