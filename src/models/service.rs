//! Managed-service data models: load balancers, RDS instances, API-gateway
//! VPC links and MSK (Kafka) broker nodes.

use serde::{Deserialize, Serialize};

/// An application/network load balancer. ENI ownership is inferred by the
/// correlator from the load-balancer name appearing in ENI descriptions.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct LoadBalancer {
    pub arn: String,
    pub name: String,
    pub lb_type: String,
    pub vpc_id: String,
    /// Claimed ENI ids; filled during correlation.
    pub enis: Vec<String>,
    /// Subnets of the claimed ENIs; filled during correlation.
    pub subnets: Vec<String>,
}

/// An RDS database instance. ENI ownership is inferred by the correlator from
/// the RDS description/owner markers plus subnet and security-group overlap.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RdsInstance {
    pub id: String,
    pub arn: String,
    pub logical_id: Option<String>,
    pub vpc_id: String,
    /// Subnets of the instance's DB subnet group.
    pub subnets: Vec<String>,
    /// Active VPC security groups assigned to the instance.
    pub sec_groups: Vec<String>,
    /// Claimed ENI ids; filled during correlation.
    pub enis: Vec<String>,
}

/// An API-gateway VPC link. ENI ownership is inferred from the
/// `api_gateway_managed` interface type plus the `VpcLinkId` tag.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ApiGwVpcLink {
    pub id: String,
    pub name: Option<String>,
    pub status: String,
    pub subnet_ids: Vec<String>,
    /// Claimed ENI ids; filled during correlation.
    pub enis: Vec<String>,
}

/// An MSK cluster, referenced by its broker nodes.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct KafkaCluster {
    pub arn: String,
    pub name: String,
    pub state: String,
}

/// One MSK broker node. The broker ENI is explicit on the provider record.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct KafkaNode {
    /// Node ARN.
    pub id: String,
    pub node_type: String,
    pub instance_type: String,
    /// Resolved owning cluster, when the ARN lookup succeeds.
    pub cluster: Option<KafkaCluster>,
    pub eni: String,
}
