//! Security group data model.

use serde::{Deserialize, Serialize};

/// One security-group rule. Ingress rules list sources in `peers`, egress
/// rules list destinations; a peer is a CIDR, a prefix-list id, or another
/// security-group id.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct SecGroupRule {
    /// Port or port range, collapsed to a single number when from == to.
    pub port: String,
    /// Sources (ingress) or destinations (egress) of the rule.
    pub peers: Vec<String>,
}

/// A security group, referenced by ENIs via their id list.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct SecGroup {
    /// Security-group id (`sg-…`).
    pub id: String,
    /// Id of the VPC the group lives in.
    pub vpc_id: String,
    /// Group name, if set.
    pub name: Option<String>,
    /// Free-text description, if set.
    pub description: Option<String>,
    /// Ordered ingress rules.
    pub ingress: Vec<SecGroupRule>,
    /// Ordered egress rules.
    pub egress: Vec<SecGroupRule>,
}
