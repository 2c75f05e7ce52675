//! Network ACL data model.

use serde::{Deserialize, Serialize};

/// One ordered NACL entry (ingress or egress).
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct NaclEntry {
    /// Rule number; lower numbers are evaluated first.
    pub rule_number: i64,
    /// Source (ingress) or destination (egress) CIDRs, v4 and v6 joined
    /// with a comma when both are present.
    pub cidr: String,
    /// Destination ports, `None` meaning any port.
    pub dest_ports: Option<String>,
    /// `allow` or `deny`.
    pub action: String,
}

/// A network ACL. With zero associated subnets it attaches beneath its VPC,
/// otherwise beneath each associated subnet.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Nacl {
    /// ACL id (`acl-…`).
    pub id: String,
    /// Id of the VPC the ACL belongs to.
    pub vpc_id: String,
    /// CloudFormation logical id, if tagged.
    pub logical_id: Option<String>,
    /// Ids of subnets explicitly associated with this ACL.
    pub associated_subnets: Vec<String>,
    /// Whether this is the VPC's default ACL.
    pub is_default: bool,
    /// Ordered ingress entries.
    pub ingress: Vec<NaclEntry>,
    /// Ordered egress entries.
    pub egress: Vec<NaclEntry>,
}
