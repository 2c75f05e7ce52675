//! VPC data model.

use serde::{Deserialize, Serialize};

/// A VPC, the top-level grouping of the inventory tree.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Vpc {
    /// VPC id (`vpc-…`).
    pub id: String,
    /// Friendly name from the `Name` tag, if set.
    pub name: Option<String>,
    /// All associated IPv4 CIDR blocks, primary first.
    pub v4_cidrs: Vec<String>,
    /// Account owning the VPC.
    pub account_id: String,
}
