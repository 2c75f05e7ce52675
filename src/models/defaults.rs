//! Sentinel values applied at the fetch boundary.
//!
//! Provider responses legally omit almost any field. Rather than spreading
//! `Option` through every matching predicate, fetchers substitute these
//! sentinels once during normalization; downstream code can then rely on
//! every field being populated. Sentinels are valid-looking but impossible
//! ids, so a heuristic match against one simply never fires.

pub const UNKNOWN: &str = "unknown";
pub const UNKNOWN_VPC: &str = "unknown-vpc";
pub const UNKNOWN_SUBNET: &str = "unknown-subnet";
pub const UNKNOWN_ENI: &str = "unknown-eni";
pub const UNKNOWN_SEC_GROUP: &str = "unknown-sec-group";
pub const UNKNOWN_ACCOUNT: &str = "unknown-account";
pub const UNKNOWN_CIDR: &str = "unknown-cidr";
pub const UNKNOWN_IP: &str = "unknown-ip";
pub const UNKNOWN_VPC_LINK: &str = "unknown-vpc-link";

/// Tag key carrying the human-readable resource name.
pub const NAME_TAG: &str = "Name";
/// Tag key CloudFormation stamps with the template logical id.
pub const LOGICAL_ID_TAG: &str = "aws:cloudformation:logical-id";
/// Tag key linking an API-gateway managed ENI to its VPC link.
pub const VPC_LINK_TAG: &str = "VpcLinkId";
