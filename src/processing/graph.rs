//! Read-only query surface over the correlated snapshot.
//!
//! [`ResourceGraph`] wraps a post-correlation [`AllResources`] and answers the
//! containment questions the renderer walks: which subnets live in a VPC,
//! which resources attach beneath a subnet, which interfaces nobody claims.
//! Every query is a pure filter over the frozen collections, returns results
//! in input order, and yields an empty list rather than an error when nothing
//! matches.

use crate::models::{
    AllResources, ApiGwVpcLink, Ec2Instance, EcsTask, Eni, InternetGateway, KafkaNode, Lambda,
    LoadBalancer, Nacl, NatGateway, RdsInstance, RouteTable, SecGroup, Subnet, TgwAttachment,
    VirtualGateway, Vpc, VpcEndpoint, VpcPeering,
};
use std::collections::HashSet;

/// The correlated inventory, exposed as parent-to-children queries.
pub struct ResourceGraph {
    all: AllResources,
}

impl ResourceGraph {
    pub fn new(all: AllResources) -> Self {
        Self { all }
    }

    /// The raw snapshot, for queries the graph does not wrap.
    pub fn all(&self) -> &AllResources {
        &self.all
    }

    pub fn vpcs(&self) -> &[Vpc] {
        &self.all.vpcs
    }

    pub fn subnets_of(&self, vpc_id: &str) -> Vec<&Subnet> {
        self.all
            .subnets
            .iter()
            .filter(|subnet| subnet.vpc_id == vpc_id)
            .collect()
    }

    /// The VPC's main route table(s). Non-main tables attach per subnet.
    pub fn main_route_tables_of(&self, vpc_id: &str) -> Vec<&RouteTable> {
        self.all
            .route_tables
            .iter()
            .filter(|table| table.vpc_id == vpc_id && table.is_main)
            .collect()
    }

    pub fn internet_gateways_of(&self, vpc_id: &str) -> Vec<&InternetGateway> {
        self.all
            .internet_gateways
            .iter()
            .filter(|igw| igw.vpc_ids.iter().any(|id| id == vpc_id))
            .collect()
    }

    /// Peerings where the VPC is either the requester or the accepter. A
    /// peering between two inventoried VPCs shows up under both.
    pub fn peerings_of(&self, vpc_id: &str) -> Vec<&VpcPeering> {
        self.all
            .vpc_peerings
            .iter()
            .filter(|peering| {
                peering.requester.vpc_id == vpc_id || peering.accepter.vpc_id == vpc_id
            })
            .collect()
    }

    /// Gateway-type endpoints carry no ENIs, so they attach at the VPC level.
    pub fn vpc_level_endpoints_of(&self, vpc_id: &str) -> Vec<&VpcEndpoint> {
        self.all
            .vpc_endpoints
            .iter()
            .filter(|ep| ep.vpc_id == vpc_id && ep.enis.is_empty())
            .collect()
    }

    /// NACLs with no subnet associations attach at the VPC level.
    pub fn vpc_level_nacls_of(&self, vpc_id: &str) -> Vec<&Nacl> {
        self.all
            .nacls
            .iter()
            .filter(|nacl| nacl.vpc_id == vpc_id && nacl.associated_subnets.is_empty())
            .collect()
    }

    pub fn virtual_gateways_of(&self, vpc_id: &str) -> Vec<&VirtualGateway> {
        self.all
            .virtual_gateways
            .iter()
            .filter(|vgw| vgw.vpc_ids.iter().any(|id| id == vpc_id))
            .collect()
    }

    /// Non-main route tables associated with the subnet. A table associated
    /// with several subnets appears under each of them.
    pub fn route_tables_of_subnet(&self, subnet_id: &str) -> Vec<&RouteTable> {
        self.all
            .route_tables
            .iter()
            .filter(|table| {
                !table.is_main && table.subnet_associations.iter().any(|id| id == subnet_id)
            })
            .collect()
    }

    pub fn nacls_of_subnet(&self, subnet_id: &str) -> Vec<&Nacl> {
        self.all
            .nacls
            .iter()
            .filter(|nacl| nacl.associated_subnets.iter().any(|id| id == subnet_id))
            .collect()
    }

    pub fn nat_gateways_of_subnet(&self, subnet_id: &str) -> Vec<&NatGateway> {
        self.all
            .nat_gateways
            .iter()
            .filter(|nat| nat.subnet_id == subnet_id)
            .collect()
    }

    /// Interface-type endpoints attach under each subnet holding one of
    /// their ENIs.
    pub fn endpoints_of_subnet(&self, subnet_id: &str) -> Vec<&VpcEndpoint> {
        self.all
            .vpc_endpoints
            .iter()
            .filter(|ep| self.any_eni_in_subnet(&ep.enis, subnet_id))
            .collect()
    }

    pub fn load_balancers_of_subnet(&self, subnet_id: &str) -> Vec<&LoadBalancer> {
        self.all
            .load_balancers
            .iter()
            .filter(|lb| lb.subnets.iter().any(|id| id == subnet_id))
            .collect()
    }

    pub fn ecs_tasks_of_subnet(&self, subnet_id: &str) -> Vec<&EcsTask> {
        self.all
            .ecs_tasks
            .iter()
            .filter(|task| task.subnet_ids.iter().any(|id| id == subnet_id))
            .collect()
    }

    /// Databases attach under the subnets their claimed ENIs are placed in,
    /// not under every subnet of their DB subnet group.
    pub fn rds_of_subnet(&self, subnet_id: &str) -> Vec<&RdsInstance> {
        self.all
            .rds_instances
            .iter()
            .filter(|db| self.any_eni_in_subnet(&db.enis, subnet_id))
            .collect()
    }

    pub fn ec2_of_subnet(&self, subnet_id: &str) -> Vec<&Ec2Instance> {
        self.all
            .ec2_instances
            .iter()
            .filter(|inst| inst.subnets.iter().any(|id| id == subnet_id))
            .collect()
    }

    pub fn lambdas_of_subnet(&self, subnet_id: &str) -> Vec<&Lambda> {
        self.all
            .lambdas
            .iter()
            .filter(|lambda| self.any_eni_in_subnet(&lambda.enis, subnet_id))
            .collect()
    }

    pub fn tgw_attachments_of_subnet(&self, subnet_id: &str) -> Vec<&TgwAttachment> {
        self.all
            .tgw_attachments
            .iter()
            .filter(|att| att.subnets.iter().any(|id| id == subnet_id))
            .collect()
    }

    pub fn api_gw_links_of_subnet(&self, subnet_id: &str) -> Vec<&ApiGwVpcLink> {
        self.all
            .api_gw_vpc_links
            .iter()
            .filter(|link| self.any_eni_in_subnet(&link.enis, subnet_id))
            .collect()
    }

    pub fn kafka_nodes_of_subnet(&self, subnet_id: &str) -> Vec<&KafkaNode> {
        self.all
            .kafka_nodes
            .iter()
            .filter(|node| self.eni_is_in_subnet(&node.eni, subnet_id))
            .collect()
    }

    pub fn enis_in_subnet(&self, subnet_id: &str) -> Vec<&Eni> {
        self.all
            .enis
            .iter()
            .filter(|eni| eni.subnet_id == subnet_id)
            .collect()
    }

    pub fn eni(&self, eni_id: &str) -> Option<&Eni> {
        self.all.enis.iter().find(|eni| eni.id == eni_id)
    }

    pub fn sec_groups_of_eni(&self, eni: &Eni) -> Vec<&SecGroup> {
        eni.sec_groups
            .iter()
            .filter_map(|sg_id| self.all.sec_groups.iter().find(|sg| &sg.id == sg_id))
            .collect()
    }

    /// ENIs in the subnet claimed by no owning category.
    ///
    /// Computed as a set difference against the union of every category's
    /// claims, so an ENI claimed ambiguously by two categories still counts
    /// as accounted for. Recomputed on every call: the result depends on all
    /// other categories' claims, which makes caching a correctness hazard.
    pub fn unaccounted_enis_in_subnet(&self, subnet_id: &str) -> Vec<&Eni> {
        let claimed: HashSet<&str> = self.claimed_eni_ids();
        self.enis_in_subnet(subnet_id)
            .into_iter()
            .filter(|eni| !claimed.contains(eni.id.as_str()))
            .collect()
    }

    /// Union of every owning category's claimed ENI ids.
    fn claimed_eni_ids(&self) -> HashSet<&str> {
        let all = &self.all;
        let mut claimed: HashSet<&str> = HashSet::new();
        for nat in &all.nat_gateways {
            claimed.extend(nat.enis.iter().map(String::as_str));
        }
        for ep in &all.vpc_endpoints {
            claimed.extend(ep.enis.iter().map(String::as_str));
        }
        for lb in &all.load_balancers {
            claimed.extend(lb.enis.iter().map(String::as_str));
        }
        for task in &all.ecs_tasks {
            claimed.extend(task.enis.iter().map(String::as_str));
        }
        for db in &all.rds_instances {
            claimed.extend(db.enis.iter().map(String::as_str));
        }
        for inst in &all.ec2_instances {
            claimed.extend(inst.enis.iter().map(String::as_str));
        }
        for lambda in &all.lambdas {
            claimed.extend(lambda.enis.iter().map(String::as_str));
        }
        for att in &all.tgw_attachments {
            claimed.extend(att.enis.iter().map(String::as_str));
        }
        for link in &all.api_gw_vpc_links {
            claimed.extend(link.enis.iter().map(String::as_str));
        }
        for node in &all.kafka_nodes {
            claimed.insert(node.eni.as_str());
        }
        claimed
    }

    fn any_eni_in_subnet(&self, eni_ids: &[String], subnet_id: &str) -> bool {
        eni_ids.iter().any(|id| self.eni_is_in_subnet(id, subnet_id))
    }

    fn eni_is_in_subnet(&self, eni_id: &str, subnet_id: &str) -> bool {
        self.eni(eni_id)
            .map(|eni| eni.subnet_id == subnet_id)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eni_in(id: &str, subnet_id: &str) -> Eni {
        Eni {
            id: id.to_string(),
            subnet_id: subnet_id.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_graph_answers_everything() {
        let graph = ResourceGraph::new(AllResources::default());
        assert!(graph.vpcs().is_empty());
        assert!(graph.subnets_of("vpc-1").is_empty());
        assert!(graph.unaccounted_enis_in_subnet("subnet-1").is_empty());
        assert!(graph.eni("eni-1").is_none());
    }

    #[test]
    fn test_route_table_fan_out() {
        let mut all = AllResources::default();
        all.route_tables = vec![
            RouteTable {
                id: "rtb-main".to_string(),
                vpc_id: "vpc-1".to_string(),
                is_main: true,
                ..Default::default()
            },
            RouteTable {
                id: "rtb-shared".to_string(),
                vpc_id: "vpc-1".to_string(),
                is_main: false,
                subnet_associations: vec!["subnet-1".to_string(), "subnet-2".to_string()],
                ..Default::default()
            },
        ];
        let graph = ResourceGraph::new(all);

        let main = graph.main_route_tables_of("vpc-1");
        assert_eq!(main.len(), 1);
        assert_eq!(main[0].id, "rtb-main");

        // The associated table appears under both subnets, never the VPC.
        assert_eq!(graph.route_tables_of_subnet("subnet-1")[0].id, "rtb-shared");
        assert_eq!(graph.route_tables_of_subnet("subnet-2")[0].id, "rtb-shared");
        assert!(graph.route_tables_of_subnet("subnet-3").is_empty());
    }

    #[test]
    fn test_vpc_level_vs_subnet_level_nacls() {
        let mut all = AllResources::default();
        all.nacls = vec![
            Nacl {
                id: "acl-default".to_string(),
                vpc_id: "vpc-1".to_string(),
                ..Default::default()
            },
            Nacl {
                id: "acl-subnet".to_string(),
                vpc_id: "vpc-1".to_string(),
                associated_subnets: vec!["subnet-1".to_string()],
                ..Default::default()
            },
        ];
        let graph = ResourceGraph::new(all);
        assert_eq!(graph.vpc_level_nacls_of("vpc-1")[0].id, "acl-default");
        assert_eq!(graph.vpc_level_nacls_of("vpc-1").len(), 1);
        assert_eq!(graph.nacls_of_subnet("subnet-1")[0].id, "acl-subnet");
    }

    #[test]
    fn test_endpoint_split_by_eni_presence() {
        let mut all = AllResources::default();
        all.enis = vec![eni_in("eni-1", "subnet-1")];
        all.vpc_endpoints = vec![
            VpcEndpoint {
                id: "vpce-gw".to_string(),
                vpc_id: "vpc-1".to_string(),
                ..Default::default()
            },
            VpcEndpoint {
                id: "vpce-if".to_string(),
                vpc_id: "vpc-1".to_string(),
                enis: vec!["eni-1".to_string()],
                ..Default::default()
            },
        ];
        let graph = ResourceGraph::new(all);
        assert_eq!(graph.vpc_level_endpoints_of("vpc-1")[0].id, "vpce-gw");
        assert_eq!(graph.vpc_level_endpoints_of("vpc-1").len(), 1);
        assert_eq!(graph.endpoints_of_subnet("subnet-1")[0].id, "vpce-if");
    }

    #[test]
    fn test_peering_visible_from_both_sides() {
        let mut all = AllResources::default();
        all.vpc_peerings = vec![VpcPeering {
            id: "pcx-1".to_string(),
            requester: crate::models::PeeringVpcInfo {
                vpc_id: "vpc-1".to_string(),
                ..Default::default()
            },
            accepter: crate::models::PeeringVpcInfo {
                vpc_id: "vpc-2".to_string(),
                ..Default::default()
            },
            ..Default::default()
        }];
        let graph = ResourceGraph::new(all);
        assert_eq!(graph.peerings_of("vpc-1").len(), 1);
        assert_eq!(graph.peerings_of("vpc-2").len(), 1);
        assert!(graph.peerings_of("vpc-3").is_empty());
    }

    #[test]
    fn test_unaccounted_is_set_difference_over_all_claims() {
        let mut all = AllResources::default();
        all.enis = vec![
            eni_in("eni-nat", "subnet-1"),
            eni_in("eni-lb", "subnet-1"),
            eni_in("eni-orphan", "subnet-1"),
            eni_in("eni-elsewhere", "subnet-2"),
        ];
        all.nat_gateways = vec![NatGateway {
            id: "nat-1".to_string(),
            subnet_id: "subnet-1".to_string(),
            enis: vec!["eni-nat".to_string()],
            ..Default::default()
        }];
        all.load_balancers = vec![LoadBalancer {
            name: "lb-1".to_string(),
            enis: vec!["eni-lb".to_string()],
            ..Default::default()
        }];
        let graph = ResourceGraph::new(all);

        let unaccounted = graph.unaccounted_enis_in_subnet("subnet-1");
        assert_eq!(unaccounted.len(), 1);
        assert_eq!(unaccounted[0].id, "eni-orphan");
    }

    #[test]
    fn test_ambiguous_claim_is_never_unaccounted() {
        let mut all = AllResources::default();
        all.enis = vec![eni_in("eni-shared", "subnet-1")];
        all.load_balancers = vec![
            LoadBalancer {
                name: "web-lb".to_string(),
                enis: vec!["eni-shared".to_string()],
                ..Default::default()
            },
            LoadBalancer {
                name: "lb".to_string(),
                enis: vec!["eni-shared".to_string()],
                ..Default::default()
            },
        ];
        let graph = ResourceGraph::new(all);
        assert!(graph.unaccounted_enis_in_subnet("subnet-1").is_empty());
    }

    #[test]
    fn test_coverage_invariant_when_all_claimed() {
        let mut all = AllResources::default();
        all.enis = vec![eni_in("eni-1", "subnet-1"), eni_in("eni-2", "subnet-1")];
        all.ec2_instances = vec![Ec2Instance {
            id: "i-1".to_string(),
            enis: vec!["eni-1".to_string(), "eni-2".to_string()],
            ..Default::default()
        }];
        let graph = ResourceGraph::new(all);
        assert!(graph.unaccounted_enis_in_subnet("subnet-1").is_empty());
    }

    #[test]
    fn test_eni_derived_subnet_attachment() {
        let mut all = AllResources::default();
        all.enis = vec![eni_in("eni-db", "subnet-1")];
        all.rds_instances = vec![RdsInstance {
            id: "db-1".to_string(),
            // DB subnet group spans more subnets than the ENI occupies.
            subnets: vec!["subnet-1".to_string(), "subnet-2".to_string()],
            enis: vec!["eni-db".to_string()],
            ..Default::default()
        }];
        let graph = ResourceGraph::new(all);
        assert_eq!(graph.rds_of_subnet("subnet-1").len(), 1);
        assert!(
            graph.rds_of_subnet("subnet-2").is_empty(),
            "Placement follows the claimed ENI, not the subnet group"
        );
    }

    #[test]
    fn test_sec_group_lookup_skips_unknown_ids() {
        let mut all = AllResources::default();
        all.sec_groups = vec![SecGroup {
            id: "sg-1".to_string(),
            ..Default::default()
        }];
        let mut eni = eni_in("eni-1", "subnet-1");
        eni.sec_groups = vec!["sg-1".to_string(), "sg-gone".to_string()];
        all.enis = vec![eni.clone()];
        let graph = ResourceGraph::new(all);
        let sgs = graph.sec_groups_of_eni(&eni);
        assert_eq!(sgs.len(), 1);
        assert_eq!(sgs[0].id, "sg-1");
    }
}
