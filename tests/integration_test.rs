//! Integration tests for aws-network-inventory
//!
//! These tests verify the complete workflow from reading the cache snapshot
//! through correlation to the query graph the renderer walks.

use aws_network_inventory::load_inventory;

#[tokio::test]
async fn test_full_workflow_with_cache() {
    let graph = load_inventory(Some("src/tests/test_data/inventory_test_cache_01.json"))
        .await
        .expect("Failed to read inventory cache");

    let vpcs = graph.vpcs();
    assert_eq!(vpcs.len(), 1, "Expected 1 VPC in test data");
    assert_eq!(vpcs[0].id, "vpc-0a1b2c3d");

    let subnets = graph.subnets_of("vpc-0a1b2c3d");
    assert_eq!(subnets.len(), 2, "Expected 2 subnets in test data");
}

#[tokio::test]
async fn test_load_balancer_correlation_from_cache() {
    let graph = load_inventory(Some("src/tests/test_data/inventory_test_cache_01.json"))
        .await
        .expect("Failed to read inventory cache");

    // The cache stores pre-correlation records with empty ENI lists; the
    // name-in-description rule must fill them on load.
    let lbs = graph.load_balancers_of_subnet("subnet-1");
    assert_eq!(lbs.len(), 1, "Expected web-lb placed in subnet-1");
    assert_eq!(lbs[0].name, "web-lb");
    assert_eq!(lbs[0].enis, vec!["eni-lb1"]);
    assert!(graph.load_balancers_of_subnet("subnet-2").is_empty());
}

#[tokio::test]
async fn test_rds_correlation_from_cache() {
    let graph = load_inventory(Some("src/tests/test_data/inventory_test_cache_01.json"))
        .await
        .expect("Failed to read inventory cache");

    let dbs = graph.rds_of_subnet("subnet-2");
    assert_eq!(dbs.len(), 1, "Expected app-db placed in subnet-2");
    assert_eq!(dbs[0].enis, vec!["eni-rds1"]);
}

#[tokio::test]
async fn test_unaccounted_enis_from_cache() {
    let graph = load_inventory(Some("src/tests/test_data/inventory_test_cache_01.json"))
        .await
        .expect("Failed to read inventory cache");

    let unaccounted = graph.unaccounted_enis_in_subnet("subnet-1");
    assert_eq!(unaccounted.len(), 1, "Only the orphan ENI is unclaimed");
    assert_eq!(unaccounted[0].id, "eni-orphan");
    assert!(
        graph.unaccounted_enis_in_subnet("subnet-2").is_empty(),
        "The RDS claim accounts for every ENI in subnet-2"
    );
}

#[tokio::test]
async fn test_vpc_level_attachments_from_cache() {
    let graph = load_inventory(Some("src/tests/test_data/inventory_test_cache_01.json"))
        .await
        .expect("Failed to read inventory cache");

    let main = graph.main_route_tables_of("vpc-0a1b2c3d");
    assert_eq!(main.len(), 1);
    assert_eq!(main[0].id, "rtb-main");

    assert_eq!(graph.route_tables_of_subnet("subnet-1")[0].id, "rtb-app");
    assert_eq!(graph.internet_gateways_of("vpc-0a1b2c3d")[0].id, "igw-1");
    assert_eq!(graph.vpc_level_nacls_of("vpc-0a1b2c3d")[0].id, "acl-default");
}
