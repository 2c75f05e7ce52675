//! Hierarchical terminal rendering of the correlated inventory.
//!
//! Walks the graph VPC by VPC and prints a box-drawing tree: VPC-level
//! attachments first, then each subnet with everything placed in it, closing
//! with a warning block for interfaces no category claims. Rendering only
//! reads graph queries; no filtering logic of its own beyond per-subnet ENI
//! narrowing when a resource spans several subnets.

use super::text::{egress_rule_line, ingress_rule_line, make_name, name_suffix, state_colored};
use crate::models::{
    ApiGwVpcLink, Ec2Instance, EcsTask, Eni, InternetGateway, KafkaNode, Lambda, LoadBalancer,
    Nacl, NaclEntry, NatGateway, PeeringVpcInfo, RdsInstance, RouteTable, TgwAttachment,
    VirtualGateway, VpcEndpoint, VpcPeering,
};
use crate::processing::ResourceGraph;
use colored::Colorize;

/// Print the whole inventory tree to stdout.
pub fn render(graph: &ResourceGraph) {
    for vpc in graph.vpcs() {
        let indent = "│".bright_black().to_string();
        println!();
        println!("╒══════════════════════════════════════");
        println!(
            "{indent} {id}{name}",
            id = vpc.id,
            name = name_suffix(vpc.name.as_deref(), None)
        );
        for cidr in &vpc.v4_cidrs {
            println!("{indent}  • {}", cidr.cyan());
        }

        render_route_tables(&indent, &graph.main_route_tables_of(&vpc.id));
        render_internet_gateways(&indent, &graph.internet_gateways_of(&vpc.id));
        render_virtual_gateways(&indent, &graph.virtual_gateways_of(&vpc.id));
        render_peerings(&indent, &graph.peerings_of(&vpc.id), &vpc.id);
        render_endpoints(&indent, &graph.vpc_level_endpoints_of(&vpc.id), None, graph);
        render_nacls(&indent, &graph.vpc_level_nacls_of(&vpc.id));
        render_subnets(&indent, &vpc.id, graph);
    }
}

fn render_route_tables(indent: &str, tables: &[&RouteTable]) {
    let inner = format!("{indent} {}", "│".bright_black());
    for table in tables {
        println!("{indent}{}", "╲".bright_black());
        let main = if table.is_main {
            format!(" [{}]", "VPC Default".yellow())
        } else {
            String::new()
        };
        println!(
            "{inner} {id}{main}{name}",
            id = table.id,
            name = name_suffix(table.name.as_deref(), None)
        );
        for route in &table.routes {
            let propagated = if route.propagated {
                format!(" [{}]", "propagated".bright_black())
            } else {
                String::new()
            };
            println!(
                "{inner}  • {dest} via {via} - {state}{propagated}",
                dest = route.destination.cyan(),
                via = route.via.bright_black(),
                state = state_colored(&route.state, "active")
            );
        }
    }
}

fn render_internet_gateways(indent: &str, igws: &[&InternetGateway]) {
    let inner = format!("{indent} {}", "│".bright_black());
    for igw in igws {
        println!("{indent}{}", "╲".bright_black());
        println!(
            "{inner} {id}{name}",
            id = igw.id,
            name = name_suffix(igw.name.as_deref(), None)
        );
    }
}

fn render_virtual_gateways(indent: &str, vgws: &[&VirtualGateway]) {
    let inner = format!("{indent} {}", "│".bright_black());
    for vgw in vgws {
        println!("{indent}{}", "╲".bright_black());
        println!(
            "{inner} {id}{name} - {state}",
            id = vgw.id,
            name = name_suffix(vgw.name.as_deref(), vgw.logical_id.as_deref()),
            state = state_colored(&vgw.state, "available")
        );
        if let Some(asn) = vgw.asn {
            println!("{inner}   ASN: {}", asn.to_string().bright_black());
        }
        for vpn in &vgw.vpn_connections {
            println!(
                "{inner}   VPN {id}{name} - {state}",
                id = vpn.id,
                name = name_suffix(vpn.name.as_deref(), None),
                state = state_colored(&vpn.state, "available")
            );
            if let Some(cgw) = &vpn.customer_gateway {
                println!(
                    "{inner}     Customer gateway: {id}{name} at {ip}",
                    id = cgw.id,
                    name = name_suffix(cgw.name.as_deref(), None),
                    ip = cgw.ip.cyan()
                );
            }
            for tunnel in &vpn.tunnels {
                println!(
                    "{inner}     • {ip} - {status}",
                    ip = tunnel.outside_ip.cyan(),
                    status = state_colored(&tunnel.status, "UP")
                );
            }
        }
    }
}

fn render_peerings(indent: &str, peerings: &[&VpcPeering], this_vpc: &str) {
    let inner = format!("{indent} {}", "│".bright_black());
    for pcx in peerings {
        println!("{indent}{}", "╲".bright_black());
        println!(
            "{inner} {id}{name} - {status}",
            id = pcx.id,
            name = name_suffix(pcx.name.as_deref(), pcx.logical_id.as_deref()),
            status = state_colored(&pcx.status, "active")
        );
        render_peering_side(&inner, "Requester", &pcx.requester, this_vpc);
        render_peering_side(&inner, "Accepter", &pcx.accepter, this_vpc);
    }
}

fn render_peering_side(inner: &str, label: &str, side: &PeeringVpcInfo, this_vpc: &str) {
    let vpc = if side.vpc_id == this_vpc {
        "This VPC".bright_black().to_string()
    } else {
        format!(
            "{vpc} in account {account}",
            vpc = side.vpc_id.bright_black(),
            account = side.account.yellow()
        )
    };
    println!("{inner}   {label}: {vpc}");
    for cidr in &side.cidrs {
        println!("{inner}     • {}", cidr.cyan());
    }
}

fn render_nacls(indent: &str, nacls: &[&Nacl]) {
    let inner = format!("{indent} {}", "│".bright_black());
    for nacl in nacls {
        println!("{indent}{}", "╲".bright_black());
        let default = if nacl.is_default {
            format!(" [{}]", "VPC Default".yellow())
        } else {
            String::new()
        };
        println!(
            "{inner} {id}{default}{name}",
            id = nacl.id,
            name = name_suffix(nacl.logical_id.as_deref(), None)
        );
        println!("{inner}   Ingress:");
        for entry in &nacl.ingress {
            render_nacl_entry(&inner, entry, "from");
        }
        println!("{inner}   Egress:");
        for entry in &nacl.egress {
            render_nacl_entry(&inner, entry, "to");
        }
    }
}

fn render_nacl_entry(inner: &str, entry: &NaclEntry, direction: &str) {
    let action = if entry.action == "allow" {
        "ALLOW".green()
    } else {
        "DENY".red()
    };
    let ports = entry.dest_ports.as_deref().unwrap_or("any ports");
    println!(
        "{inner}     • {num}: {action} {direction} {cidr} on {ports}",
        num = format!("{:>5}", entry.rule_number).bright_black(),
        cidr = entry.cidr.cyan(),
        ports = ports.cyan()
    );
}

fn render_subnets(indent: &str, vpc_id: &str, graph: &ResourceGraph) {
    let inner = format!("{indent} {}", "│".yellow());
    for subnet in graph.subnets_of(vpc_id) {
        println!("{indent}");
        println!("{indent}{}", "╲".yellow());
        println!(
            "{inner} {id}{name}",
            id = subnet.id,
            name = name_suffix(subnet.name.as_deref(), None)
        );
        println!("{inner}   AZ: {}", subnet.az.bright_black());
        println!(
            "{inner}   CIDR: {cidr} ({ips} available IPs)",
            cidr = subnet.v4_cidr.cyan(),
            ips = subnet.available_ips
        );

        render_route_tables(&inner, &graph.route_tables_of_subnet(&subnet.id));
        render_nacls(&inner, &graph.nacls_of_subnet(&subnet.id));
        render_nat_gateways(&inner, &graph.nat_gateways_of_subnet(&subnet.id), graph);
        render_endpoints(
            &inner,
            &graph.endpoints_of_subnet(&subnet.id),
            Some(&subnet.id),
            graph,
        );
        render_load_balancers(
            &inner,
            &graph.load_balancers_of_subnet(&subnet.id),
            &subnet.id,
            graph,
        );
        render_ecs_tasks(&inner, &graph.ecs_tasks_of_subnet(&subnet.id), graph);
        render_rds_instances(&inner, &graph.rds_of_subnet(&subnet.id), &subnet.id, graph);
        render_ec2_instances(&inner, &graph.ec2_of_subnet(&subnet.id), &subnet.id, graph);
        render_lambdas(&inner, &graph.lambdas_of_subnet(&subnet.id), &subnet.id, graph);
        render_tgw_attachments(
            &inner,
            &graph.tgw_attachments_of_subnet(&subnet.id),
            &subnet.id,
            graph,
        );
        render_api_gw_links(
            &inner,
            &graph.api_gw_links_of_subnet(&subnet.id),
            &subnet.id,
            graph,
        );
        render_kafka_nodes(&inner, &graph.kafka_nodes_of_subnet(&subnet.id), graph);

        let unaccounted = graph.unaccounted_enis_in_subnet(&subnet.id);
        if !unaccounted.is_empty() {
            println!("{inner}");
            println!(
                "{inner}{}",
                format!(
                    "{count} ENIs are unaccounted for in the above list:",
                    count = unaccounted.len()
                )
                .red()
                .bold()
            );
            render_enis(&inner, &unaccounted, graph);
        }
    }
}

fn render_nat_gateways(indent: &str, gws: &[&NatGateway], graph: &ResourceGraph) {
    let inner = format!("{indent} {}", "│".bright_black());
    for gw in gws {
        println!("{indent}{}", "╲".bright_black());
        println!(
            "{inner} {id}{name}",
            id = gw.id,
            name = name_suffix(gw.name.as_deref(), None)
        );
        render_eni_ids(&inner, &gw.enis, None, graph);
    }
}

fn render_endpoints(
    indent: &str,
    endpoints: &[&VpcEndpoint],
    subnet_id: Option<&str>,
    graph: &ResourceGraph,
) {
    let inner = format!("{indent} {}", "│".bright_black());
    for endpoint in endpoints {
        println!("{indent}{}", "╲".bright_black());
        println!(
            "{inner} {id} ({kind}: {service}) - {state}",
            id = endpoint.id,
            kind = endpoint.endpoint_type,
            service = endpoint.service.green(),
            state = state_colored(&endpoint.state, "available")
        );
        if endpoint.endpoint_type == "Interface" {
            println!("{inner}   Private DNS enabled: {}", endpoint.private_dns);
        }
        render_eni_ids(&inner, &endpoint.enis, subnet_id, graph);
    }
}

fn render_load_balancers(
    indent: &str,
    lbs: &[&LoadBalancer],
    subnet_id: &str,
    graph: &ResourceGraph,
) {
    let inner = format!("{indent} {}", "│".red());
    for lb in lbs {
        println!("{indent}{}", "╲".red());
        println!(
            "{inner} Load Balancer {arn} ({name})",
            arn = lb.arn,
            name = lb.name.green()
        );
        println!("{inner}   Type: {}", lb.lb_type);
        render_eni_ids(&inner, &lb.enis, Some(subnet_id), graph);
    }
}

fn render_ecs_tasks(indent: &str, tasks: &[&EcsTask], graph: &ResourceGraph) {
    let inner = format!("{indent} {}", "│".magenta());
    for task in tasks {
        println!("{indent}{}", "╲".magenta());
        println!("{inner} ECS Task ({})", task.arn);
        println!(
            "{inner}   Connectivity: {}",
            state_colored(&task.connectivity, "CONNECTED")
        );

        let deep = format!("{inner} {}", "│".bright_black());
        for container in &task.containers {
            println!("{inner}{}", "╲".bright_black());
            println!(
                "{deep} {arn}{name}",
                arn = container.arn,
                name = name_suffix(container.name.as_deref(), None)
            );
            println!(
                "{deep}   Status: {}",
                state_colored(&container.status, "RUNNING")
            );
            println!(
                "{deep}   Health: {}",
                state_colored(&container.health, "HEALTHY")
            );
            render_eni_ids(&deep, &container.enis, None, graph);
        }
    }
}

fn render_rds_instances(
    indent: &str,
    dbs: &[&RdsInstance],
    subnet_id: &str,
    graph: &ResourceGraph,
) {
    let inner = format!("{indent} {}", "│".blue());
    for db in dbs {
        println!("{indent}{}", "╲".blue());
        println!(
            "{inner} RDS {id}{name}",
            id = db.id,
            name = name_suffix(Some(&db.arn), db.logical_id.as_deref())
        );
        render_eni_ids(&inner, &db.enis, Some(subnet_id), graph);
    }
}

fn render_ec2_instances(
    indent: &str,
    instances: &[&Ec2Instance],
    subnet_id: &str,
    graph: &ResourceGraph,
) {
    let inner = format!("{indent} {}", "│".bright_black());
    for inst in instances {
        println!("{indent}{}", "╲".bright_black());
        println!(
            "{inner} EC2 {id}{name} - {state}",
            id = inst.id,
            name = name_suffix(inst.name.as_deref(), inst.logical_id.as_deref()),
            state = state_colored(&inst.state, "running")
        );
        println!("{inner}   Type: {}", inst.instance_type);
        render_eni_ids(&inner, &inst.enis, Some(subnet_id), graph);
    }
}

fn render_lambdas(indent: &str, lambdas: &[&Lambda], subnet_id: &str, graph: &ResourceGraph) {
    let inner = format!("{indent} {}", "│".bright_black());
    for lambda in lambdas {
        println!("{indent}{}", "╲".bright_black());
        println!("{inner} Lambda {}", lambda.id.green());
        if let Some(runtime) = &lambda.runtime {
            println!("{inner}   Runtime: {}", runtime.bright_black());
        }
        if let Some(memory) = lambda.memory_size {
            println!("{inner}   Memory: {memory} MB");
        }
        render_eni_ids(&inner, &lambda.enis, Some(subnet_id), graph);
    }
}

fn render_tgw_attachments(
    indent: &str,
    attachments: &[&TgwAttachment],
    subnet_id: &str,
    graph: &ResourceGraph,
) {
    let inner = format!("{indent} {}", "│".bright_black());
    for att in attachments {
        println!("{indent}{}", "╲".bright_black());
        println!(
            "{inner} TGW Attachment {id}{name} - {state}",
            id = att.id,
            name = name_suffix(att.name.as_deref(), att.logical_id.as_deref()),
            state = state_colored(&att.state, "available")
        );
        if let Some(tgw) = &att.tgw {
            println!(
                "{inner}   Transit gateway: {id}{name}",
                id = tgw.id,
                name = name_suffix(tgw.name.as_deref(), tgw.description.as_deref())
            );
        }
        render_eni_ids(&inner, &att.enis, Some(subnet_id), graph);
    }
}

fn render_api_gw_links(
    indent: &str,
    links: &[&ApiGwVpcLink],
    subnet_id: &str,
    graph: &ResourceGraph,
) {
    let inner = format!("{indent} {}", "│".bright_black());
    for link in links {
        println!("{indent}{}", "╲".bright_black());
        println!(
            "{inner} API Gateway VPC Link {id}{name} - {status}",
            id = link.id,
            name = name_suffix(link.name.as_deref(), None),
            status = state_colored(&link.status, "AVAILABLE")
        );
        render_eni_ids(&inner, &link.enis, Some(subnet_id), graph);
    }
}

fn render_kafka_nodes(indent: &str, nodes: &[&KafkaNode], graph: &ResourceGraph) {
    let inner = format!("{indent} {}", "│".bright_black());
    for node in nodes {
        println!("{indent}{}", "╲".bright_black());
        let cluster = node
            .cluster
            .as_ref()
            .map(|c| format!(" in {}", c.name.green()))
            .unwrap_or_default();
        println!(
            "{inner} Kafka {kind} node {id}{cluster}",
            kind = node.node_type,
            id = node.id
        );
        println!("{inner}   Instance type: {}", node.instance_type);
        render_eni_ids(&inner, std::slice::from_ref(&node.eni), None, graph);
    }
}

/// Render the ENIs behind a list of claimed ids, optionally narrowed to one
/// subnet when the owner spans several. Unresolvable ids are skipped.
fn render_eni_ids(indent: &str, eni_ids: &[String], subnet_id: Option<&str>, graph: &ResourceGraph) {
    let enis: Vec<&Eni> = eni_ids
        .iter()
        .filter_map(|id| graph.eni(id))
        .filter(|eni| subnet_id.map_or(true, |subnet| eni.subnet_id == subnet))
        .collect();
    render_enis(indent, &enis, graph);
}

fn render_enis(indent: &str, enis: &[&Eni], graph: &ResourceGraph) {
    let first = format!("{indent} {}", "┐".bright_black());
    let inner = format!("{indent} {}", "│".bright_black());
    for eni in enis {
        let description = if eni.description.is_empty() {
            String::new()
        } else {
            format!(" ({})", eni.description.bright_black())
        };
        println!("{first} {id}{description}", id = eni.id);

        for ip in &eni.ips {
            let expr = match &ip.public {
                Some(public) => format!("{} -> {}", ip.private.cyan(), public.cyan()),
                None => ip.private.cyan().to_string(),
            };
            let owner = ip
                .owned_by
                .as_ref()
                .map(|owner| format!(" (managed by {})", owner.yellow()))
                .unwrap_or_default();
            println!("{inner}   • {expr}{owner}");
        }

        render_sec_groups(&inner, &graph.sec_groups_of_eni(eni));
    }
}

fn render_sec_groups(indent: &str, groups: &[&crate::models::SecGroup]) {
    let first = format!("{indent} {}", "┐".bright_black());
    let inner = format!("{indent} {}", "│".bright_black());
    for group in groups {
        let name = make_name(group.name.as_deref(), group.description.as_deref())
            .map(|name| format!(" ({name})"))
            .unwrap_or_default();
        println!("{first} {id}{name}", id = group.id);

        match group.ingress.as_slice() {
            [] => {}
            [rule] => println!("{inner}   Ingress: {}", ingress_rule_line(rule)),
            rules => {
                println!("{inner}   Ingress:");
                for rule in rules {
                    println!("{inner}     • {}", ingress_rule_line(rule));
                }
            }
        }
        match group.egress.as_slice() {
            [] => {}
            [rule] => println!("{inner}   Egress: {}", egress_rule_line(rule)),
            rules => {
                println!("{inner}   Egress:");
                for rule in rules {
                    println!("{inner}     • {}", egress_rule_line(rule));
                }
            }
        }
    }
}
