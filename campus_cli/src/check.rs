use campus_routing::{graph::GraphStore, types::NodeId};
use clap::Args;
use comfy_table::Table;
use tracing::{info, warn};

use crate::map_args::MapArgs;

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    map: MapArgs,

    /// Also lists every destination
    #[arg(short, long)]
    list: bool,
}

pub fn run(args: CheckArgs) -> Result<(), anyhow::Error> {
    let graph = args.map.load()?;

    info!(
        "{} nodes ({} destinations), {} edges",
        graph.node_count(),
        graph.destinations().count(),
        graph.edge_count()
    );

    let dangling = dangling_edges(&graph);
    for (u, v) in &dangling {
        warn!("Edge {}-{} references a missing node", u, v);
    }

    let isolated = isolated_destinations(&graph);
    for id in &isolated {
        warn!("Destination {} has no edges", id);
    }

    if args.list {
        let mut table = Table::new();
        table.set_header(vec!["Id", "Name", "Category", "Position"]);
        for node in graph.destinations() {
            table.add_row(vec![
                node.id.to_string(),
                node.name.clone(),
                node.category.to_string(),
                format!("({}, {}, {})", node.x, node.y, node.z),
            ]);
        }
        println!("{table}");
    }

    Ok(())
}

fn dangling_edges(graph: &GraphStore) -> Vec<(NodeId, NodeId)> {
    graph.dangling_edges().map(|edge| (edge.u, edge.v)).collect()
}

fn isolated_destinations(graph: &GraphStore) -> Vec<NodeId> {
    graph
        .destinations()
        .filter(|node| graph.node_edges(node.id).is_empty())
        .map(|node| node.id)
        .collect()
}
