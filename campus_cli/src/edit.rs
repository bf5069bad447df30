use std::path::PathBuf;

use campus_routing::{
    edge::{Edge, RoadType},
    graph::{EdgeUpsert, GraphStore},
    node::NodeKind,
    types::NodeId,
};
use clap::Args;
use tracing::{info, warn};

use crate::{map_args::MapArgs, parsers};

#[derive(Debug, Clone, PartialEq)]
pub enum EditOp {
    AddNode {
        x: f64,
        y: f64,
        kind: NodeKind,
    },
    DeleteNode(NodeId),
    MoveNode {
        id: NodeId,
        x: f64,
        y: f64,
    },
    AddEdge {
        u: NodeId,
        v: NodeId,
        /// Planar distance between both nodes when missing.
        distance: Option<f64>,
        road_type: RoadType,
        slope: f64,
    },
    DeleteEdge {
        u: NodeId,
        v: NodeId,
    },
    Undo,
}

#[derive(Args)]
pub struct EditArgs {
    #[command(flatten)]
    map: MapArgs,

    /// Where to write the nodes, defaults to the input file
    #[arg(long)]
    out_nodes: Option<PathBuf>,

    /// Where to write the edges, defaults to the input file
    #[arg(long)]
    out_edges: Option<PathBuf>,

    /// Applies the operations without saving
    #[arg(long)]
    dry_run: bool,

    /// Operations applied in order, e.g. `add-node:10,20,ghost` `add-edge:101,902` `undo`
    #[arg(required = true, value_parser = parsers::parse_edit_op)]
    ops: Vec<EditOp>,
}

pub fn run(args: EditArgs) -> Result<(), anyhow::Error> {
    let mut graph = args.map.load()?;

    let applied = args
        .ops
        .iter()
        .filter(|op| apply(&mut graph, op))
        .count();
    info!("Applied {} of {} edits", applied, args.ops.len());

    if args.dry_run {
        return Ok(());
    }

    let nodes = args.out_nodes.as_ref().unwrap_or(&args.map.nodes);
    let edges = args.out_edges.as_ref().unwrap_or(&args.map.edges);
    graph.save(nodes, edges)?;

    Ok(())
}

/// Returns `false` when the store ignored the operation.
pub fn apply(graph: &mut GraphStore, op: &EditOp) -> bool {
    match *op {
        EditOp::AddNode { x, y, kind } => match graph.add_node(x, y, kind) {
            Some(id) => {
                info!("Added node {} at ({}, {})", id, x, y);
                true
            }
            None => report(false, op),
        },
        EditOp::DeleteNode(id) => report(graph.delete_node(id), op),
        EditOp::MoveNode { id, x, y } => report(graph.move_node(id, x, y), op),
        EditOp::AddEdge {
            u,
            v,
            distance,
            road_type,
            slope,
        } => {
            let Some(distance) = distance
                .map(Into::into)
                .or_else(|| graph.straight_line_distance(u, v))
            else {
                warn!("Cannot add edge {}-{}: unknown node", u, v);
                return false;
            };

            let edge = Edge::new(u, v, distance)
                .with_road_type(road_type)
                .with_slope(slope);
            match graph.add_or_update_edge(edge) {
                EdgeUpsert::Inserted => info!("Added edge {}-{} ({})", u, v, distance),
                EdgeUpsert::Updated => info!("Updated edge {}-{} ({})", u, v, distance),
                EdgeUpsert::Rejected => return report(false, op),
            }
            true
        }
        EditOp::DeleteEdge { u, v } => report(graph.delete_edge(u, v), op),
        EditOp::Undo => report(graph.undo(), op),
    }
}

fn report(applied: bool, op: &EditOp) -> bool {
    if applied {
        info!("Applied {:?}", op);
    } else {
        warn!("Ignored {:?}", op);
    }
    applied
}
