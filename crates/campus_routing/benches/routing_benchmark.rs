use std::hint::black_box;

use campus_routing::{
    cost_model::CostModel,
    edge::{Edge, RoadType},
    graph::GraphStore,
    node::{Node, NodeKind},
    recommendation::recommend_paths,
    routing::router::Router,
    transport::TransportMode,
    types::NodeId,
    weighting::WeightMode,
};
use criterion::{Criterion, criterion_group, criterion_main};

const SIDE: u32 = 60;

fn grid_id(x: u32, y: u32) -> NodeId {
    y * SIDE + x
}

/// A square street grid with rolling grades and a stairway every few blocks.
fn grid_campus() -> GraphStore {
    let mut nodes = Vec::new();
    let mut edges = Vec::new();

    for y in 0..SIDE {
        for x in 0..SIDE {
            let id = grid_id(x, y);
            nodes.push(Node::new(
                id,
                format!("N{}", id),
                x as f64 * 40.0,
                y as f64 * 40.0,
                NodeKind::Ghost,
            ));

            let slope = ((x * 7 + y * 3) % 11) as f64 / 100.0 - 0.05;
            if x + 1 < SIDE {
                edges.push(Edge::new(id, grid_id(x + 1, y), 40.0).with_slope(slope));
            }
            if y + 1 < SIDE {
                let road_type = if x % 5 == 0 { RoadType::Stairs } else { RoadType::Normal };
                edges.push(
                    Edge::new(id, grid_id(x, y + 1), 40.0)
                        .with_slope(-slope)
                        .with_road_type(road_type),
                );
            }
        }
    }

    GraphStore::from_parts(nodes, edges)
}

fn routing_benchmark(c: &mut Criterion) {
    let graph = grid_campus();
    let model = CostModel::default();
    let router = Router::new(&graph, &model, TransportMode::Walk);
    let end = grid_id(SIDE - 1, SIDE - 1);

    c.bench_function("find_path time", |b| {
        b.iter(|| black_box(router.find_path_with_mode(WeightMode::Time, 0, end)))
    });

    c.bench_function("recommend_paths", |b| {
        b.iter(|| black_box(recommend_paths(&router, 0, end)))
    });

    c.bench_function("add_or_update_edge + undo", |b| {
        let mut graph = grid_campus();
        b.iter(|| {
            graph.add_or_update_edge(Edge::new(0, end, 1.0));
            graph.undo();
        })
    });
}

criterion_group!(benches, routing_benchmark);
criterion_main!(benches);
