#[cfg(test)]
pub mod test_graph {
    use crate::{
        edge::{Edge, RoadType},
        graph::{AdjacentEdge, GraphStore},
        node::{Node, NodeCategory, NodeKind},
        types::NodeId,
    };

    /// Everything observable about a store, for exact before/after comparisons.
    #[derive(Debug, PartialEq)]
    pub struct GraphSnapshot {
        nodes: Vec<Node>,
        edges: Vec<Edge>,
        adjacency: Vec<(NodeId, Vec<AdjacentEdge>)>,
    }

    impl GraphSnapshot {
        pub fn of(graph: &GraphStore) -> Self {
            let nodes: Vec<Node> = graph.nodes().cloned().collect();
            let adjacency = nodes
                .iter()
                .map(|node| (node.id, graph.node_edges(node.id).to_vec()))
                .collect();

            GraphSnapshot {
                nodes,
                edges: graph.edges().to_vec(),
                adjacency,
            }
        }
    }

    /// Nodes 1 (0,0), 2 (10,0), 3 (10,10) with flat edges 1-2 (10 m), 2-3 (10 m), 1-3 (20 m).
    pub fn triangle_graph() -> GraphStore {
        GraphStore::from_parts(
            vec![
                Node::new(1, "One", 0.0, 0.0, NodeKind::Visible),
                Node::new(2, "Two", 10.0, 0.0, NodeKind::Visible),
                Node::new(3, "Three", 10.0, 10.0, NodeKind::Visible),
            ],
            vec![
                Edge::new(1, 2, 10.0),
                Edge::new(2, 3, 10.0),
                Edge::new(1, 3, 20.0),
            ],
        )
    }

    /// A dorm (101) and a library (102) joined by three routes:
    ///
    /// - over the hill through 901: 200 m, 15% up then 15% down
    /// - the flat loop through 902 and 903: 290 m
    /// - the stairs through 904: 240 m of flat stairs
    ///
    /// Walking, the hill is shortest, the stairs fastest and the loop easiest.
    pub fn campus_graph() -> GraphStore {
        GraphStore::from_parts(
            vec![
                Node::new(101, "North Dorm", 0.0, 0.0, NodeKind::Visible)
                    .with_category(NodeCategory::Dorm),
                Node::new(102, "Library", 200.0, 0.0, NodeKind::Visible)
                    .with_category(NodeCategory::Library),
                Node::new(901, "Hilltop", 100.0, 0.0, NodeKind::Ghost).with_elevation(15.0),
                Node::new(902, "Loop west", 50.0, 80.0, NodeKind::Ghost),
                Node::new(903, "Loop east", 150.0, 80.0, NodeKind::Ghost),
                Node::new(904, "Stairwell", 100.0, -60.0, NodeKind::Ghost),
            ],
            vec![
                Edge::new(101, 901, 100.0).with_slope(0.15).with_name("Hill road"),
                Edge::new(102, 901, 100.0).with_slope(0.15).with_name("Hill road"),
                Edge::new(101, 902, 95.0).with_road_type(RoadType::Path),
                Edge::new(902, 903, 100.0).with_road_type(RoadType::Path),
                Edge::new(903, 102, 95.0).with_road_type(RoadType::Path),
                Edge::new(101, 904, 120.0).with_road_type(RoadType::Stairs),
                Edge::new(904, 102, 120.0).with_road_type(RoadType::Stairs),
            ],
        )
    }

    /// Two islands with no edge between them.
    pub fn disconnected_graph() -> GraphStore {
        GraphStore::from_parts(
            vec![
                Node::new(1, "A", 0.0, 0.0, NodeKind::Visible),
                Node::new(2, "B", 10.0, 0.0, NodeKind::Visible),
                Node::new(3, "C", 50.0, 0.0, NodeKind::Visible),
                Node::new(4, "D", 60.0, 0.0, NodeKind::Visible),
            ],
            vec![Edge::new(1, 2, 10.0), Edge::new(3, 4, 10.0)],
        )
    }
}
