use crate::{
    edge_direction::EdgeDirection,
    types::{EdgeId, NodeId},
    weighting::Weight,
};

#[derive(Debug, Clone, PartialEq)]
pub struct RoutingPath {
    nodes: Vec<NodeId>,
    edges: Vec<(EdgeId, EdgeDirection)>,
    weight: Weight,
}

impl RoutingPath {
    pub fn new(nodes: Vec<NodeId>, edges: Vec<(EdgeId, EdgeDirection)>, weight: Weight) -> Self {
        RoutingPath {
            nodes,
            edges,
            weight,
        }
    }

    pub fn trivial(node: NodeId) -> Self {
        RoutingPath::new(vec![node], vec![], 0)
    }

    /// Node ids from start to end, both included.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn edges(&self) -> &[(EdgeId, EdgeDirection)] {
        &self.edges
    }

    /// Total search weight in the units of the weighting that found the path.
    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn is_trivial(&self) -> bool {
        self.edges.is_empty()
    }
}
