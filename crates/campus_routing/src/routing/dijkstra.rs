use std::cmp::Ordering;
use std::collections::BinaryHeap;

use fxhash::FxHashMap;
use tracing::debug;

use crate::{
    constants::MAX_WEIGHT,
    edge_direction::EdgeDirection,
    error::RoutingError,
    graph::GraphStore,
    stopwatch::Stopwatch,
    types::{EdgeId, NodeId},
    weighting::{Weight, Weighting},
};

use super::{routing_path::RoutingPath, shortest_path_algorithm::ShortestPathAlgorithm};

#[derive(Eq, Copy, Clone, Debug)]
struct HeapItem {
    node_id: NodeId,
    weight: Weight,
}

impl PartialEq for HeapItem {
    fn eq(&self, other: &HeapItem) -> bool {
        self.weight == other.weight && self.node_id == other.node_id
    }
}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &HeapItem) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flip both keys to make this a min-heap, smaller node ids win ties
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.node_id.cmp(&self.node_id))
    }
}

struct NodeData {
    weight: Weight,
    settled: bool,
    parent: Option<NodeId>,
    edge: Option<(EdgeId, EdgeDirection)>, // Edge from parent to current node
}

impl NodeData {
    fn new() -> Self {
        NodeData {
            weight: MAX_WEIGHT,
            settled: false,
            parent: None,
            edge: None,
        }
    }
}

/// Single source Dijkstra that stops once the target is settled.
///
/// A node's predecessor only changes on a strict improvement, so among equally weighted
/// routes the one discovered first is kept.
pub struct Dijkstra {
    heap: BinaryHeap<HeapItem>,
    data: FxHashMap<NodeId, NodeData>,
}

impl Default for Dijkstra {
    fn default() -> Self {
        Dijkstra::new()
    }
}

impl Dijkstra {
    pub fn new() -> Self {
        Dijkstra {
            heap: BinaryHeap::with_capacity(256),
            data: FxHashMap::default(),
        }
    }

    fn init(&mut self, start: NodeId) {
        self.heap.clear();
        self.data.clear();
        self.heap.push(HeapItem {
            node_id: start,
            weight: 0,
        });
        self.update_node_data(start, 0, None, None);
    }

    fn update_node_data(
        &mut self,
        node: NodeId,
        weight: Weight,
        parent: Option<NodeId>,
        edge: Option<(EdgeId, EdgeDirection)>,
    ) {
        let data = self.data.entry(node).or_insert_with(NodeData::new);
        data.weight = weight;
        data.settled = false;
        data.parent = parent;
        data.edge = edge;
    }

    fn set_settled(&mut self, node: NodeId) {
        if let Some(data) = self.data.get_mut(&node) {
            data.settled = true;
        }
    }

    #[inline(always)]
    fn is_settled(&self, node: NodeId) -> bool {
        self.data.get(&node).is_some_and(|data| data.settled)
    }

    #[inline(always)]
    fn current_shortest_weight(&self, node: NodeId) -> Weight {
        self.data.get(&node).map_or(MAX_WEIGHT, |data| data.weight)
    }

    fn build_path(&self, end: NodeId) -> RoutingPath {
        let mut nodes = vec![end];
        let mut edges = Vec::new();

        let mut node = end;
        while let Some(data) = self.data.get(&node) {
            let (Some(parent), Some(edge)) = (data.parent, data.edge) else {
                break;
            };

            nodes.push(parent);
            edges.push(edge);
            node = parent;
        }

        nodes.reverse();
        edges.reverse();

        RoutingPath::new(nodes, edges, self.current_shortest_weight(end))
    }
}

impl ShortestPathAlgorithm for Dijkstra {
    fn calc_path(
        &mut self,
        graph: &GraphStore,
        weighting: &impl Weighting,
        start: NodeId,
        end: NodeId,
    ) -> Result<Option<RoutingPath>, RoutingError> {
        let mut stopwatch = Stopwatch::start("dijkstra/calc_path");

        for node in [start, end] {
            if !graph.contains_node(node) {
                return Err(RoutingError::UnknownNode(node));
            }
        }

        if start == end {
            return Ok(Some(RoutingPath::trivial(start)));
        }

        self.init(start);

        while let Some(HeapItem { node_id, weight }) = self.heap.pop() {
            // Node is already settled, skip
            if self.is_settled(node_id) {
                continue;
            }

            // Stale heap entry
            if weight > self.current_shortest_weight(node_id) {
                continue;
            }

            for adjacent in graph.node_edges(node_id) {
                let adj_node = adjacent.adj_node;
                if self.is_settled(adj_node) {
                    continue;
                }

                let edge = graph.edge(adjacent.edge_id);
                let edge_weight = weighting.calc_edge_weight(edge, adjacent.direction);

                if edge_weight == MAX_WEIGHT {
                    continue;
                }

                stopwatch.relax();

                let next_weight = weight.saturating_add(edge_weight);
                if next_weight < self.current_shortest_weight(adj_node) {
                    self.update_node_data(
                        adj_node,
                        next_weight,
                        Some(node_id),
                        Some((adjacent.edge_id, adjacent.direction)),
                    );
                    self.heap.push(HeapItem {
                        node_id: adj_node,
                        weight: next_weight,
                    });
                }
            }

            self.set_settled(node_id);
            stopwatch.settle();
            if node_id == end {
                break;
            }
        }

        stopwatch.report();

        if !self.is_settled(end) {
            debug!("No route from {} to {}", start, end);
            return Ok(None);
        }

        Ok(Some(self.build_path(end)))
    }
}
