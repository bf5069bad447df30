use tracing::debug;

use crate::{
    cost_model::{CostModel, PathMetrics},
    error::RoutingError,
    graph::GraphStore,
    transport::TransportMode,
    types::NodeId,
    weighting::{ComfortWeighting, DistanceWeighting, TimeWeighting, WeightMode},
};

use super::{
    dijkstra::Dijkstra, routing_path::RoutingPath, shortest_path_algorithm::ShortestPathAlgorithm,
};

/// A path found under one weight mode, with all three metrics computed over it.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub mode: WeightMode,
    pub path: RoutingPath,
    pub metrics: PathMetrics,
}

impl Route {
    pub fn nodes(&self) -> &[NodeId] {
        self.path.nodes()
    }
}

/// Borrows the store for the duration of a query, edits have to wait until it is dropped.
pub struct Router<'a> {
    graph: &'a GraphStore,
    model: &'a CostModel,
    transport: TransportMode,
}

impl<'a> Router<'a> {
    pub fn new(graph: &'a GraphStore, model: &'a CostModel, transport: TransportMode) -> Self {
        Router {
            graph,
            model,
            transport,
        }
    }

    pub fn transport(&self) -> TransportMode {
        self.transport
    }

    /// Shortest route by [`WeightMode::default`].
    pub fn find_path(&self, start: NodeId, end: NodeId) -> Result<Option<Route>, RoutingError> {
        self.find_path_with_mode(WeightMode::default(), start, end)
    }

    pub fn find_path_with_mode(
        &self,
        mode: WeightMode,
        start: NodeId,
        end: NodeId,
    ) -> Result<Option<Route>, RoutingError> {
        let mut dijkstra = Dijkstra::new();
        let path = match mode {
            WeightMode::Distance => dijkstra.calc_path(self.graph, &DistanceWeighting, start, end)?,
            WeightMode::Time => dijkstra.calc_path(
                self.graph,
                &TimeWeighting::new(self.model, self.transport),
                start,
                end,
            )?,
            WeightMode::Cost => dijkstra.calc_path(
                self.graph,
                &ComfortWeighting::new(self.model, self.transport),
                start,
                end,
            )?,
        };

        let Some(path) = path else {
            return Ok(None);
        };

        let metrics = self
            .model
            .path_metrics(self.graph, self.transport, path.nodes())?;

        debug!(
            "{} route {} -> {} over {} nodes, {}",
            mode,
            start,
            end,
            path.nodes().len(),
            metrics.distance
        );

        Ok(Some(Route {
            mode,
            path,
            metrics,
        }))
    }
}
