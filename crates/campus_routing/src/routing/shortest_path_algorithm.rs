use crate::{error::RoutingError, graph::GraphStore, types::NodeId, weighting::Weighting};

use super::routing_path::RoutingPath;

pub trait ShortestPathAlgorithm {
    /// `Ok(None)` means both nodes exist but no route connects them.
    fn calc_path(
        &mut self,
        graph: &GraphStore,
        weighting: &impl Weighting,
        start: NodeId,
        end: NodeId,
    ) -> Result<Option<RoutingPath>, RoutingError>;
}
