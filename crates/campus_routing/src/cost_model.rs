use jiff::SignedDuration;

use crate::{
    config::CostModelConfig,
    edge::Edge,
    edge_direction::EdgeDirection,
    error::RoutingError,
    graph::GraphStore,
    meters::Meters,
    speed::MetersPerSecond,
    transport::TransportMode,
    types::NodeId,
};

/// Distance, duration and comfort cost of a sequence of edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathMetrics {
    pub distance: Meters,
    pub duration: SignedDuration,
    pub cost: f64,
    /// `false` when an edge is closed to the transport mode, e.g. stairs on a bike.
    pub accessible: bool,
}

impl PathMetrics {
    pub const ZERO: PathMetrics = PathMetrics {
        distance: Meters::ZERO,
        duration: SignedDuration::ZERO,
        cost: 0.0,
        accessible: true,
    };

    fn add_leg(&mut self, leg: PathMetrics) {
        self.distance += leg.distance;
        self.duration = self.duration.saturating_add(leg.duration);
        self.cost += leg.cost;
        self.accessible &= leg.accessible;
    }
}

/// Converts physical edges into durations and comfort costs for a transport mode.
#[derive(Debug, Clone, Default)]
pub struct CostModel {
    config: CostModelConfig,
}

impl CostModel {
    pub fn new(config: CostModelConfig) -> Self {
        CostModel { config }
    }

    pub fn can_traverse(&self, edge: &Edge, transport: TransportMode) -> bool {
        transport.can_use(edge.road_type)
    }

    /// Base speed of the mode, slowed down on steep climbs and sped up, within a cap,
    /// on steep descents.
    pub fn effective_speed(
        &self,
        edge: &Edge,
        direction: EdgeDirection,
        transport: TransportMode,
    ) -> MetersPerSecond {
        let config = &self.config;
        let profile = config.profile(transport);
        let grade = edge.slope_in(direction);

        if grade.abs() <= config.slope_threshold {
            return profile.speed;
        }

        let influence = grade.abs() * profile.slope_sensitivity;
        let ratio = if grade > 0.0 {
            (1.0 - config.uphill_speed_penalty * influence).max(config.min_speed_ratio)
        } else {
            (1.0 + config.downhill_speed_bonus * influence).min(config.max_speed_ratio)
        };

        profile.speed * ratio
    }

    pub fn edge_duration(
        &self,
        edge: &Edge,
        direction: EdgeDirection,
        transport: TransportMode,
    ) -> SignedDuration {
        let speed = self.effective_speed(edge, direction, transport);
        if speed.value() <= 0.0 {
            return SignedDuration::MAX;
        }

        edge.distance() / speed
    }

    pub fn edge_cost(&self, edge: &Edge, direction: EdgeDirection) -> f64 {
        let config = &self.config;
        let grade = edge.slope_in(direction);
        let percent = grade * 100.0;

        let factor = if grade > 0.0 {
            config.uphill_cost_factor
        } else {
            config.downhill_cost_factor
        };

        let mut slope_penalty = factor * percent * percent;
        if grade.abs() > config.slope_threshold {
            slope_penalty *= config.steep_amplifier;
        }

        edge.distance().value()
            * config.road_type_cost.factor(edge.road_type)
            * (1.0 + slope_penalty)
    }

    /// Fixed time to pick up and park a vehicle, paid once per trip.
    pub fn interaction_time(&self, transport: TransportMode) -> SignedDuration {
        let seconds = self.config.profile(transport).interaction_secs;
        if seconds > 0.0 && seconds.is_finite() {
            SignedDuration::from_secs_f64(seconds)
        } else {
            SignedDuration::ZERO
        }
    }

    fn leg_metrics(
        &self,
        edge: &Edge,
        direction: EdgeDirection,
        transport: TransportMode,
    ) -> PathMetrics {
        PathMetrics {
            distance: edge.distance(),
            duration: self.edge_duration(edge, direction, transport),
            cost: self.edge_cost(edge, direction),
            accessible: self.can_traverse(edge, transport),
        }
    }

    fn hop<'g>(
        &self,
        graph: &'g GraphStore,
        from: NodeId,
        to: NodeId,
    ) -> Result<(&'g Edge, EdgeDirection), RoutingError> {
        for node in [from, to] {
            if !graph.contains_node(node) {
                return Err(RoutingError::UnknownNode(node));
            }
        }

        graph
            .find_edge(from, to)
            .and_then(|edge| Some((edge, edge.direction_from(from)?)))
            .ok_or(RoutingError::MissingEdge { from, to })
    }

    /// Metrics of a single traversal from `u` to `v`, without the per-trip interaction time.
    pub fn edge_metrics(
        &self,
        graph: &GraphStore,
        transport: TransportMode,
        u: NodeId,
        v: NodeId,
    ) -> Result<PathMetrics, RoutingError> {
        let (edge, direction) = self.hop(graph, u, v)?;
        Ok(self.leg_metrics(edge, direction, transport))
    }

    /// Metrics of any node sequence, whether it came from the router or not.
    pub fn path_metrics(
        &self,
        graph: &GraphStore,
        transport: TransportMode,
        nodes: &[NodeId],
    ) -> Result<PathMetrics, RoutingError> {
        if let [single] = nodes {
            if !graph.contains_node(*single) {
                return Err(RoutingError::UnknownNode(*single));
            }
        }

        let mut metrics = PathMetrics::ZERO;
        for pair in nodes.windows(2) {
            let (edge, direction) = self.hop(graph, pair[0], pair[1])?;
            metrics.add_leg(self.leg_metrics(edge, direction, transport));
        }

        if nodes.len() > 1 {
            metrics.duration = metrics
                .duration
                .saturating_add(self.interaction_time(transport));
        }

        Ok(metrics)
    }
}
