use std::{fmt, str::FromStr};

use crate::{
    constants::MAX_WEIGHT, cost_model::CostModel, edge::Edge, edge_direction::EdgeDirection,
    transport::TransportMode,
};

/// Search weight. Micrometers, microseconds or millionths of a cost unit depending on the
/// weighting; [`MAX_WEIGHT`] marks an edge that cannot be used.
///
/// Each edge is rounded to the nearest unit, so two routes whose exact totals differ by
/// less than a unit per edge may compare as equal.
pub type Weight = u64;

/// Weight units per meter, second or cost unit.
const WEIGHT_SCALE: f64 = 1_000_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WeightMode {
    #[default]
    Distance,
    Time,
    Cost,
}

impl WeightMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightMode::Distance => "distance",
            WeightMode::Time => "time",
            WeightMode::Cost => "cost",
        }
    }
}

impl FromStr for WeightMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "distance" => Ok(WeightMode::Distance),
            "time" => Ok(WeightMode::Time),
            "cost" | "comfort" => Ok(WeightMode::Cost),
            _ => Err(format!("Unknown weight mode {}", s)),
        }
    }
}

impl fmt::Display for WeightMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub trait Weighting {
    fn calc_edge_weight(&self, edge: &Edge, direction: EdgeDirection) -> Weight;
}

fn to_weight(value: f64) -> Weight {
    if !value.is_finite() || value >= (MAX_WEIGHT - 1) as f64 {
        return MAX_WEIGHT - 1;
    }
    value.max(0.0).round() as Weight
}

/// Raw edge length, regardless of transport mode.
pub struct DistanceWeighting;

impl Weighting for DistanceWeighting {
    fn calc_edge_weight(&self, edge: &Edge, _direction: EdgeDirection) -> Weight {
        to_weight(edge.distance().micrometers())
    }
}

pub struct TimeWeighting<'a> {
    model: &'a CostModel,
    transport: TransportMode,
}

impl<'a> TimeWeighting<'a> {
    pub fn new(model: &'a CostModel, transport: TransportMode) -> Self {
        TimeWeighting { model, transport }
    }
}

impl Weighting for TimeWeighting<'_> {
    fn calc_edge_weight(&self, edge: &Edge, direction: EdgeDirection) -> Weight {
        if !self.model.can_traverse(edge, self.transport) {
            return MAX_WEIGHT;
        }

        let duration = self.model.edge_duration(edge, direction, self.transport);
        to_weight(duration.as_secs_f64() * WEIGHT_SCALE)
    }
}

/// Psychological cost: steep grades and unpleasant road types weigh more than their length.
pub struct ComfortWeighting<'a> {
    model: &'a CostModel,
    transport: TransportMode,
}

impl<'a> ComfortWeighting<'a> {
    pub fn new(model: &'a CostModel, transport: TransportMode) -> Self {
        ComfortWeighting { model, transport }
    }
}

impl Weighting for ComfortWeighting<'_> {
    fn calc_edge_weight(&self, edge: &Edge, direction: EdgeDirection) -> Weight {
        if !self.model.can_traverse(edge, self.transport) {
            return MAX_WEIGHT;
        }

        to_weight(self.model.edge_cost(edge, direction) * WEIGHT_SCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::CostModelConfig, edge::RoadType};

    #[test]
    fn distance_weight_ignores_direction_and_access() {
        let edge = Edge::new(1, 2, 12.34)
            .with_slope(0.2)
            .with_road_type(RoadType::Stairs);
        assert_eq!(
            DistanceWeighting.calc_edge_weight(&edge, EdgeDirection::Forward),
            12_340_000
        );
        assert_eq!(
            DistanceWeighting.calc_edge_weight(&edge, EdgeDirection::Backward),
            12_340_000
        );
    }

    #[test]
    fn uphill_time_differs_from_downhill() {
        let model = CostModel::default();
        let weighting = TimeWeighting::new(&model, TransportMode::Walk);
        let edge = Edge::new(1, 2, 100.0).with_slope(0.10);

        let up = weighting.calc_edge_weight(&edge, EdgeDirection::Forward);
        let down = weighting.calc_edge_weight(&edge, EdgeDirection::Backward);
        let flat = weighting.calc_edge_weight(&Edge::new(1, 2, 100.0), EdgeDirection::Forward);

        assert_ne!(up, down);
        assert!(up > flat);
        assert!(down < flat);
        assert_eq!(flat, 80_000_000);
    }

    #[test]
    fn inaccessible_edges_are_blocked() {
        let model = CostModel::default();
        let stairs = Edge::new(1, 2, 10.0).with_road_type(RoadType::Stairs);

        let bike_time = TimeWeighting::new(&model, TransportMode::SharedBike);
        let bike_comfort = ComfortWeighting::new(&model, TransportMode::SharedBike);
        assert_eq!(
            bike_time.calc_edge_weight(&stairs, EdgeDirection::Forward),
            MAX_WEIGHT
        );
        assert_eq!(
            bike_comfort.calc_edge_weight(&stairs, EdgeDirection::Forward),
            MAX_WEIGHT
        );

        let walk_comfort = ComfortWeighting::new(&model, TransportMode::Walk);
        assert_eq!(
            walk_comfort.calc_edge_weight(&stairs, EdgeDirection::Forward),
            25_000_000
        );
    }

    #[test]
    fn unusable_lengths_stay_below_the_blocked_sentinel() {
        let model = CostModel::default();
        let time = TimeWeighting::new(&model, TransportMode::Walk);

        for distance in [1e300, f64::INFINITY, f64::NAN] {
            let edge = Edge::new(1, 2, distance);
            assert_eq!(
                DistanceWeighting.calc_edge_weight(&edge, EdgeDirection::Forward),
                MAX_WEIGHT - 1
            );
            assert_eq!(
                time.calc_edge_weight(&edge, EdgeDirection::Forward),
                MAX_WEIGHT - 1
            );
        }
    }

    #[test]
    fn stalled_transport_is_not_blocked_by_time() {
        let model = CostModel::new(
            CostModelConfig::from_json(r#"{ "bus": { "speed": 0.0 } }"#).unwrap(),
        );
        let time = TimeWeighting::new(&model, TransportMode::Bus);

        assert_eq!(
            time.calc_edge_weight(&Edge::new(1, 2, 10.0), EdgeDirection::Forward),
            MAX_WEIGHT - 1
        );
    }

    #[test]
    fn parses_weight_modes() {
        assert_eq!("Time".parse::<WeightMode>(), Ok(WeightMode::Time));
        assert_eq!("comfort".parse::<WeightMode>(), Ok(WeightMode::Cost));
        assert!("speed".parse::<WeightMode>().is_err());
    }
}
