use std::fmt;

use crate::{edge_direction::EdgeDirection, meters::Meters, types::NodeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoadType {
    #[default]
    Normal,
    Main,
    Path,
    Indoor,
    Stairs,
}

impl RoadType {
    pub const ALL: [RoadType; 5] = [
        RoadType::Normal,
        RoadType::Main,
        RoadType::Path,
        RoadType::Indoor,
        RoadType::Stairs,
    ];

    pub fn ordinal(&self) -> u8 {
        match self {
            RoadType::Normal => 0,
            RoadType::Main => 1,
            RoadType::Path => 2,
            RoadType::Indoor => 3,
            RoadType::Stairs => 4,
        }
    }

    /// Unknown ordinals fall back to [`RoadType::Normal`].
    pub fn from_ordinal(ordinal: u8) -> Self {
        match ordinal {
            1 => RoadType::Main,
            2 => RoadType::Path,
            3 => RoadType::Indoor,
            4 => RoadType::Stairs,
            _ => RoadType::Normal,
        }
    }

    /// Case-insensitive lookup of the enumeration name.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        RoadType::ALL
            .into_iter()
            .find(|road_type| road_type.as_str().eq_ignore_ascii_case(name))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoadType::Normal => "Normal",
            RoadType::Main => "Main",
            RoadType::Path => "Path",
            RoadType::Indoor => "Indoor",
            RoadType::Stairs => "Stairs",
        }
    }
}

impl fmt::Display for RoadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order-independent identity of an edge, `(min(u, v), max(u, v))`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey(NodeId, NodeId);

impl EdgeKey {
    pub fn new(u: NodeId, v: NodeId) -> Self {
        if u <= v { EdgeKey(u, v) } else { EdgeKey(v, u) }
    }

    pub fn low(&self) -> NodeId {
        self.0
    }

}

#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub u: NodeId,
    pub v: NodeId,
    pub distance: Meters,
    pub road_type: RoadType,
    /// Signed grade, positive when climbing from `u` to `v`.
    pub slope: f64,
    pub name: String,
    pub description: String,
}

impl Edge {
    pub fn new(u: NodeId, v: NodeId, distance: impl Into<Meters>) -> Self {
        Edge {
            u,
            v,
            distance: distance.into(),
            road_type: RoadType::Normal,
            slope: 0.0,
            name: String::new(),
            description: String::new(),
        }
    }

    pub fn with_road_type(mut self, road_type: RoadType) -> Self {
        self.road_type = road_type;
        self
    }

    pub fn with_slope(mut self, slope: f64) -> Self {
        self.slope = slope;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(self.u, self.v)
    }

    pub fn distance(&self) -> Meters {
        self.distance
    }

    /// Lengths must be finite and non-negative to be stored or routed over.
    pub fn has_valid_distance(&self) -> bool {
        self.distance.is_valid_length()
    }

    /// Direction of travel when entering the edge at `start`.
    pub fn direction_from(&self, start: NodeId) -> Option<EdgeDirection> {
        if self.u == start {
            Some(EdgeDirection::Forward)
        } else if self.v == start {
            Some(EdgeDirection::Backward)
        } else {
            None
        }
    }

    pub fn slope_in(&self, direction: EdgeDirection) -> f64 {
        match direction {
            EdgeDirection::Forward => self.slope,
            EdgeDirection::Backward => -self.slope,
        }
    }
}
