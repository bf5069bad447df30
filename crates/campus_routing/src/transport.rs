use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::edge::RoadType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    #[default]
    Walk,
    Run,
    SharedBike,
    EBike,
    Bus,
}

impl TransportMode {
    pub const ALL: [TransportMode; 5] = [
        TransportMode::Walk,
        TransportMode::Run,
        TransportMode::SharedBike,
        TransportMode::EBike,
        TransportMode::Bus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Walk => "walk",
            TransportMode::Run => "run",
            TransportMode::SharedBike => "shared_bike",
            TransportMode::EBike => "e_bike",
            TransportMode::Bus => "bus",
        }
    }

    /// Whether the mode is allowed on a road type at all.
    pub fn can_use(&self, road_type: RoadType) -> bool {
        match self {
            TransportMode::Walk | TransportMode::Run => true,
            TransportMode::SharedBike | TransportMode::EBike => {
                !matches!(road_type, RoadType::Stairs | RoadType::Indoor)
            }
            TransportMode::Bus => matches!(road_type, RoadType::Normal | RoadType::Main),
        }
    }
}

impl FromStr for TransportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "walk" => Ok(TransportMode::Walk),
            "run" => Ok(TransportMode::Run),
            "shared_bike" | "bike" => Ok(TransportMode::SharedBike),
            "e_bike" | "ebike" => Ok(TransportMode::EBike),
            "bus" => Ok(TransportMode::Bus),
            _ => Err(format!("Unknown transport mode {}", s)),
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
