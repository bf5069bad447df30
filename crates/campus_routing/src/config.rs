use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    edge::RoadType, error::ConfigError, speed::MetersPerSecond, transport::TransportMode,
};

fn one() -> f64 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TransportProfile {
    pub speed: MetersPerSecond,
    /// Scales how strongly grades change the speed of this mode.
    #[serde(default = "one")]
    pub slope_sensitivity: f64,
    /// Time spent once per trip finding and parking the vehicle.
    #[serde(default)]
    pub interaction_secs: f64,
}

impl TransportProfile {
    pub fn new(speed: f64, slope_sensitivity: f64, interaction_secs: f64) -> Self {
        TransportProfile {
            speed: MetersPerSecond::new(speed),
            slope_sensitivity,
            interaction_secs,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RoadTypeFactors {
    pub normal: f64,
    pub main: f64,
    pub path: f64,
    pub indoor: f64,
    pub stairs: f64,
}

impl Default for RoadTypeFactors {
    fn default() -> Self {
        RoadTypeFactors {
            normal: 1.0,
            main: 1.2,
            path: 0.9,
            indoor: 0.8,
            stairs: 2.5,
        }
    }
}

impl RoadTypeFactors {
    pub fn factor(&self, road_type: RoadType) -> f64 {
        match road_type {
            RoadType::Normal => self.normal,
            RoadType::Main => self.main,
            RoadType::Path => self.path,
            RoadType::Indoor => self.indoor,
            RoadType::Stairs => self.stairs,
        }
    }
}

/// Tunables of the time and comfort cost models. Every field is optional in the JSON file.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CostModelConfig {
    pub walk: TransportProfile,
    pub run: TransportProfile,
    pub shared_bike: TransportProfile,
    pub e_bike: TransportProfile,
    pub bus: TransportProfile,

    /// Grades at or below this magnitude do not change the speed.
    pub slope_threshold: f64,
    pub uphill_speed_penalty: f64,
    pub downhill_speed_bonus: f64,
    pub min_speed_ratio: f64,
    pub max_speed_ratio: f64,

    /// Cost penalty per squared percent of grade.
    pub uphill_cost_factor: f64,
    pub downhill_cost_factor: f64,
    /// Multiplies the grade penalty above `slope_threshold`.
    pub steep_amplifier: f64,
    pub road_type_cost: RoadTypeFactors,
}

impl Default for CostModelConfig {
    fn default() -> Self {
        CostModelConfig {
            walk: TransportProfile::new(1.25, 1.0, 0.0),
            run: TransportProfile::new(2.5, 1.2, 0.0),
            shared_bike: TransportProfile::new(4.0, 1.5, 90.0),
            e_bike: TransportProfile::new(5.0, 0.4, 120.0),
            bus: TransportProfile::new(8.0, 0.2, 0.0),
            slope_threshold: 0.05,
            uphill_speed_penalty: 4.0,
            downhill_speed_bonus: 1.5,
            min_speed_ratio: 0.3,
            max_speed_ratio: 1.25,
            uphill_cost_factor: 0.05,
            downhill_cost_factor: 0.01,
            steep_amplifier: 2.0,
            road_type_cost: RoadTypeFactors::default(),
        }
    }
}

impl CostModelConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn profile(&self, mode: TransportMode) -> &TransportProfile {
        match mode {
            TransportMode::Walk => &self.walk,
            TransportMode::Run => &self.run,
            TransportMode::SharedBike => &self.shared_bike,
            TransportMode::EBike => &self.e_bike,
            TransportMode::Bus => &self.bus,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config = CostModelConfig::from_json(
            r#"{ "walk": { "speed": 1.4 }, "steep_amplifier": 3.0, "road_type_cost": { "stairs": 4.0 } }"#,
        )
        .unwrap();

        assert_eq!(config.walk.speed, MetersPerSecond::new(1.4));
        assert_eq!(config.walk.slope_sensitivity, 1.0);
        assert_eq!(config.walk.interaction_secs, 0.0);
        assert_eq!(config.steep_amplifier, 3.0);
        assert_eq!(config.road_type_cost.factor(RoadType::Stairs), 4.0);
        assert_eq!(config.road_type_cost.factor(RoadType::Main), 1.2);
        assert_eq!(config.shared_bike, CostModelConfig::default().shared_bike);
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(matches!(
            CostModelConfig::from_json("{ \"walk\": 3 }"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            CostModelConfig::from_file("/definitely/not/here.json"),
            Err(ConfigError::Io(_))
        ));
    }
}
