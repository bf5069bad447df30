use std::ops::Mul;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct MetersPerSecond(f64);

impl MetersPerSecond {
    pub fn new(value: f64) -> Self {
        MetersPerSecond(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Mul<f64> for MetersPerSecond {
    type Output = MetersPerSecond;

    fn mul(self, factor: f64) -> MetersPerSecond {
        MetersPerSecond(self.0 * factor)
    }
}
