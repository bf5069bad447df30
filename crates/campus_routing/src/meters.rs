use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Div},
};

use jiff::SignedDuration;
use serde::{Deserialize, Serialize};

use crate::speed::MetersPerSecond;

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct Meters(f64);

impl Meters {
    pub const ZERO: Meters = Meters(0.0);

    pub fn new(value: f64) -> Self {
        Meters(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn micrometers(&self) -> f64 {
        self.0 * 1_000_000.0
    }

    pub fn is_valid_length(&self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }
}

impl PartialOrd for Meters {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.0.total_cmp(&other.0))
    }
}

impl From<f64> for Meters {
    fn from(value: f64) -> Self {
        Meters::new(value)
    }
}

impl fmt::Display for Meters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 >= 1000.0 {
            write!(f, "{:.2} km", self.0 / 1000.0)
        } else {
            write!(f, "{:.0} m", self.0)
        }
    }
}

impl Add for Meters {
    type Output = Meters;

    fn add(self, other: Meters) -> Meters {
        Meters(self.0 + other.0)
    }
}

impl AddAssign for Meters {
    fn add_assign(&mut self, other: Meters) {
        self.0 += other.0;
    }
}

impl Div<MetersPerSecond> for Meters {
    type Output = SignedDuration;

    /// Saturates to [`SignedDuration::MAX`] when the time is not representable.
    fn div(self, speed: MetersPerSecond) -> SignedDuration {
        SignedDuration::try_from_secs_f64(self.0 / speed.value()).unwrap_or(SignedDuration::MAX)
    }
}

impl Sum for Meters {
    fn sum<I: Iterator<Item = Meters>>(iter: I) -> Meters {
        iter.fold(Meters::ZERO, |acc, x| acc + x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_add_distances_together() {
        let total: Meters = [Meters::new(10.0), Meters::new(990.0)].into_iter().sum();
        assert_eq!(total, Meters::new(1000.0));
    }

    #[test]
    fn should_divide_by_speed() {
        let duration = Meters::new(100.0) / MetersPerSecond::new(1.25);
        assert_eq!(duration, SignedDuration::from_secs(80));
    }

    #[test]
    fn unrepresentable_durations_saturate() {
        let speed = MetersPerSecond::new(1.25);
        assert_eq!(Meters::new(1e300) / speed, SignedDuration::MAX);
        assert_eq!(Meters::new(f64::INFINITY) / speed, SignedDuration::MAX);
        assert_eq!(Meters::new(f64::NAN) / speed, SignedDuration::MAX);
        assert_eq!(Meters::new(10.0) / MetersPerSecond::new(0.0), SignedDuration::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(Meters::new(420.0).to_string(), "420 m");
        assert_eq!(Meters::new(1500.0).to_string(), "1.50 km");
    }
}
