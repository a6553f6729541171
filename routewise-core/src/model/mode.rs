use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uom::si::f64::Velocity;

/// travel mode of a single journey leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransportMode {
    Car,
    Train,
    Flight,
    Walk,
    Metro,
}

impl TransportMode {
    /// typical average speed for this mode, used when estimating leg travel
    /// times from great-circle distances. values include stop/dwell effects
    /// (train/metro) and urban congestion (car).
    pub fn average_speed(&self) -> Velocity {
        use uom::si::velocity::kilometer_per_hour;
        let kmh = match self {
            TransportMode::Car => 50.0,
            TransportMode::Train => 80.0,
            TransportMode::Flight => 900.0,
            TransportMode::Walk => 5.0,
            TransportMode::Metro => 40.0,
        };
        Velocity::new::<kilometer_per_hour>(kmh)
    }
}

impl Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TransportMode::Car => "car",
            TransportMode::Train => "train",
            TransportMode::Flight => "flight",
            TransportMode::Walk => "walk",
            TransportMode::Metro => "metro",
        };
        write!(f, "{s}")
    }
}

/// classification of a route candidate by how it was produced: directly from
/// the base road router (single-mode), by the multi-leg synthesizer, or by
/// the transit synthesizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModeClass {
    Single,
    Multi,
    Transit,
}

impl Display for ModeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ModeClass::Single => "SINGLE",
            ModeClass::Multi => "MULTI",
            ModeClass::Transit => "TRANSIT",
        };
        write!(f, "{s}")
    }
}
