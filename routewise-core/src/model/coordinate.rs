use geo::Point;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// a WGS84 latitude/longitude pair. the core treats coordinates as already
/// validated by the caller; no range checks are applied here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Coordinate {
        Coordinate { lat, lng }
    }

    /// this coordinate as a [`geo::Point`] in (x=lng, y=lat) order, for use
    /// with geo's metric space operations.
    pub fn point(&self) -> Point<f64> {
        Point::new(self.lng, self.lat)
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.5}, {:.5})", self.lat, self.lng)
    }
}
