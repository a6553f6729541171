use routewise_core::model::Coordinate;
use rstar::{PointDistance, RTreeObject, AABB};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// category of a named transport hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HubKind {
    TrainStation,
    Airport,
    BusStation,
}

impl Display for HubKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            HubKind::TrainStation => "TRAIN_STATION",
            HubKind::Airport => "AIRPORT",
            HubKind::BusStation => "BUS_STATION",
        };
        write!(f, "{s}")
    }
}

/// a named access point to the long-distance transport network, used by the
/// multi-leg synthesizer to anchor trunk legs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportHub {
    pub name: String,
    pub coordinate: Coordinate,
    pub kind: HubKind,
}

impl RTreeObject for TransportHub {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.coordinate.lat, self.coordinate.lng])
    }
}

impl PointDistance for TransportHub {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.coordinate.lat - point[0];
        let dlng = self.coordinate.lng - point[1];
        dlat * dlat + dlng * dlng
    }
}
