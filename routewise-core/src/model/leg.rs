use super::{Coordinate, TransportMode};
use serde::{Deserialize, Serialize};
use uom::si::f64::Time;

/// one homogeneous-mode segment of a composite journey. legs are owned
/// exclusively by their parent route candidate and are never shared.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteLeg {
    pub leg_id: String,
    pub mode: TransportMode,
    pub start: Coordinate,
    pub end: Coordinate,
    pub travel_time_minutes: f64,
    /// wait or transfer time before this leg departs (boarding, check-in)
    pub wait_time_minutes: f64,
    /// estimated crowdedness in [0,1] (0 = empty, 1 = packed)
    pub crowd_score: f64,
    pub distance_km: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_count: Option<u32>,
}

impl RouteLeg {
    /// travel plus wait time for this leg, in minutes.
    pub fn total_minutes(&self) -> f64 {
        self.travel_time_minutes + self.wait_time_minutes
    }

    /// grab this leg's travel time as a Time value
    pub fn travel_time(&self) -> Time {
        Time::new::<uom::si::time::minute>(self.travel_time_minutes)
    }

    /// grab this leg's travel plus wait time as a Time value
    pub fn total_time(&self) -> Time {
        Time::new::<uom::si::time::minute>(self.total_minutes())
    }
}

#[cfg(test)]
mod test {
    use super::RouteLeg;
    use crate::model::{Coordinate, TransportMode};

    #[test]
    fn test_total_minutes_includes_wait() {
        let leg = RouteLeg {
            leg_id: "leg-1".to_string(),
            mode: TransportMode::Train,
            start: Coordinate::new(40.75, -73.99),
            end: Coordinate::new(40.64, -73.78),
            travel_time_minutes: 22.0,
            wait_time_minutes: 8.0,
            crowd_score: 0.6,
            distance_km: 28.5,
            line_name: None,
            stop_count: None,
        };
        assert_eq!(leg.total_minutes(), 30.0);
        let as_time = leg.total_time();
        assert!((as_time.get::<uom::si::time::minute>() - 30.0).abs() < 1e-12);
    }
}
