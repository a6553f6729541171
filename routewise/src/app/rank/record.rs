use routewise_core::model::{Coordinate, RouteCandidate, TimeWindow};
use serde::Serialize;

/// denormalized confidence row handed to the persistence collaborator, one
/// per scored candidate. this core writes these out and never reads them
/// back.
#[derive(Debug, Clone, Serialize)]
pub struct ConfidenceRecord {
    pub route_id: String,
    pub time_window: TimeWindow,
    pub start: Coordinate,
    pub end: Coordinate,
    pub distance_km: f64,
    pub base_eta_minutes: f64,
    pub geometry: String,
    pub on_time_prob: f64,
    pub transfer_success: f64,
    pub crowd_stability: f64,
    pub delay_variance: f64,
    pub last_mile_avail: f64,
    pub rci_score: f64,
}

impl ConfidenceRecord {
    pub fn from_candidate(candidate: &RouteCandidate, window: &TimeWindow) -> ConfidenceRecord {
        let c = &candidate.confidence.components;
        ConfidenceRecord {
            route_id: candidate.route_id.clone(),
            time_window: window.clone(),
            start: candidate.start,
            end: candidate.end,
            distance_km: candidate.distance_km,
            base_eta_minutes: candidate.duration_minutes,
            geometry: candidate.geometry.clone(),
            on_time_prob: c.on_time_prob,
            transfer_success: c.transfer_success,
            crowd_stability: c.crowd_stability,
            delay_variance: c.delay_variance,
            last_mile_avail: c.last_mile_avail,
            rci_score: candidate.confidence.rci,
        }
    }
}
