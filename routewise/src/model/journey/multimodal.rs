use super::{leg_ops, HubKind, TransportHubStore};
use crate::model::rci::{RciEngine, RciRequest};
use chrono::{DateTime, Utc};
use itertools::Itertools;
use routewise_core::model::{
    ConfidenceResult, Coordinate, ModeClass, Persona, RouteCandidate, RouteLeg, TransportMode,
};
use routewise_core::util::geo_utils;
use routewise_core::util::sampler::UnitSampler;
use std::sync::Arc;

/// flat reliability discount per transfer, applied after the confidence
/// engine runs. this is the single base per-transfer penalty that reaches
/// the final score for synthesized journeys.
pub const TRANSFER_POST_PENALTY: f64 = 0.03;
/// flight trunk legs are only assembled beyond this great-circle distance.
pub const MIN_FLIGHT_DISTANCE_KM: f64 = 300.0;

/// assembles composite car/train/flight/walk journeys between two points by
/// anchoring trunk legs at known transport hubs, then scores each composite
/// through the confidence engine.
///
/// synthesis is additive and fallback-safe: an infeasible or unbuildable
/// composite is dropped, and the caller treats an empty result as "no
/// multi-leg options", never as an error.
pub struct MultimodalSynthesizer {
    pub engine: Arc<RciEngine>,
    pub hubs: Arc<TransportHubStore>,
}

impl MultimodalSynthesizer {
    pub fn new(engine: Arc<RciEngine>, hubs: Arc<TransportHubStore>) -> MultimodalSynthesizer {
        MultimodalSynthesizer { engine, hubs }
    }

    /// builds the distance-appropriate composite journeys for this
    /// origin/destination pair. strategies that cannot find their hubs or
    /// fail feasibility checks contribute nothing.
    pub fn synthesize(
        &self,
        start: Coordinate,
        end: Coordinate,
        departure: DateTime<Utc>,
        persona: Persona,
        sampler: &mut dyn UnitSampler,
    ) -> Vec<RouteCandidate> {
        let mut candidates: Vec<RouteCandidate> = Vec::new();

        // car to the nearest train station, rail trunk, walk out
        let start_station = self.hubs.nearest(&start, HubKind::TrainStation);
        let end_station = self.hubs.nearest(&end, HubKind::TrainStation);
        if let (Some(origin), Some(destination)) = (start_station, end_station) {
            let legs = vec![
                leg_ops::create_leg(TransportMode::Car, start, origin.coordinate, sampler),
                leg_ops::create_leg(
                    TransportMode::Train,
                    origin.coordinate,
                    destination.coordinate,
                    sampler,
                ),
                leg_ops::create_leg(TransportMode::Walk, destination.coordinate, end, sampler),
            ];
            candidates.extend(self.build_candidate(
                "Car + Train + Walk",
                legs,
                start,
                end,
                departure,
                persona,
                sampler,
            ));
        }

        // flight trunk for long hauls only
        let start_airport = self.hubs.nearest(&start, HubKind::Airport);
        let end_airport = self.hubs.nearest(&end, HubKind::Airport);
        let trip_distance = geo_utils::distance_km(&start, &end);
        if let (Some(origin), Some(destination)) = (start_airport, end_airport) {
            if trip_distance > MIN_FLIGHT_DISTANCE_KM {
                let legs = vec![
                    leg_ops::create_leg(TransportMode::Car, start, origin.coordinate, sampler),
                    leg_ops::create_leg(
                        TransportMode::Flight,
                        origin.coordinate,
                        destination.coordinate,
                        sampler,
                    ),
                    leg_ops::create_leg(TransportMode::Car, destination.coordinate, end, sampler),
                ];
                candidates.extend(self.build_candidate(
                    "Car + Flight + Car",
                    legs,
                    start,
                    end,
                    departure,
                    persona,
                    sampler,
                ));
            }
        }

        // alternative-station variant: drive to a different station and
        // ride back to the primary one
        if let Some(primary) = start_station {
            if let Some(alternative) =
                self.hubs
                    .nearest_excluding(&start, HubKind::TrainStation, primary)
            {
                let legs = vec![
                    leg_ops::create_leg(TransportMode::Car, start, alternative.coordinate, sampler),
                    leg_ops::create_leg(
                        TransportMode::Train,
                        alternative.coordinate,
                        primary.coordinate,
                        sampler,
                    ),
                    leg_ops::create_leg(TransportMode::Walk, primary.coordinate, end, sampler),
                ];
                candidates.extend(self.build_candidate(
                    "Car + Train Alternative + Walk",
                    legs,
                    start,
                    end,
                    departure,
                    persona,
                    sampler,
                ));
            }
        }

        log::debug!(
            "synthesized {} multi-leg candidate(s) for {} -> {}",
            candidates.len(),
            start,
            end
        );
        candidates
    }

    /// validates and scores one composite. aggregates leg metrics, runs the
    /// confidence engine on the totals, then applies the flat per-transfer
    /// discount on top of the engine result.
    #[allow(clippy::too_many_arguments)]
    fn build_candidate(
        &self,
        name: &str,
        legs: Vec<RouteLeg>,
        start: Coordinate,
        end: Coordinate,
        departure: DateTime<Utc>,
        persona: Persona,
        sampler: &mut dyn UnitSampler,
    ) -> Option<RouteCandidate> {
        if !leg_ops::validate_route(&legs) {
            log::debug!("dropping infeasible composite '{name}'");
            return None;
        }
        let total_minutes: f64 = legs.iter().map(|leg| leg.total_minutes()).sum();
        let total_distance: f64 = legs.iter().map(|leg| leg.distance_km).sum();
        let transfer_count = legs.len().saturating_sub(1) as u32;

        let request = RciRequest {
            start,
            end,
            base_eta_minutes: total_minutes,
            distance_km: total_distance,
            departure,
            persona,
            transit: None,
        };
        let result = self.engine.confidence(&request, sampler);
        let confidence = apply_transfer_post_penalty(result, transfer_count);
        log::debug!(
            "built composite '{name}' ({}) at {:.3} confidence",
            mode_sequence(&legs),
            confidence.rci
        );

        Some(RouteCandidate {
            route_id: uuid::Uuid::new_v4().to_string(),
            mode_type: ModeClass::Multi,
            name: Some(name.to_string()),
            start,
            end,
            distance_km: total_distance,
            duration_minutes: total_minutes,
            geometry: leg_ops::combined_geometry(&legs),
            legs,
            transfer_count: Some(transfer_count),
            confidence,
            persona_score: None,
            persona_explanation: None,
            steps: None,
        })
    }
}

/// discounts an engine result by the flat per-transfer penalty, recording
/// the undiscounted value as the original score.
pub fn apply_transfer_post_penalty(
    result: ConfidenceResult,
    transfer_count: u32,
) -> ConfidenceResult {
    let discounted =
        (result.rci - TRANSFER_POST_PENALTY * transfer_count as f64).clamp(0.0, 1.0);
    ConfidenceResult {
        rci: discounted,
        original_rci: result.rci,
        ..result
    }
}

/// display string for a composite's mode sequence, e.g. "car > train > walk".
pub fn mode_sequence(legs: &[RouteLeg]) -> String {
    legs.iter().map(|leg| leg.mode.to_string()).join(" > ")
}
