use super::leg_ops;
use super::multimodal::apply_transfer_post_penalty;
use crate::model::rci::{RciEngine, RciRequest, TransitContext};
use chrono::{DateTime, Utc};
use itertools::Itertools;
use routewise_core::model::{
    Coordinate, ModeClass, Persona, RouteCandidate, RouteLeg, TransportMode,
};
use routewise_core::util::geo_utils;
use routewise_core::util::sampler::UnitSampler;
use serde::Deserialize;
use std::sync::Arc;
use uom::si::f64::Length;

/// station names cycled when generating synthetic hubs.
const STATION_NAMES: [&str; 16] = [
    "Central Hub",
    "North Station",
    "South Terminal",
    "East Plaza",
    "West Junction",
    "Downtown Core",
    "Uptown Link",
    "Midtown Hub",
    "Express Station",
    "Local Stop",
    "Transit Center",
    "Platform A",
    "Main Terminal",
    "Depot Station",
    "Crossing",
    "Exchange Point",
];

/// line names assigned to synthesized transit legs.
const LINE_NAMES: [&str; 9] = [
    "Red Line",
    "Blue Line",
    "Green Line",
    "Yellow Line",
    "Purple Line",
    "Central Express",
    "Downtown Local",
    "Airport Link",
    "Circle Local",
];

/// kilometers per degree of latitude, for scattering synthetic hubs.
const KM_PER_DEGREE: f64 = 111.0;

/// tuning for synthetic transit hub generation and matching.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TransitConfig {
    /// radius around each endpoint inside which hubs are generated
    pub search_radius_km: f64,
    /// hub count per kilometer of search radius
    pub hub_density_per_km: f64,
    /// a journey endpoint must be within this distance of its hub
    pub max_hub_distance_km: f64,
}

impl Default for TransitConfig {
    fn default() -> Self {
        TransitConfig {
            search_radius_km: 2.5,
            hub_density_per_km: 0.8,
            max_hub_distance_km: 2.0,
        }
    }
}

/// a synthesized train station or metro stop near a journey endpoint.
#[derive(Debug, Clone)]
struct TransitHub {
    name: String,
    coordinate: Coordinate,
    mode: TransportMode,
    avg_wait_minutes: f64,
}

/// builds train/metro journey candidates between two points. a
/// specialization of the multi-leg synthesizer restricted to transit legs,
/// with transit-specific component overrides applied by the confidence
/// engine.
pub struct TransitSynthesizer {
    pub engine: Arc<RciEngine>,
    pub config: TransitConfig,
}

impl TransitSynthesizer {
    pub fn new(engine: Arc<RciEngine>, config: TransitConfig) -> TransitSynthesizer {
        TransitSynthesizer { engine, config }
    }

    /// assembles up to three transit candidates: metro-only, train-only,
    /// and a mixed metro+train composite, falling back to a single metro
    /// leg over any available hub pair when none of the targeted
    /// combinations are feasible.
    pub fn synthesize(
        &self,
        start: Coordinate,
        end: Coordinate,
        departure: DateTime<Utc>,
        persona: Persona,
        sampler: &mut dyn UnitSampler,
    ) -> Vec<RouteCandidate> {
        let start_hubs = self.generate_hubs(&start, sampler);
        let end_hubs = self.generate_hubs(&end, sampler);
        if start_hubs.is_empty() || end_hubs.is_empty() {
            log::warn!("insufficient transit hubs generated");
            return vec![];
        }

        // both endpoints must have some hub within reach
        if self.nearest_hub(&start, &start_hubs, None).is_none()
            || self.nearest_hub(&end, &end_hubs, None).is_none()
        {
            log::debug!("no transit hub within reach of journey endpoints");
            return vec![];
        }

        let mut candidates: Vec<RouteCandidate> = Vec::new();
        let start_metro = self.closest_of_mode(&start, &start_hubs, TransportMode::Metro);
        let end_metro = self.closest_of_mode(&end, &end_hubs, TransportMode::Metro);
        let start_train = self.closest_of_mode(&start, &start_hubs, TransportMode::Train);
        let end_train = self.closest_of_mode(&end, &end_hubs, TransportMode::Train);

        if let (Some(a), Some(b)) = (start_metro, end_metro) {
            let leg = self.create_transit_leg(a, b, TransportMode::Metro, sampler);
            candidates.extend(
                self.build_candidate(vec![leg], start, end, departure, persona, sampler),
            );
        }

        if let (Some(a), Some(b)) = (start_train, end_train) {
            let leg = self.create_transit_leg(a, b, TransportMode::Train, sampler);
            candidates.extend(
                self.build_candidate(vec![leg], start, end, departure, persona, sampler),
            );
        }

        if let (Some(ma), Some(mb), Some(ta), Some(tb)) =
            (start_metro, end_metro, start_train, end_train)
        {
            let metro_leg = self.create_transit_leg(ma, mb, TransportMode::Metro, sampler);
            let train_leg = self.create_transit_leg(ta, tb, TransportMode::Train, sampler);
            candidates.extend(self.build_candidate(
                vec![metro_leg, train_leg],
                start,
                end,
                departure,
                persona,
                sampler,
            ));
        }

        // last resort: a single metro leg over whatever hubs exist
        if candidates.is_empty() {
            let leg = self.create_transit_leg(
                &start_hubs[0],
                &end_hubs[0],
                TransportMode::Metro,
                sampler,
            );
            candidates.extend(
                self.build_candidate(vec![leg], start, end, departure, persona, sampler),
            );
        }

        log::debug!(
            "synthesized {} transit candidate(s) for {} -> {}",
            candidates.len(),
            start,
            end
        );
        candidates
    }

    /// scatters synthetic hubs around a center point, biased toward the
    /// center, alternating one train station per three metro stops.
    fn generate_hubs(&self, center: &Coordinate, sampler: &mut dyn UnitSampler) -> Vec<TransitHub> {
        let count = ((self.config.search_radius_km * self.config.hub_density_per_km).ceil()
            as usize)
            .max(3);
        (0..count)
            .map(|i| {
                let angle = sampler.next_unit() * 2.0 * std::f64::consts::PI;
                let distance_km = sampler.next_unit().sqrt() * self.config.search_radius_km;
                let dlat = (distance_km / KM_PER_DEGREE) * angle.cos();
                let dlng = (distance_km / (KM_PER_DEGREE * center.lat.to_radians().cos()))
                    * angle.sin();
                let mode = if i % 4 == 0 {
                    TransportMode::Train
                } else {
                    TransportMode::Metro
                };
                let avg_wait_minutes = match mode {
                    TransportMode::Train => sampler.next_range(5.0, 12.0),
                    _ => sampler.next_range(2.0, 8.0),
                };
                let base_name = STATION_NAMES[i % STATION_NAMES.len()];
                let name = if i >= STATION_NAMES.len() {
                    format!("{base_name} ({})", i / STATION_NAMES.len() + 1)
                } else {
                    base_name.to_string()
                };
                TransitHub {
                    name,
                    coordinate: Coordinate::new(center.lat + dlat, center.lng + dlng),
                    mode,
                    avg_wait_minutes,
                }
            })
            .collect()
    }

    /// the nearest hub (optionally of one mode) within the hub-distance
    /// gate, or None when nothing is reachable.
    fn nearest_hub<'a>(
        &self,
        at: &Coordinate,
        hubs: &'a [TransitHub],
        mode: Option<TransportMode>,
    ) -> Option<&'a TransitHub> {
        hubs.iter()
            .filter(|hub| mode.is_none_or(|m| hub.mode == m))
            .min_by(|a, b| {
                geo_utils::distance_km(at, &a.coordinate)
                    .total_cmp(&geo_utils::distance_km(at, &b.coordinate))
            })
            .filter(|hub| {
                geo_utils::distance_km(at, &hub.coordinate) <= self.config.max_hub_distance_km
            })
    }

    /// the closest hub of one mode regardless of the reach gate; the gate
    /// is enforced once on the overall nearest hub.
    fn closest_of_mode<'a>(
        &self,
        at: &Coordinate,
        hubs: &'a [TransitHub],
        mode: TransportMode,
    ) -> Option<&'a TransitHub> {
        hubs.iter()
            .filter(|hub| hub.mode == mode)
            .min_by(|a, b| {
                geo_utils::distance_km(at, &a.coordinate)
                    .total_cmp(&geo_utils::distance_km(at, &b.coordinate))
            })
    }

    /// builds one transit leg between two hubs with mode-specific speed,
    /// crowd jitter, stop count, and line assignment.
    fn create_transit_leg(
        &self,
        from: &TransitHub,
        to: &TransitHub,
        mode: TransportMode,
        sampler: &mut dyn UnitSampler,
    ) -> RouteLeg {
        use uom::si::length::kilometer;
        use uom::si::time::minute;

        let distance_km = geo_utils::distance_km(&from.coordinate, &to.coordinate);
        log::debug!(
            "transit leg {} -> {} ({mode}, {distance_km:.1} km)",
            from.name,
            to.name
        );
        let travel_time = Length::new::<kilometer>(distance_km) / mode.average_speed();
        let base_crowd = match mode {
            TransportMode::Train => 0.5,
            _ => 0.65,
        };
        let stop_count = match mode {
            TransportMode::Train => (distance_km / 10.0).floor() as u32 + 2,
            _ => (distance_km / 1.5).floor() as u32 + 3,
        };
        let line_idx =
            ((sampler.next_unit() * LINE_NAMES.len() as f64).floor() as usize).min(LINE_NAMES.len() - 1);
        RouteLeg {
            leg_id: uuid::Uuid::new_v4().to_string(),
            mode,
            start: from.coordinate,
            end: to.coordinate,
            travel_time_minutes: travel_time.get::<minute>().ceil(),
            wait_time_minutes: from.avg_wait_minutes.round(),
            crowd_score: (base_crowd + sampler.next_range(-0.15, 0.15)).clamp(0.0, 1.0),
            distance_km,
            line_name: Some(LINE_NAMES[line_idx].to_string()),
            stop_count: Some(stop_count),
        }
    }

    /// validates and scores one transit composite through the engine with
    /// the transit context set, then applies the flat per-transfer
    /// discount.
    fn build_candidate(
        &self,
        legs: Vec<RouteLeg>,
        start: Coordinate,
        end: Coordinate,
        departure: DateTime<Utc>,
        persona: Persona,
        sampler: &mut dyn UnitSampler,
    ) -> Option<RouteCandidate> {
        if !leg_ops::validate_route(&legs) {
            log::debug!("dropping infeasible transit composite");
            return None;
        }
        let total_travel: f64 = legs.iter().map(|leg| leg.travel_time_minutes).sum();
        let total_minutes: f64 = legs.iter().map(|leg| leg.total_minutes()).sum();
        let total_distance: f64 = legs.iter().map(|leg| leg.distance_km).sum();
        let transfer_count = legs.len().saturating_sub(1) as u32;

        // crowd aggregate weighted by each leg's share of in-vehicle time
        let crowd = if total_travel > 0.0 {
            legs.iter()
                .map(|leg| leg.crowd_score * (leg.travel_time_minutes / total_travel))
                .sum()
        } else {
            0.5
        };

        let request = RciRequest {
            start,
            end,
            base_eta_minutes: total_minutes,
            distance_km: total_distance,
            departure,
            persona,
            transit: Some(TransitContext {
                crowd_stability: Some(crowd),
                transfer_count,
            }),
        };
        let result = self.engine.confidence(&request, sampler);
        let confidence = apply_transfer_post_penalty(result, transfer_count);

        let name = legs
            .iter()
            .map(|leg| match leg.mode {
                TransportMode::Train => "Train",
                _ => "Metro",
            })
            .join(" + ");

        Some(RouteCandidate {
            route_id: uuid::Uuid::new_v4().to_string(),
            mode_type: ModeClass::Transit,
            name: Some(name),
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

#[cfg(test)]
mod test {
    use super::{TransitConfig, TransitSynthesizer};
    use crate::model::advisory::AdvisoryZoneStore;
    use crate::model::congestion::CongestionPatternTable;
    use crate::model::failure::FailureHistoryStore;
    use crate::model::rci::RciEngine;
    use chrono::{TimeZone, Utc};
    use routewise_core::model::{Coordinate, ModeClass, Persona, TransportMode};
    use routewise_core::util::sampler::SequenceSampler;
    use std::sync::Arc;

    fn mock_synthesizer() -> TransitSynthesizer {
        let engine = Arc::new(RciEngine::new(
            Arc::new(FailureHistoryStore::default()),
            Arc::new(CongestionPatternTable::sample()),
            Arc::new(AdvisoryZoneStore::default()),
        ));
        TransitSynthesizer::new(engine, TransitConfig::default())
    }

    fn departure() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 5, 12, 5, 0)
            .single()
            .expect("test invariant failed: could not build departure time")
    }

    #[test]
    fn test_synthesizes_metro_train_and_mixed() {
        let synthesizer = mock_synthesizer();
        let start = Coordinate::new(19.0760, 72.8777);
        let end = Coordinate::new(19.1200, 72.9100);
        // constant draws place every hub at the same offset, so both a
        // train station and metro stops exist at each endpoint
        let mut sampler = SequenceSampler::constant(0.5);
        let candidates =
            synthesizer.synthesize(start, end, departure(), Persona::SafePlanner, &mut sampler);

        assert_eq!(candidates.len(), 3);
        assert!(candidates.iter().all(|c| c.mode_type == ModeClass::Transit));

        // metro-only and train-only are single legs; the mixed route has
        // one transfer
        let transfer_counts: Vec<u32> =
            candidates.iter().map(|c| c.transfer_count.unwrap_or(0)).collect();
        assert_eq!(transfer_counts, vec![0, 0, 1]);

        let mixed = &candidates[2];
        let modes: Vec<TransportMode> = mixed.legs.iter().map(|leg| leg.mode).collect();
        assert_eq!(modes, vec![TransportMode::Metro, TransportMode::Train]);
        // flat discount applies to the mixed route only
        assert!(
            (mixed.confidence.original_rci - mixed.confidence.rci - 0.03).abs() < 1e-12
                || mixed.confidence.rci == 0.0
        );
        for candidate in candidates.iter() {
            for leg in candidate.legs.iter() {
                assert!(leg.line_name.is_some());
                assert!(leg.stop_count.is_some());
            }
        }
    }

    #[test]
    fn test_transit_context_reaches_the_engine() {
        let synthesizer = mock_synthesizer();
        let start = Coordinate::new(19.0760, 72.8777);
        let end = Coordinate::new(19.1200, 72.9100);
        let mut sampler = SequenceSampler::constant(0.5);
        let candidates =
            synthesizer.synthesize(start, end, departure(), Persona::Explorer, &mut sampler);

        // every candidate carries the transit leg-count risk factor from
        // the engine's transit branch
        for candidate in candidates.iter() {
            let legs = candidate.legs.len();
            assert!(candidate
                .confidence
                .risk_factors
                .iter()
                .any(|r| r.contains(&format!("transit route with {legs} leg(s)"))));
        }
    }

    #[test]
    fn test_unreachable_hubs_yield_no_candidates() {
        let mut synthesizer = mock_synthesizer();
        // hubs scatter up to 2.5 km out but must match within 100 m
        synthesizer.config.max_hub_distance_km = 0.1;
        let start = Coordinate::new(19.0760, 72.8777);
        let end = Coordinate::new(19.1200, 72.9100);
        let mut sampler = SequenceSampler::constant(0.9);
        let candidates =
            synthesizer.synthesize(start, end, departure(), Persona::Rusher, &mut sampler);
        assert!(candidates.is_empty());
    }
}
