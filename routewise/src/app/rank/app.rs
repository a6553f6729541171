use super::{ConfidenceRecord, RankAppConfig, RankAppError, RankQuery};
use crate::model::advisory::AdvisoryZoneStore;
use crate::model::congestion::CongestionPatternTable;
use crate::model::failure::FailureHistoryStore;
use crate::model::journey::{MultimodalSynthesizer, TransitSynthesizer, TransportHubStore};
use crate::model::persona::rank_by_persona;
use crate::model::rci::{RciEngine, RciRequest};
use chrono::Utc;
use routewise_core::model::{ModeClass, Persona, RouteCandidate, TimeWindow};
use routewise_core::util::sampler::UnitSampler;
use serde::Serialize;
use std::sync::Arc;

/// the response for one rank run: the persona-ordered candidate list plus
/// the denormalized confidence rows for the persistence collaborator.
#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub persona: Persona,
    pub time_window: TimeWindow,
    pub routes: Vec<RouteCandidate>,
    pub confidence_records: Vec<ConfidenceRecord>,
}

/// orchestrates one routing request end to end: scores the base router
/// candidates, synthesizes multi-leg and transit alternatives, and ranks
/// everything by persona preference.
pub struct RankApp {
    pub engine: Arc<RciEngine>,
    pub multimodal: MultimodalSynthesizer,
    pub transit: TransitSynthesizer,
}

impl RankApp {
    /// builds the app from configuration, loading each table from its
    /// configured file or falling back to the built-in simulated data.
    pub fn new(config: &RankAppConfig) -> Result<RankApp, RankAppError> {
        let failure_history = match &config.failure_history_input_file {
            Some(path) => FailureHistoryStore::from_csv_file(path)?,
            None => FailureHistoryStore::sample(),
        };
        let congestion = match &config.congestion_patterns_input_file {
            Some(path) => CongestionPatternTable::from_csv_file(path)?,
            None => CongestionPatternTable::sample(),
        };
        let advisories = match &config.advisory_zones_input_file {
            Some(path) => AdvisoryZoneStore::from_json_file(path)?,
            None => AdvisoryZoneStore::sample(&Utc::now()),
        };
        let hubs = match &config.transport_hubs_input_file {
            Some(path) => TransportHubStore::from_json_file(path)?,
            None => TransportHubStore::sample(),
        };

        let engine = Arc::new(RciEngine::new(
            Arc::new(failure_history),
            Arc::new(congestion),
            Arc::new(advisories),
        ));
        let multimodal = MultimodalSynthesizer::new(engine.clone(), Arc::new(hubs));
        let transit = TransitSynthesizer::new(engine.clone(), config.transit.clone());
        Ok(RankApp {
            engine,
            multimodal,
            transit,
        })
    }

    /// runs one routing request. base router candidates are the only
    /// mandatory output; synthesized journey classes degrade to empty
    /// contributions on failure.
    pub fn run(&self, query: &RankQuery, sampler: &mut dyn UnitSampler) -> RankResponse {
        let persona = Persona::parse_or_default(query.persona.as_deref());
        let departure = query.departure.unwrap_or_else(Utc::now);
        let window = TimeWindow::of(&departure);

        let mut candidates: Vec<RouteCandidate> = Vec::new();

        // single-mode candidates from the base router
        for base in query.routes.iter() {
            let request = RciRequest {
                start: query.start,
                end: query.end,
                base_eta_minutes: base.duration_minutes(),
                distance_km: base.distance_km(),
                departure,
                persona,
                transit: None,
            };
            let confidence = self.engine.confidence(&request, sampler);
            candidates.push(RouteCandidate {
                route_id: uuid::Uuid::new_v4().to_string(),
                mode_type: ModeClass::Single,
                name: base.summary.clone(),
                start: query.start,
                end: query.end,
                distance_km: base.distance_km(),
                duration_minutes: base.duration_minutes(),
                geometry: base.geometry.clone(),
                legs: vec![],
                transfer_count: None,
                confidence,
                persona_score: None,
                persona_explanation: None,
                steps: base.steps.clone(),
            });
        }

        candidates.extend(
            self.multimodal
                .synthesize(query.start, query.end, departure, persona, sampler),
        );
        candidates.extend(
            self.transit
                .synthesize(query.start, query.end, departure, persona, sampler),
        );

        let ranked = rank_by_persona(candidates, persona);
        let confidence_records = ranked
            .iter()
            .map(|candidate| ConfidenceRecord::from_candidate(candidate, &window))
            .collect();

        log::info!(
            "ranked {} candidate(s) for persona {} in window {}",
            ranked.len(),
            persona,
            window
        );
        RankResponse {
            persona,
            time_window: window,
            routes: ranked,
            confidence_records,
        }
    }
}
