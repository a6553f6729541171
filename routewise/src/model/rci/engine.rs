use super::{rci_ops, RciRequest};
use crate::model::advisory::{advisory_ops, AdvisoryZoneStore};
use crate::model::congestion::CongestionPatternTable;
use crate::model::failure::FailureHistoryStore;
use routewise_core::model::{ConfidenceResult, ConfidenceTier, Persona, RciComponents, TimeWindow};
use routewise_core::util::sampler::UnitSampler;
use std::sync::Arc;

/// the route confidence index engine. combines sampled base component
/// scores with failure-history, congestion, and advisory-zone penalties
/// plus persona bonuses into a single confidence result.
///
/// the engine holds shared handles to the three read-only stores and keeps
/// no mutable state; one engine serves any number of concurrent requests.
pub struct RciEngine {
    pub failure_history: Arc<FailureHistoryStore>,
    pub congestion: Arc<CongestionPatternTable>,
    pub advisories: Arc<AdvisoryZoneStore>,
}

impl RciEngine {
    pub fn new(
        failure_history: Arc<FailureHistoryStore>,
        congestion: Arc<CongestionPatternTable>,
        advisories: Arc<AdvisoryZoneStore>,
    ) -> RciEngine {
        RciEngine {
            failure_history,
            congestion,
            advisories,
        }
    }

    /// computes the confidence result for one candidate route. infallible
    /// for well-formed numeric input: missing lookup data contributes zero
    /// penalty, and the final score is clamped to [0.1, 1.0].
    ///
    /// the pipeline applies, in fixed order: sampled base components,
    /// failure-history penalty, congestion penalty, advisory-zone soft
    /// penalty, weighted combination, transit overrides, persona bonus,
    /// final clamp, tier classification, and explanation generation.
    pub fn confidence(
        &self,
        request: &RciRequest,
        sampler: &mut dyn UnitSampler,
    ) -> ConfidenceResult {
        let window = TimeWindow::of(&request.departure);
        let mut risk_factors: Vec<String> = Vec::new();

        // base component scores stand in for a historical-telemetry model;
        // each draw is a bounded jitter around a mode-typical baseline
        let base_delay_risk = 0.2 + 0.15 * sampler.next_unit();
        let mut on_time_prob = 1.0 - base_delay_risk;
        let transfer_success = 0.75 + 0.15 * sampler.next_unit();
        let mut crowd_stability = 0.80 + 0.15 * sampler.next_unit();
        let mut delay_variance = 0.70 + 0.20 * sampler.next_unit();
        let last_mile_avail = 0.85 + 0.10 * sampler.next_unit();

        // failure history scales down on-time probability and delay
        // variance in proportion to the observed failure rate
        let failure_record = self
            .failure_history
            .lookup(&request.start, &request.end, &window);
        let mut failure_penalty = 0.0;
        if let Some(record) = failure_record {
            let rate = record.failure_rate();
            failure_penalty = record.penalty();
            on_time_prob *= 1.0 - rate;
            delay_variance *= 1.0 - failure_penalty;
            risk_factors.push(format!(
                "{:.0}% failure rate in {} time window ({}/{} journeys)",
                rate * 100.0,
                window,
                record.failure_count,
                record.total_journeys
            ));
            risk_factors.push(format!(
                "avg delay of {:.0} min in past failures",
                record.avg_delay_minutes
            ));
        }

        // congestion pattern for the departure window
        let pattern = self.congestion.pattern_for(&window);
        let time_window_penalty = pattern.penalty();
        on_time_prob *= pattern.reliability_multiplier;
        crowd_stability *= 1.0 - pattern.congestion_level * 0.3;
        if pattern.is_heavy() {
            risk_factors.push(format!(
                "high congestion period ({:.0}% congestion level)",
                pattern.congestion_level * 100.0
            ));
            risk_factors.push(format!(
                "typical delay of +{:.0} min at this time",
                pattern.typical_delay_minutes
            ));
        }

        // advisory zones apply a soft penalty against a perfect baseline;
        // zones reduce confidence but never exclude a route
        let zones = self.advisories.active_at(&request.departure);
        let mut advisory_penalty = 0.0;
        if !zones.is_empty() {
            let overlap =
                advisory_ops::overlap(&request.start, &request.end, &zones, &request.departure);
            let avg_severity =
                advisory_ops::average_severity(&overlap.affected, &request.departure);
            advisory_penalty = advisory_ops::soft_penalty(overlap.overlap_score, avg_severity);
            if !overlap.affected.is_empty() {
                risk_factors.push(format!(
                    "route affected by {} advisory zone(s)",
                    overlap.affected.len()
                ));
                for zone in overlap.affected.iter() {
                    risk_factors.push(format!("{}: {}", zone.zone_type, zone.description));
                }
            }
        }

        // the weighted combination before penalties and bonuses. computed
        // from the pre-override components; transit overrides below shape
        // the reported components only.
        let mut components = RciComponents {
            on_time_prob,
            transfer_success,
            crowd_stability,
            delay_variance,
            last_mile_avail,
        }
        .clamped();
        let original_rci = components.weighted_score();

        let mut persona_bonus = 0.0;
        if request.persona == Persona::SafePlanner {
            if original_rci > rci_ops::RELIABLE_ROUTE_THRESHOLD {
                persona_bonus += rci_ops::RELIABLE_ROUTE_BONUS;
            } else if failure_penalty > rci_ops::FAILURE_ESCALATION_THRESHOLD {
                failure_penalty += rci_ops::FAILURE_ESCALATION;
            }
        }

        if let Some(ctx) = &request.transit {
            rci_ops::apply_transit_overrides(
                &mut components,
                ctx.crowd_stability,
                ctx.transfer_count,
                &mut risk_factors,
            );
            persona_bonus += rci_ops::transit_persona_bonus(
                request.persona,
                ctx.transfer_count,
                components.crowd_stability,
                request.base_eta_minutes,
                &mut risk_factors,
            );
            risk_factors.push(format!(
                "transit route with {} leg(s)",
                ctx.transfer_count + 1
            ));
            components = components.clamped();
        }

        let final_rci = (original_rci - failure_penalty - time_window_penalty - advisory_penalty
            + persona_bonus)
            .clamp(rci_ops::MIN_FINAL_RCI, rci_ops::MAX_FINAL_RCI);
        let tier = ConfidenceTier::of(final_rci);
        let explanation = rci_ops::explanation(
            tier,
            final_rci,
            failure_record.is_some(),
            failure_penalty,
            time_window_penalty,
            advisory_penalty,
            &window,
        );
        log::debug!(
            "confidence for {} -> {} at {}: {:.3} ({})",
            request.start,
            request.end,
            window,
            final_rci,
            tier
        );

        ConfidenceResult {
            rci: final_rci,
            original_rci,
            explanation,
            failure_penalty,
            time_window_penalty,
            advisory_penalty,
            persona_bonus,
            components,
            risk_factors,
            tier,
        }
    }
}
