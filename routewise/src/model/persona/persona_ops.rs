use super::PersonaRankError;
use routewise_core::model::{Persona, RouteCandidate};

/// minimum acceptable confidence for the rusher persona: speed is never
/// preferred over a route below this floor.
pub const MIN_ACCEPTABLE_RCI: f64 = 0.50;
/// discount applied to a rusher route below the confidence floor.
const LOW_RCI_DISCOUNT: f64 = 0.5;
/// speed bonus weight per minute saved against a one-hour reference trip.
const TIME_WEIGHT: f64 = 0.008;
/// comfort-seeker weight on the crowd penalty.
const CROWD_WEIGHT: f64 = 0.15;
/// trips are normalized against a two-hour ceiling for the explorer blend.
const NORMALIZING_MINUTES: f64 = 120.0;

/// a persona-adjusted route score with its human-readable rationale.
/// higher is better; scores from different personas are not comparable.
#[derive(Debug, Clone)]
pub struct PersonaScore {
    pub score: f64,
    pub explanation: String,
}

/// applies one persona's preference formula to an already-confidence-rated
/// candidate. pure over the candidate's rci, duration, transfers, and
/// aggregate crowd/transfer-success scores. the only failure mode is a
/// non-finite result from malformed numeric input.
pub fn apply_persona_weight(
    route: &RouteCandidate,
    persona: Persona,
) -> Result<PersonaScore, PersonaRankError> {
    let result = match persona {
        Persona::Rusher => score_rusher(route),
        Persona::SafePlanner => score_safe_planner(route),
        Persona::ComfortSeeker => score_comfort_seeker(route),
        Persona::Explorer => score_explorer(route),
    };
    if !result.score.is_finite() {
        return Err(PersonaRankError::NonFiniteScore {
            route_id: route.route_id.clone(),
            persona,
        });
    }
    Ok(result)
}

fn transfer_suffix(route: &RouteCandidate) -> String {
    let transfers = route.transfers();
    if is_multi_modal(route) {
        let plural = if transfers == 1 { "" } else { "s" };
        format!(" ({transfers} transfer{plural})")
    } else {
        String::new()
    }
}

fn is_multi_modal(route: &RouteCandidate) -> bool {
    route.mode_type != routewise_core::model::ModeClass::Single || route.transfers() > 0
}

/// prioritizes speed, but only above the confidence floor; routes below it
/// are heavily discounted regardless of how fast they are.
fn score_rusher(route: &RouteCandidate) -> PersonaScore {
    let base = route.confidence.rci;
    let minutes = route.duration_minutes;
    if base < MIN_ACCEPTABLE_RCI {
        return PersonaScore {
            score: base * LOW_RCI_DISCOUNT,
            explanation: format!(
                "rusher mode: route discounted for low reliability ({:.0}% < {:.0}%)",
                base * 100.0,
                MIN_ACCEPTABLE_RCI * 100.0
            ),
        };
    }
    let speed_bonus = ((60.0 - minutes) * TIME_WEIGHT).max(0.0);
    let transfer_penalty = if is_multi_modal(route) {
        route.transfers() as f64 * 0.02
    } else {
        0.0
    };
    PersonaScore {
        score: base + speed_bonus - transfer_penalty,
        explanation: format!(
            "rusher mode: fastest route with acceptable confidence ({:.0}% RCI, {minutes:.0} min){}",
            base * 100.0,
            transfer_suffix(route)
        ),
    }
}

/// pure confidence priority with a steep per-transfer penalty; safe
/// planners avoid complex journeys.
fn score_safe_planner(route: &RouteCandidate) -> PersonaScore {
    let base = route.confidence.rci;
    let transfer_penalty = if is_multi_modal(route) {
        route.transfers() as f64 * 0.08
    } else {
        0.0
    };
    PersonaScore {
        score: base - transfer_penalty,
        explanation: format!(
            "safe planner: highest reliability route ({:.0}% RCI){}",
            base * 100.0,
            transfer_suffix(route)
        ),
    }
}

/// penalizes crowds, rough transfers, and journey complexity.
fn score_comfort_seeker(route: &RouteCandidate) -> PersonaScore {
    let base = route.confidence.rci;
    let crowd = route.crowd_score();
    let transfer_success = route.transfer_success();
    let crowd_penalty = (1.0 - crowd) * CROWD_WEIGHT;
    let complexity_penalty = (1.0 - transfer_success) * 0.10
        + if is_multi_modal(route) {
            route.transfers() as f64 * 0.05
        } else {
            0.0
        };
    PersonaScore {
        score: base - crowd_penalty - complexity_penalty,
        explanation: format!(
            "comfort seeker: less crowded route ({:.0}% comfort, {:.0}% smooth transfers){}",
            crowd * 100.0,
            transfer_success * 100.0,
            transfer_suffix(route)
        ),
    }
}

/// a balanced blend of confidence, time, and comfort, with a small variety
/// reward per transfer.
fn score_explorer(route: &RouteCandidate) -> PersonaScore {
    let base = route.confidence.rci;
    let minutes = route.duration_minutes;
    let crowd = route.crowd_score();
    let normalized_time = (1.0 - minutes / NORMALIZING_MINUTES).clamp(0.0, 1.0);
    let variety_bonus = if is_multi_modal(route) {
        route.transfers() as f64 * 0.01
    } else {
        0.0
    };
    PersonaScore {
        score: 0.4 * base + 0.3 * normalized_time + 0.3 * crowd + variety_bonus,
        explanation: format!(
            "explorer: balanced route ({:.0}% RCI, {minutes:.0} min, {:.0}% comfort){}",
            base * 100.0,
            crowd * 100.0,
            transfer_suffix(route)
        ),
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::{apply_persona_weight, MIN_ACCEPTABLE_RCI};
    use routewise_core::model::{
        ConfidenceResult, ConfidenceTier, Coordinate, ModeClass, Persona, RciComponents,
        RouteCandidate,
    };

    pub(crate) fn mock_candidate(id: &str, rci: f64, minutes: f64) -> RouteCandidate {
        RouteCandidate {
            route_id: id.to_string(),
            mode_type: ModeClass::Single,
            name: None,
            start: Coordinate::new(19.23, 72.86),
            end: Coordinate::new(19.17, 72.95),
            distance_km: 14.0,
            duration_minutes: minutes,
            geometry: String::new(),
            legs: vec![],
            transfer_count: None,
            confidence: ConfidenceResult {
                rci,
                original_rci: rci,
                explanation: String::new(),
                failure_penalty: 0.0,
                time_window_penalty: 0.0,
                advisory_penalty: 0.0,
                persona_bonus: 0.0,
                components: RciComponents {
                    on_time_prob: rci,
                    transfer_success: 0.85,
                    crowd_stability: 0.75,
                    delay_variance: 0.8,
                    last_mile_avail: 0.9,
                },
                risk_factors: vec![],
                tier: ConfidenceTier::of(rci),
            },
            persona_score: None,
            persona_explanation: None,
            steps: None,
        }
    }

    #[test]
    fn test_rusher_discounts_below_floor() {
        // base RCI 0.40 is under the 0.50 floor: score must be at most 0.20
        // regardless of speed
        let route = mock_candidate("r1", 0.40, 5.0);
        let scored = apply_persona_weight(&route, Persona::Rusher)
            .expect("test invariant failed: scoring should succeed");
        assert!(scored.score <= 0.40 * 0.5 + 1e-12);
        assert!(scored.explanation.contains("low reliability"));
        assert!(route.confidence.rci < MIN_ACCEPTABLE_RCI);
    }

    #[test]
    fn test_rusher_speed_bonus_above_floor() {
        let fast = mock_candidate("r1", 0.7, 20.0);
        let slow = mock_candidate("r2", 0.7, 90.0);
        let fast_score = apply_persona_weight(&fast, Persona::Rusher)
            .expect("test invariant failed: scoring should succeed");
        let slow_score = apply_persona_weight(&slow, Persona::Rusher)
            .expect("test invariant failed: scoring should succeed");
        // 0.7 + (60-20)*0.008 vs 0.7 + 0 (negative bonus floors at zero)
        assert!((fast_score.score - 1.02).abs() < 1e-12);
        assert!((slow_score.score - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_safe_planner_transfer_penalty_scenario() {
        // 2-transfer multi-modal candidate with base RCI 0.80:
        // persona-adjusted score = 0.80 - 2*0.08 = 0.64
        let mut route = mock_candidate("r1", 0.80, 45.0);
        route.mode_type = ModeClass::Multi;
        route.transfer_count = Some(2);
        let scored = apply_persona_weight(&route, Persona::SafePlanner)
            .expect("test invariant failed: scoring should succeed");
        assert!((scored.score - 0.64).abs() < 1e-12);
        assert!(scored.explanation.contains("(2 transfers)"));
    }

    #[test]
    fn test_explorer_blend() {
        let route = mock_candidate("r1", 0.6, 60.0);
        let scored = apply_persona_weight(&route, Persona::Explorer)
            .expect("test invariant failed: scoring should succeed");
        // 0.4*0.6 + 0.3*(1 - 60/120) + 0.3*0.75 (default crowd)
        assert!((scored.score - 0.615).abs() < 1e-12);
    }

    #[test]
    fn test_non_finite_score_is_an_error() {
        let route = mock_candidate("r1", f64::NAN, 30.0);
        let result = apply_persona_weight(&route, Persona::SafePlanner);
        assert!(result.is_err());
    }
}
