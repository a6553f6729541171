use routewise_core::model::{ConfidenceTier, Persona, RciComponents, TimeWindow};

/// transit-typical component overrides: transit schedules are less exposed
/// to road traffic, so transfer success, delay variance, and last-mile
/// availability start from fixed calibration constants.
pub const TRANSIT_TRANSFER_SUCCESS: f64 = 0.85;
pub const TRANSIT_DEFAULT_CROWD: f64 = 0.65;
pub const TRANSIT_DELAY_VARIANCE: f64 = 0.88;
pub const TRANSIT_LAST_MILE_AVAIL: f64 = 0.90;
/// transfer-success deduction per transfer in transit mode.
pub const TRANSFER_SUCCESS_STEP: f64 = 0.05;

/// safe-planner bonus when the pre-penalty score is already reliable.
pub const RELIABLE_ROUTE_BONUS: f64 = 0.15;
/// pre-penalty score above which the safe-planner bonus applies.
pub const RELIABLE_ROUTE_THRESHOLD: f64 = 0.7;
/// safe-planner escalation added to an already-material failure penalty.
pub const FAILURE_ESCALATION: f64 = 0.20;
pub const FAILURE_ESCALATION_THRESHOLD: f64 = 0.15;

/// final scores never leave this band: a route is never reported below 10%
/// confidence nor above certainty.
pub const MIN_FINAL_RCI: f64 = 0.1;
pub const MAX_FINAL_RCI: f64 = 1.0;

/// applies the transit component overrides in place and returns the
/// per-transfer transfer-success deduction's risk factor, if any.
pub fn apply_transit_overrides(
    components: &mut RciComponents,
    crowd_stability: Option<f64>,
    transfer_count: u32,
    risk_factors: &mut Vec<String>,
) {
    components.transfer_success = TRANSIT_TRANSFER_SUCCESS;
    components.crowd_stability = crowd_stability.unwrap_or(TRANSIT_DEFAULT_CROWD);
    components.delay_variance = TRANSIT_DELAY_VARIANCE;
    components.last_mile_avail = TRANSIT_LAST_MILE_AVAIL;
    if transfer_count > 0 {
        components.transfer_success -= transfer_count as f64 * TRANSFER_SUCCESS_STEP;
        risk_factors.push(format!(
            "{transfer_count} transfer(s) required (each -5% transfer success)"
        ));
    }
}

/// persona preference adjustments specific to transit journeys. these are
/// preference bonuses/penalties, not reliability penalties; the base
/// per-transfer reliability discount is applied by the synthesizers.
pub fn transit_persona_bonus(
    persona: Persona,
    transfer_count: u32,
    crowd_stability: f64,
    base_eta_minutes: f64,
    risk_factors: &mut Vec<String>,
) -> f64 {
    let transfers = transfer_count as f64;
    match persona {
        Persona::Rusher => {
            let mut bonus = match transfer_count {
                1 => 0.05,
                n if n > 1 => -transfers * 0.03,
                _ => 0.0,
            };
            bonus -= (base_eta_minutes / 60.0) * 0.01;
            risk_factors.push("rusher prefers express routes with minimal transfers".to_string());
            bonus
        }
        Persona::SafePlanner => {
            let mut bonus = 0.08;
            if crowd_stability > 0.75 {
                bonus -= 0.08;
                risk_factors
                    .push("crowded transit during peak, unfavorable for safe planner".to_string());
            } else {
                risk_factors.push("transit uncrowded, favorable for safe planner".to_string());
            }
            bonus
        }
        Persona::ComfortSeeker => {
            let mut bonus = 0.0;
            if crowd_stability < 0.5 {
                bonus += 0.10;
                risk_factors
                    .push("comfort seeker enjoys spacious, uncrowded transit".to_string());
            } else if crowd_stability > 0.8 {
                bonus -= 0.12;
                risk_factors.push("comfort seeker dislikes crowded transit".to_string());
            }
            bonus - transfers * 0.04
        }
        Persona::Explorer => {
            risk_factors.push("explorer enjoys diverse transit routes".to_string());
            0.12 + transfers * 0.02
        }
    }
}

/// short natural-language summary of a confidence result, keyed off the
/// tier and whichever penalties dominate.
pub fn explanation(
    tier: ConfidenceTier,
    final_rci: f64,
    has_failure_history: bool,
    failure_penalty: f64,
    time_window_penalty: f64,
    advisory_penalty: f64,
    window: &TimeWindow,
) -> String {
    let pct = final_rci * 100.0;
    match tier {
        ConfidenceTier::High => {
            let mut s = format!("highly reliable route (RCI {pct:.0}%)");
            if has_failure_history {
                s.push_str(", despite historical delays; time window is favorable");
            } else {
                s.push_str("; no major failures recorded in this time window");
            }
            s
        }
        ConfidenceTier::Medium => {
            let mut s = format!("moderately reliable route (RCI {pct:.0}%)");
            if failure_penalty > 0.1 {
                s.push_str(&format!(
                    "; carries a {:.0}% failure penalty",
                    failure_penalty * 100.0
                ));
            }
            if time_window_penalty > 0.1 {
                s.push_str(&format!("; congestion expected in {window}"));
            }
            s
        }
        ConfidenceTier::Low => {
            let mut s = format!("lower reliability route (RCI {pct:.0}%)");
            if failure_penalty > 0.15 {
                s.push_str("; high failure rate in this time window");
            }
            if advisory_penalty > 0.05 {
                s.push_str("; affected by advisory zones");
            }
            s.push_str("; consider alternative routes");
            s
        }
    }
}
