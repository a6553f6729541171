use routewise_core::model::{Coordinate, RouteLeg, TransportMode};
use routewise_core::util::geo_utils;
use routewise_core::util::sampler::UnitSampler;
use uom::si::f64::Length;

/// composite journeys longer than this are considered unrealistic and
/// silently dropped.
pub const MAX_COMPOSITE_MINUTES: f64 = 360.0;

/// estimated boarding/check-in wait before a leg departs, in minutes.
/// car and walk legs have none; train and metro waits reflect headways and
/// flight waits include check-in and boarding.
pub fn wait_minutes(mode: TransportMode, sampler: &mut dyn UnitSampler) -> f64 {
    match mode {
        TransportMode::Car | TransportMode::Walk => 0.0,
        TransportMode::Train => sampler.next_range(5.0, 15.0),
        TransportMode::Metro => sampler.next_range(2.0, 8.0),
        TransportMode::Flight => sampler.next_range(90.0, 150.0),
    }
}

/// jittered crowd estimate for a leg of the given mode, in [0,1].
pub fn crowd_score(mode: TransportMode, sampler: &mut dyn UnitSampler) -> f64 {
    let base = match mode {
        TransportMode::Car => 0.5,
        TransportMode::Train => 0.7,
        TransportMode::Flight => 0.3,
        TransportMode::Walk => 0.2,
        TransportMode::Metro => 0.65,
    };
    (base + sampler.next_range(-0.1, 0.1)).clamp(0.0, 1.0)
}

/// builds one synthesized leg between two points: great-circle distance at
/// the mode's average speed, plus mode-specific wait and crowd jitter.
pub fn create_leg(
    mode: TransportMode,
    start: Coordinate,
    end: Coordinate,
    sampler: &mut dyn UnitSampler,
) -> RouteLeg {
    use uom::si::length::kilometer;
    use uom::si::time::minute;

    let distance_km = geo_utils::distance_km(&start, &end);
    let travel_time = Length::new::<kilometer>(distance_km) / mode.average_speed();
    RouteLeg {
        leg_id: uuid::Uuid::new_v4().to_string(),
        mode,
        start,
        end,
        travel_time_minutes: travel_time.get::<minute>().round(),
        wait_time_minutes: wait_minutes(mode, sampler).round(),
        crowd_score: crowd_score(mode, sampler),
        distance_km,
        line_name: None,
        stop_count: None,
    }
}

/// basic feasibility check for a composite journey: a non-empty leg list,
/// no negative travel or wait time, and a total under the 6-hour ceiling.
/// infeasible composites are dropped, never surfaced with degraded scores.
pub fn validate_route(legs: &[RouteLeg]) -> bool {
    if legs.is_empty() {
        return false;
    }
    if legs
        .iter()
        .any(|leg| leg.travel_time_minutes < 0.0 || leg.wait_time_minutes < 0.0)
    {
        return false;
    }
    let total: f64 = legs.iter().map(|leg| leg.total_minutes()).sum();
    total <= MAX_COMPOSITE_MINUTES
}

/// duration-weighted average crowd score across legs, weighting by travel
/// plus wait time.
pub fn aggregate_crowd_score(legs: &[RouteLeg]) -> f64 {
    let total: f64 = legs.iter().map(|leg| leg.total_minutes()).sum();
    if total <= 0.0 {
        if legs.is_empty() {
            return 0.5;
        }
        let sum: f64 = legs.iter().map(|leg| leg.crowd_score).sum();
        return sum / legs.len() as f64;
    }
    legs.iter()
        .map(|leg| leg.crowd_score * (leg.total_minutes() / total))
        .sum()
}

/// combined geometry for rendering: the JSON-encoded sequence of leg
/// endpoint coordinates. this core does not interpolate intermediate
/// geometry.
pub fn combined_geometry(legs: &[RouteLeg]) -> String {
    let mut coords: Vec<[f64; 2]> = Vec::with_capacity(legs.len() + 1);
    if let Some(first) = legs.first() {
        coords.push([first.start.lat, first.start.lng]);
    }
    for leg in legs.iter() {
        coords.push([leg.end.lat, leg.end.lng]);
    }
    serde_json::to_string(&coords).unwrap_or_default()
}
