use chrono::{DateTime, Utc};
use routewise_core::model::{Coordinate, Persona};

/// transit-specific inputs to a confidence computation. present only when
/// scoring a synthesized train/metro journey.
#[derive(Debug, Clone)]
pub struct TransitContext {
    /// aggregate crowd score across transit legs, if known
    pub crowd_stability: Option<f64>,
    pub transfer_count: u32,
}

/// inputs for one confidence computation. the engine assumes well-formed
/// numeric values; coordinate range validation happens upstream.
#[derive(Debug, Clone)]
pub struct RciRequest {
    pub start: Coordinate,
    pub end: Coordinate,
    /// baseline travel time estimate from the router or synthesizer
    pub base_eta_minutes: f64,
    pub distance_km: f64,
    /// departure instant; its clock time selects the lookup window
    pub departure: DateTime<Utc>,
    pub persona: Persona,
    pub transit: Option<TransitContext>,
}
