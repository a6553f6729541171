use super::AdvisoryZoneType;
use chrono::{DateTime, Utc};
use routewise_core::model::Coordinate;
use serde::{Deserialize, Serialize};

/// lowest severity a zone can decay to while still active.
pub const MIN_SEVERITY: f64 = 1.0;
/// highest severity a zone can report.
pub const MAX_SEVERITY: f64 = 5.0;

/// a time-bound circular geofence carrying a soft reliability advisory.
/// zones never exclude a route outright; they only reduce confidence.
/// stored severity is the value at window start; the effective severity is
/// computed at read time via exponential decay and never written back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisoryZone {
    pub id: String,
    pub zone_type: AdvisoryZoneType,
    /// severity at window start, in [1,5]
    pub severity: f64,
    pub center: Coordinate,
    pub radius_km: f64,
    pub description: String,
    pub window_start: DateTime<Utc>,
    pub window_end: DateTime<Utc>,
    /// exponential decay rate per elapsed hour
    pub decay_rate: f64,
    pub is_active: bool,
}

impl AdvisoryZone {
    /// whether this zone applies at the given instant: the active flag is
    /// set and the instant falls within [window_start, window_end].
    pub fn active_at(&self, now: &DateTime<Utc>) -> bool {
        self.is_active && self.window_start <= *now && *now <= self.window_end
    }

    /// severity at the given instant: `severity * exp(-decay_rate * hours)`
    /// with hours elapsed since window start (floored at zero), clamped to
    /// [1,5]. monotonically non-increasing in elapsed time.
    pub fn decayed_severity(&self, now: &DateTime<Utc>) -> f64 {
        let elapsed_hours = (*now - self.window_start).num_seconds() as f64 / 3600.0;
        let decayed = self.severity * (-self.decay_rate * elapsed_hours.max(0.0)).exp();
        decayed.clamp(MIN_SEVERITY, MAX_SEVERITY)
    }
}
