use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// category tag for an advisory zone. types only affect how a zone is
/// described to the rider; all types score through the same decay and
/// overlap formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryZoneType {
    Protest,
    Congestion,
    HealthAlert,
    WeatherDisruption,
    InfrastructureIssue,
    TransitDelay,
}

impl Display for AdvisoryZoneType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AdvisoryZoneType::Protest => "protest",
            AdvisoryZoneType::Congestion => "congestion",
            AdvisoryZoneType::HealthAlert => "health_alert",
            AdvisoryZoneType::WeatherDisruption => "weather_disruption",
            AdvisoryZoneType::InfrastructureIssue => "infrastructure_issue",
            AdvisoryZoneType::TransitDelay => "transit_delay",
        };
        write!(f, "{s}")
    }
}
