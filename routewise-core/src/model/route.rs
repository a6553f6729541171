use super::{ConfidenceResult, Coordinate, ModeClass, RouteLeg};
use serde::Serialize;

/// fallback crowd score for candidates with no leg data (single-mode road
/// routes from the base router).
pub const DEFAULT_CROWD_SCORE: f64 = 0.75;
/// fallback transfer-success score for candidates with no leg data.
pub const DEFAULT_TRANSFER_SUCCESS: f64 = 0.85;

/// one proposed journey, scored and ready for persona ranking. candidates
/// are created fresh per routing request and discarded with the response;
/// the only post-construction mutation is attaching a persona score.
#[derive(Debug, Clone, Serialize)]
pub struct RouteCandidate {
    pub route_id: String,
    pub mode_type: ModeClass,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub start: Coordinate,
    pub end: Coordinate,
    #[serde(rename = "distance")]
    pub distance_km: f64,
    #[serde(rename = "duration")]
    pub duration_minutes: f64,
    /// opaque geometry token, passed through for rendering
    pub geometry: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub legs: Vec<RouteLeg>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_count: Option<u32>,
    #[serde(flatten)]
    pub confidence: ConfidenceResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persona_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persona_explanation: Option<String>,
    /// base router navigation steps, untouched by this core
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<serde_json::Value>,
}

impl RouteCandidate {
    /// number of transfers in this journey: the recorded count if present,
    /// otherwise derived from the leg sequence.
    pub fn transfers(&self) -> u32 {
        match self.transfer_count {
            Some(count) => count,
            None => self.legs.len().saturating_sub(1) as u32,
        }
    }

    /// aggregate crowd score across legs, weighted by each leg's share of
    /// the total leg time. leg-less candidates fall back to a neutral
    /// default.
    pub fn crowd_score(&self) -> f64 {
        if self.legs.is_empty() {
            return DEFAULT_CROWD_SCORE;
        }
        let total: f64 = self.legs.iter().map(|leg| leg.total_minutes()).sum();
        if total <= 0.0 {
            let sum: f64 = self.legs.iter().map(|leg| leg.crowd_score).sum();
            return sum / self.legs.len() as f64;
        }
        self.legs
            .iter()
            .map(|leg| leg.crowd_score * (leg.total_minutes() / total))
            .sum()
    }

    /// aggregate transfer-success score: degrades by 15% per transfer with a
    /// floor depending on the candidate class.
    pub fn transfer_success(&self) -> f64 {
        if self.legs.is_empty() {
            return DEFAULT_TRANSFER_SUCCESS;
        }
        let floor = match self.mode_type {
            ModeClass::Transit => 0.6,
            _ => 0.5,
        };
        (1.0 - 0.15 * self.transfers() as f64).max(floor)
    }

    /// attaches a persona score and its explanation. the confidence result
    /// is left untouched.
    pub fn with_persona_score(mut self, score: f64, explanation: String) -> RouteCandidate {
        self.persona_score = Some(score);
        self.persona_explanation = Some(explanation);
        self
    }
}
