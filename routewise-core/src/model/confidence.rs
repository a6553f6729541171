use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// component weights for the route confidence index. these sum to 1.0 so the
/// weighted combination stays in [0,1] for clamped components.
pub mod weight {
    pub const ON_TIME_PROB: f64 = 0.35;
    pub const TRANSFER_SUCCESS: f64 = 0.25;
    pub const CROWD_STABILITY: f64 = 0.20;
    pub const DELAY_VARIANCE: f64 = 0.10;
    pub const LAST_MILE_AVAIL: f64 = 0.10;
}

/// the five sub-component scores combined into a route confidence index.
/// each value is a probability-like score in [0,1] after clamping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RciComponents {
    pub on_time_prob: f64,
    pub transfer_success: f64,
    pub crowd_stability: f64,
    pub delay_variance: f64,
    pub last_mile_avail: f64,
}

impl RciComponents {
    /// each component clamped to the unit interval.
    pub fn clamped(&self) -> RciComponents {
        RciComponents {
            on_time_prob: self.on_time_prob.clamp(0.0, 1.0),
            transfer_success: self.transfer_success.clamp(0.0, 1.0),
            crowd_stability: self.crowd_stability.clamp(0.0, 1.0),
            delay_variance: self.delay_variance.clamp(0.0, 1.0),
            last_mile_avail: self.last_mile_avail.clamp(0.0, 1.0),
        }
    }

    /// combines the (clamped) components into a single weighted score in
    /// [0,1]. this is the "original" route confidence index before
    /// penalties and persona adjustments are applied.
    pub fn weighted_score(&self) -> f64 {
        let c = self.clamped();
        let score = weight::ON_TIME_PROB * c.on_time_prob
            + weight::TRANSFER_SUCCESS * c.transfer_success
            + weight::CROWD_STABILITY * c.crowd_stability
            + weight::DELAY_VARIANCE * c.delay_variance
            + weight::LAST_MILE_AVAIL * c.last_mile_avail;
        score.clamp(0.0, 1.0)
    }
}

/// coarse classification of a final confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    pub const HIGH_THRESHOLD: f64 = 0.75;
    pub const MEDIUM_THRESHOLD: f64 = 0.55;

    pub fn of(score: f64) -> ConfidenceTier {
        if score >= Self::HIGH_THRESHOLD {
            ConfidenceTier::High
        } else if score >= Self::MEDIUM_THRESHOLD {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::Low
        }
    }
}

impl Display for ConfidenceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ConfidenceTier::High => "HIGH",
            ConfidenceTier::Medium => "MEDIUM",
            ConfidenceTier::Low => "LOW",
        };
        write!(f, "{s}")
    }
}

/// the full output of one confidence computation. immutable once produced;
/// penalties are positive magnitudes subtracted from the base score, never
/// negative scores stored directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfidenceResult {
    /// final confidence score in [0.1, 1.0]
    pub rci: f64,
    /// weighted component score before penalties and bonuses
    pub original_rci: f64,
    pub explanation: String,
    pub failure_penalty: f64,
    pub time_window_penalty: f64,
    /// soft penalty from overlapping advisory zones
    #[serde(rename = "osint_penalty")]
    pub advisory_penalty: f64,
    pub persona_bonus: f64,
    pub components: RciComponents,
    pub risk_factors: Vec<String>,
    #[serde(rename = "confidence_level")]
    pub tier: ConfidenceTier,
}

#[cfg(test)]
mod test {
    use super::{ConfidenceTier, RciComponents};

    #[test]
    fn test_weighted_score_of_perfect_components() {
        let components = RciComponents {
            on_time_prob: 1.0,
            transfer_success: 1.0,
            crowd_stability: 1.0,
            delay_variance: 1.0,
            last_mile_avail: 1.0,
        };
        assert!((components.weighted_score() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_weighted_score_clamps_out_of_range_inputs() {
        let components = RciComponents {
            on_time_prob: 1.8,
            transfer_success: -0.4,
            crowd_stability: 0.5,
            delay_variance: 0.5,
            last_mile_avail: 0.5,
        };
        // 0.35*1.0 + 0.25*0.0 + 0.20*0.5 + 0.10*0.5 + 0.10*0.5
        assert!((components.weighted_score() - 0.55).abs() < 1e-12);
    }

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(ConfidenceTier::of(0.75), ConfidenceTier::High);
        assert_eq!(ConfidenceTier::of(0.74), ConfidenceTier::Medium);
        assert_eq!(ConfidenceTier::of(0.55), ConfidenceTier::Medium);
        assert_eq!(ConfidenceTier::of(0.54), ConfidenceTier::Low);
    }
}
