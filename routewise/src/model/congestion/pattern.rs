use routewise_core::model::TimeWindow;
use serde::{Deserialize, Serialize};

/// maximum share of the confidence score a congested window can remove.
pub const MAX_CONGESTION_PENALTY: f64 = 0.25;
/// congestion levels above this are surfaced as a risk factor.
pub const HEAVY_CONGESTION_LEVEL: f64 = 0.75;

/// expected reliability profile of one 15-minute clock window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CongestionPattern {
    pub time_window: TimeWindow,
    /// multiplier on on-time probability, in (0,1]; 0.7 means 30% less
    /// reliable in this window
    pub reliability_multiplier: f64,
    pub typical_delay_minutes: f64,
    /// congestion intensity in [0,1]
    pub congestion_level: f64,
}

impl CongestionPattern {
    /// confidence penalty for traveling in this window:
    /// `(1 - reliability_multiplier) * 0.25`, capped at 25% by construction.
    pub fn penalty(&self) -> f64 {
        (1.0 - self.reliability_multiplier.clamp(0.0, 1.0)) * MAX_CONGESTION_PENALTY
    }

    /// whether this window is congested enough to call out to the rider.
    pub fn is_heavy(&self) -> bool {
        self.congestion_level > HEAVY_CONGESTION_LEVEL
    }
}

#[cfg(test)]
mod test {
    use super::CongestionPattern;
    use routewise_core::model::TimeWindow;

    #[test]
    fn test_penalty_from_multiplier() {
        let pattern = CongestionPattern {
            time_window: TimeWindow::new("08:30-08:45"),
            reliability_multiplier: 0.55,
            typical_delay_minutes: 30.0,
            congestion_level: 0.95,
        };
        // (1 - 0.55) * 0.25
        assert!((pattern.penalty() - 0.1125).abs() < 1e-12);
        assert!(pattern.is_heavy());
    }
}
