use chrono::NaiveDate;
use routewise_core::model::TimeWindow;
use serde::{Deserialize, Serialize};

/// maximum share of the confidence score a failure history can remove.
pub const MAX_FAILURE_PENALTY: f64 = 0.30;

/// historical journey outcomes for one route signature in one 15-minute
/// time window. read-only; aggregated upstream of this core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureHistoryRecord {
    /// rounded coordinate signature, `lat_lng_lat_lng` to 2 decimals
    pub route_signature: String,
    pub time_window: TimeWindow,
    pub failure_count: u64,
    pub total_journeys: u64,
    pub avg_delay_minutes: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_failure_date: Option<NaiveDate>,
}

impl FailureHistoryRecord {
    /// share of recorded journeys that failed, in [0,1]. a record with no
    /// journeys contributes no failure evidence.
    pub fn failure_rate(&self) -> f64 {
        if self.total_journeys == 0 {
            return 0.0;
        }
        (self.failure_count as f64 / self.total_journeys as f64).clamp(0.0, 1.0)
    }

    /// confidence penalty for this record: `failure_rate * 0.30`, capped at
    /// 30% by construction.
    pub fn penalty(&self) -> f64 {
        self.failure_rate() * MAX_FAILURE_PENALTY
    }
}

#[cfg(test)]
mod test {
    use super::FailureHistoryRecord;
    use routewise_core::model::TimeWindow;

    #[test]
    fn test_penalty_scenario() {
        // 15 failures over 50 journeys: penalty 0.30 * 0.3 = 0.09
        let record = FailureHistoryRecord {
            route_signature: "19.23_72.86_19.17_72.95".to_string(),
            time_window: TimeWindow::new("08:30-08:45"),
            failure_count: 15,
            total_journeys: 50,
            avg_delay_minutes: 18.0,
            last_failure_date: None,
        };
        assert!((record.failure_rate() - 0.3).abs() < 1e-12);
        assert!((record.penalty() - 0.09).abs() < 1e-12);
    }

    #[test]
    fn test_empty_record_is_no_evidence() {
        let record = FailureHistoryRecord {
            route_signature: "0.00_0.00_0.00_0.00".to_string(),
            time_window: TimeWindow::new("08:30-08:45"),
            failure_count: 0,
            total_journeys: 0,
            avg_delay_minutes: 0.0,
            last_failure_date: None,
        };
        assert_eq!(record.penalty(), 0.0);
    }
}
