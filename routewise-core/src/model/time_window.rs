use chrono::Timelike;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// a fixed 15-minute clock-time bucket with a label of the form
/// `HH:MM-HH:MM`. windows are the join key for both the failure history
/// store and the congestion pattern table.
///
/// bucketing depends only on the hour and minute of the provided instant, so
/// the same wall-clock time lands in the same window regardless of date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeWindow(String);

impl TimeWindow {
    pub const WIDTH_MINUTES: u32 = 15;

    /// builds a window from an existing label. no validation is applied;
    /// labels act as opaque lookup keys.
    pub fn new(label: impl Into<String>) -> TimeWindow {
        TimeWindow(label.into())
    }

    /// buckets a clock time into its enclosing 15-minute window. the window
    /// end rolls over into the next hour (08:45 -> "08:45-09:00") and hour
    /// 23 wraps to midnight ("23:45-00:00").
    pub fn of<T: Timelike>(time: &T) -> TimeWindow {
        let hour = time.hour();
        let start_min = (time.minute() / Self::WIDTH_MINUTES) * Self::WIDTH_MINUTES;
        let end_min = start_min + Self::WIDTH_MINUTES;
        let (end_hour, end_min) = if end_min == 60 {
            ((hour + 1) % 24, 0)
        } else {
            (hour, end_min)
        };
        TimeWindow(format!("{hour:02}:{start_min:02}-{end_hour:02}:{end_min:02}"))
    }

    pub fn label(&self) -> &str {
        &self.0
    }
}

impl Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod test {
    use super::TimeWindow;
    use chrono::NaiveTime;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0)
            .expect("test invariant failed: could not build NaiveTime")
    }

    #[test]
    fn test_bucket_mid_window() {
        assert_eq!(TimeWindow::of(&t(8, 37)).label(), "08:30-08:45");
        assert_eq!(TimeWindow::of(&t(8, 30)).label(), "08:30-08:45");
        assert_eq!(TimeWindow::of(&t(17, 14)).label(), "17:00-17:15");
    }

    #[test]
    fn test_bucket_rolls_end_into_next_hour() {
        assert_eq!(TimeWindow::of(&t(8, 45)).label(), "08:45-09:00");
        assert_eq!(TimeWindow::of(&t(8, 59)).label(), "08:45-09:00");
    }

    #[test]
    fn test_bucket_wraps_at_midnight() {
        assert_eq!(TimeWindow::of(&t(23, 50)).label(), "23:45-00:00");
    }
}
