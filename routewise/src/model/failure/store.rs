use super::{FailureHistoryError, FailureHistoryRecord};
use chrono::NaiveDate;
use routewise_core::model::{Coordinate, TimeWindow};
use std::collections::HashMap;
use std::path::Path;

/// builds the lookup signature for a route: start and end coordinates
/// rounded to 2 decimal places, joined as `lat_lng_lat_lng`. the rounding
/// lets nearby departure points share one history bucket.
pub fn route_signature(start: &Coordinate, end: &Coordinate) -> String {
    format!(
        "{:.2}_{:.2}_{:.2}_{:.2}",
        start.lat, start.lng, end.lat, end.lng
    )
}

/// read-only per-route, per-window failure statistics, keyed by rounded
/// coordinate signature and 15-minute window label. absence of a record is
/// absence of evidence, not an error.
#[derive(Debug, Default)]
pub struct FailureHistoryStore {
    records: HashMap<(String, TimeWindow), FailureHistoryRecord>,
}

impl FailureHistoryStore {
    pub fn new(rows: Vec<FailureHistoryRecord>) -> FailureHistoryStore {
        let records = rows
            .into_iter()
            .map(|r| ((r.route_signature.clone(), r.time_window.clone()), r))
            .collect();
        FailureHistoryStore { records }
    }

    /// loads failure history rows from a headered CSV file.
    pub fn from_csv_file<P: AsRef<Path>>(
        path: P,
    ) -> Result<FailureHistoryStore, FailureHistoryError> {
        let path_str = path.as_ref().to_string_lossy().to_string();
        let mut reader =
            csv::Reader::from_path(path.as_ref()).map_err(|source| {
                FailureHistoryError::CsvError {
                    path: path_str.clone(),
                    source,
                }
            })?;
        let rows = reader
            .deserialize::<FailureHistoryRecord>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| FailureHistoryError::CsvError {
                path: path_str,
                source,
            })?;
        log::debug!("loaded {} failure history records", rows.len());
        Ok(FailureHistoryStore::new(rows))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// the failure record for this route and window, if any exists.
    pub fn lookup(
        &self,
        start: &Coordinate,
        end: &Coordinate,
        window: &TimeWindow,
    ) -> Option<&FailureHistoryRecord> {
        let signature = route_signature(start, end);
        self.records.get(&(signature, window.clone()))
    }

    /// simulated failure history standing in for a telemetry-fed table.
    pub fn sample() -> FailureHistoryStore {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d);
        let rows = vec![
            FailureHistoryRecord {
                route_signature: "19.23_72.86_19.17_72.95".to_string(),
                time_window: TimeWindow::new("08:30-08:45"),
                failure_count: 15,
                total_journeys: 50,
                avg_delay_minutes: 18.0,
                last_failure_date: date(2026, 2, 4),
            },
            FailureHistoryRecord {
                route_signature: "19.23_72.86_19.17_72.95".to_string(),
                time_window: TimeWindow::new("08:45-09:00"),
                failure_count: 22,
                total_journeys: 60,
                avg_delay_minutes: 25.0,
                last_failure_date: date(2026, 2, 3),
            },
            FailureHistoryRecord {
                route_signature: "19.23_72.86_23.22_72.65".to_string(),
                time_window: TimeWindow::new("06:00-06:15"),
                failure_count: 3,
                total_journeys: 20,
                avg_delay_minutes: 45.0,
                last_failure_date: date(2026, 1, 28),
            },
        ];
        FailureHistoryStore::new(rows)
    }
}
