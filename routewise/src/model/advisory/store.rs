use super::{AdvisoryZone, AdvisoryZoneError, AdvisoryZoneType};
use chrono::{DateTime, Duration, Utc};
use routewise_core::model::Coordinate;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// read-only collection of advisory zones, loaded once at startup and read
/// concurrently by any number of routing requests. no writer exists in this
/// core; decayed severities are computed per read, never stored.
#[derive(Debug, Default)]
pub struct AdvisoryZoneStore {
    zones: Vec<AdvisoryZone>,
}

impl AdvisoryZoneStore {
    pub fn new(zones: Vec<AdvisoryZone>) -> AdvisoryZoneStore {
        AdvisoryZoneStore { zones }
    }

    /// loads zones from a JSON array file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<AdvisoryZoneStore, AdvisoryZoneError> {
        let path_str = path.as_ref().to_string_lossy().to_string();
        let file = File::open(path.as_ref()).map_err(|source| AdvisoryZoneError::FileError {
            path: path_str.clone(),
            source,
        })?;
        let zones: Vec<AdvisoryZone> = serde_json::from_reader(BufReader::new(file))
            .map_err(|source| AdvisoryZoneError::ParseError {
                path: path_str,
                source,
            })?;
        log::debug!("loaded {} advisory zones", zones.len());
        Ok(AdvisoryZoneStore::new(zones))
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// zones applicable at the given instant.
    pub fn active_at(&self, now: &DateTime<Utc>) -> Vec<&AdvisoryZone> {
        self.zones.iter().filter(|z| z.active_at(now)).collect()
    }

    /// a small set of simulated zones around a downtown area, anchored to
    /// the provided instant. stands in for a live advisory feed.
    pub fn sample(now: &DateTime<Utc>) -> AdvisoryZoneStore {
        let zones = vec![
            AdvisoryZone {
                id: "advisory-1".to_string(),
                zone_type: AdvisoryZoneType::Congestion,
                severity: 4.0,
                center: Coordinate::new(40.7158, -74.0074),
                radius_km: 0.8,
                description: "heavy traffic congestion reported on 5th Avenue".to_string(),
                window_start: *now - Duration::hours(2),
                window_end: *now + Duration::hours(1),
                decay_rate: 0.15,
                is_active: true,
            },
            AdvisoryZone {
                id: "advisory-2".to_string(),
                zone_type: AdvisoryZoneType::InfrastructureIssue,
                severity: 3.0,
                center: Coordinate::new(40.7180, -74.0022),
                radius_km: 0.5,
                description: "road construction on Broadway, lane closure until 6 PM".to_string(),
                window_start: *now - Duration::hours(1),
                window_end: *now + Duration::hours(4),
                decay_rate: 0.2,
                is_active: true,
            },
            AdvisoryZone {
                id: "advisory-3".to_string(),
                zone_type: AdvisoryZoneType::HealthAlert,
                severity: 2.0,
                center: Coordinate::new(40.7200, -73.9950),
                radius_km: 1.2,
                description: "high activity near medical centers".to_string(),
                window_start: *now - Duration::hours(12),
                window_end: *now + Duration::hours(6),
                decay_rate: 0.05,
                is_active: true,
            },
            AdvisoryZone {
                id: "advisory-4".to_string(),
                zone_type: AdvisoryZoneType::WeatherDisruption,
                severity: 3.0,
                center: Coordinate::new(40.7100, -74.0100),
                radius_km: 2.0,
                description: "heavy rainfall expected, potential flooding in low-lying areas"
                    .to_string(),
                window_start: *now,
                window_end: *now + Duration::hours(3),
                decay_rate: 0.25,
                is_active: true,
            },
            AdvisoryZone {
                id: "advisory-5".to_string(),
                zone_type: AdvisoryZoneType::TransitDelay,
                severity: 2.0,
                center: Coordinate::new(40.7260, -73.9897),
                radius_km: 0.6,
                description: "subway signal issues, single-tracking on the N/R lines".to_string(),
                window_start: *now - Duration::minutes(30),
                window_end: *now + Duration::hours(2),
                decay_rate: 0.18,
                is_active: true,
            },
        ];
        AdvisoryZoneStore::new(zones)
    }
}

#[cfg(test)]
mod test {
    use super::AdvisoryZoneStore;
    use chrono::{Duration, Utc};

    #[test]
    fn test_sample_store_active_filtering() {
        let now = Utc::now();
        let store = AdvisoryZoneStore::sample(&now);
        assert_eq!(store.len(), 5);

        // all sample zones are active at their anchor time
        assert_eq!(store.active_at(&now).len(), 5);

        // two hours in, the 1-hour congestion zone has expired
        let later = now + Duration::hours(2);
        let active = store.active_at(&later);
        assert!(active.len() < 5);
        assert!(active.iter().all(|z| z.window_end >= later));
    }
}
