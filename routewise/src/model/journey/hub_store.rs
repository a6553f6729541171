use super::{HubKind, HubStoreError, TransportHub};
use routewise_core::model::Coordinate;
use rstar::RTree;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// hub searches are bounded by this coordinate-space radius. the value is
/// deliberately generous; it exists to reject hub matches on a different
/// continent, not to model walk-up catchments.
pub const DEFAULT_SEARCH_RADIUS: f64 = 50.0;

/// spatial index over the known transport hubs. built once at startup and
/// queried per routing request for the nearest hub of a given kind.
pub struct TransportHubStore {
    tree: RTree<TransportHub>,
    /// maximum hub match distance in coordinate degrees
    pub search_radius: f64,
}

impl TransportHubStore {
    pub fn new(hubs: Vec<TransportHub>) -> TransportHubStore {
        TransportHubStore {
            tree: RTree::bulk_load(hubs),
            search_radius: DEFAULT_SEARCH_RADIUS,
        }
    }

    /// loads hubs from a JSON array file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<TransportHubStore, HubStoreError> {
        let path_str = path.as_ref().to_string_lossy().to_string();
        let file = File::open(path.as_ref()).map_err(|source| HubStoreError::FileError {
            path: path_str.clone(),
            source,
        })?;
        let hubs: Vec<TransportHub> = serde_json::from_reader(BufReader::new(file)).map_err(
            |source| HubStoreError::ParseError {
                path: path_str,
                source,
            },
        )?;
        log::debug!("loaded {} transport hubs", hubs.len());
        Ok(TransportHubStore::new(hubs))
    }

    /// the nearest hub of the given kind within the search radius, if any.
    pub fn nearest(&self, at: &Coordinate, kind: HubKind) -> Option<&TransportHub> {
        let point = [at.lat, at.lng];
        self.tree
            .nearest_neighbor_iter(&point)
            .find(|hub| hub.kind == kind)
            .filter(|hub| hub.distance_to(at) < self.search_radius)
    }

    /// the nearest hub of the given kind, excluding one specific hub. used
    /// to assemble alternative-station journeys.
    pub fn nearest_excluding(
        &self,
        at: &Coordinate,
        kind: HubKind,
        excluded: &TransportHub,
    ) -> Option<&TransportHub> {
        let point = [at.lat, at.lng];
        self.tree
            .nearest_neighbor_iter(&point)
            .find(|hub| hub.kind == kind && hub.name != excluded.name)
            .filter(|hub| hub.distance_to(at) < self.search_radius)
    }

    /// simulated metropolitan hub set standing in for a transit database.
    pub fn sample() -> TransportHubStore {
        let hub = |name: &str, lat: f64, lng: f64, kind: HubKind| TransportHub {
            name: name.to_string(),
            coordinate: Coordinate::new(lat, lng),
            kind,
        };
        TransportHubStore::new(vec![
            hub("Penn Station", 40.7505, -73.9972, HubKind::TrainStation),
            hub("Grand Central", 40.7527, -73.9772, HubKind::TrainStation),
            hub("LaGuardia", 40.7769, -73.8740, HubKind::Airport),
            hub("JFK", 40.6413, -73.7781, HubKind::Airport),
            hub("Newark Airport", 40.6895, -74.1745, HubKind::Airport),
            hub("Port Authority", 40.7562, -73.9897, HubKind::BusStation),
        ])
    }
}

impl TransportHub {
    /// straight-line distance in coordinate degrees, matching the search
    /// radius units.
    fn distance_to(&self, at: &Coordinate) -> f64 {
        let dlat = self.coordinate.lat - at.lat;
        let dlng = self.coordinate.lng - at.lng;
        (dlat * dlat + dlng * dlng).sqrt()
    }
}

#[cfg(test)]
mod test {
    use super::{HubKind, TransportHubStore};
    use routewise_core::model::Coordinate;

    #[test]
    fn test_nearest_hub_by_kind() {
        let store = TransportHubStore::sample();
        let midtown = Coordinate::new(40.7549, -73.9840);

        let station = store
            .nearest(&midtown, HubKind::TrainStation)
            .expect("test invariant failed: a station should match");
        assert_eq!(station.name, "Grand Central");

        let airport = store
            .nearest(&midtown, HubKind::Airport)
            .expect("test invariant failed: an airport should match");
        assert_eq!(airport.name, "LaGuardia");
    }

    #[test]
    fn test_nearest_excluding_skips_primary() {
        let store = TransportHubStore::sample();
        let midtown = Coordinate::new(40.7549, -73.9840);
        let primary = store
            .nearest(&midtown, HubKind::TrainStation)
            .expect("test invariant failed: a station should match");
        let alternative = store
            .nearest_excluding(&midtown, HubKind::TrainStation, primary)
            .expect("test invariant failed: an alternative station should match");
        assert_ne!(alternative.name, primary.name);
    }

    #[test]
    fn test_out_of_radius_returns_none() {
        let mut store = TransportHubStore::sample();
        store.search_radius = 0.001;
        let far = Coordinate::new(19.07, 72.88);
        assert!(store.nearest(&far, HubKind::TrainStation).is_none());
    }
}
