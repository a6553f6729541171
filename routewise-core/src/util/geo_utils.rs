use crate::model::Coordinate;
use geo::{Distance, Haversine};

/// great-circle distance between two coordinates in kilometers. pure, no
/// failure modes; out-of-range coordinates are the caller's concern.
pub fn distance_km(a: &Coordinate, b: &Coordinate) -> f64 {
    Haversine.distance(a.point(), b.point()) / 1000.0
}

#[cfg(test)]
mod test {
    use super::distance_km;
    use crate::model::Coordinate;

    #[test]
    fn test_distance_between_known_points() {
        // Penn Station to JFK is roughly 21 km great-circle
        let penn = Coordinate::new(40.7505, -73.9972);
        let jfk = Coordinate::new(40.6413, -73.7781);
        let d = distance_km(&penn, &jfk);
        assert!(
            (15.0..25.0).contains(&d),
            "expected ~21 km, got {d}"
        );
    }

    #[test]
    fn test_distance_is_symmetric_and_zero_at_identity() {
        let a = Coordinate::new(19.23, 72.86);
        let b = Coordinate::new(23.22, 72.65);
        assert!((distance_km(&a, &b) - distance_km(&b, &a)).abs() < 1e-9);
        assert!(distance_km(&a, &a).abs() < 1e-9);
    }
}
