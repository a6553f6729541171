use chrono::{DateTime, Utc};
use routewise_core::model::Coordinate;
use serde::Deserialize;

/// one candidate supplied by the base road router: an opaque geometry
/// token, totals, and an optional step list this core passes through
/// untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct BaseRoute {
    pub geometry: String,
    pub distance_meters: f64,
    pub duration_seconds: f64,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub steps: Option<serde_json::Value>,
}

impl BaseRoute {
    pub fn distance_km(&self) -> f64 {
        self.distance_meters / 1000.0
    }

    pub fn duration_minutes(&self) -> f64 {
        self.duration_seconds / 60.0
    }
}

/// one routing request: endpoints, optional persona tag and departure
/// instant, and the base router candidates to score alongside synthesized
/// journeys.
#[derive(Debug, Clone, Deserialize)]
pub struct RankQuery {
    pub start: Coordinate,
    pub end: Coordinate,
    #[serde(default)]
    pub persona: Option<String>,
    /// departure time; defaults to now when omitted
    #[serde(default)]
    pub departure: Option<DateTime<Utc>>,
    #[serde(default)]
    pub routes: Vec<BaseRoute>,
}

#[cfg(test)]
mod test {
    use super::RankQuery;

    #[test]
    fn test_minimal_query_parses() {
        let query: RankQuery = serde_json::from_str(
            r#"{"start": {"lat": 19.23, "lng": 72.86}, "end": {"lat": 19.17, "lng": 72.95}}"#,
        )
        .expect("test invariant failed: minimal query should parse");
        assert!(query.persona.is_none());
        assert!(query.departure.is_none());
        assert!(query.routes.is_empty());
    }

    #[test]
    fn test_full_query_parses() {
        let query: RankQuery = serde_json::from_str(
            r#"{
                "start": {"lat": 40.75, "lng": -73.99},
                "end": {"lat": 40.70, "lng": -74.01},
                "persona": "COMFORT_SEEKER",
                "departure": "2026-02-05T08:35:00Z",
                "routes": [
                    {
                        "geometry": "abc123",
                        "distance_meters": 9200.0,
                        "duration_seconds": 1380.0,
                        "summary": "FDR Drive",
                        "steps": [{"instruction": "turn", "modifier": "left"}]
                    }
                ]
            }"#,
        )
        .expect("test invariant failed: full query should parse");
        assert_eq!(query.routes.len(), 1);
        let route = &query.routes[0];
        assert!((route.distance_km() - 9.2).abs() < 1e-12);
        assert!((route.duration_minutes() - 23.0).abs() < 1e-12);
        assert!(route.steps.is_some());
    }
}
