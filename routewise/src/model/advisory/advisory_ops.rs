use super::AdvisoryZone;
use chrono::{DateTime, Utc};
use routewise_core::model::Coordinate;
use routewise_core::util::geo_utils;

/// each affected zone contributes `decayed_severity * 0.1` to the overlap
/// score before clamping.
const OVERLAP_PER_SEVERITY: f64 = 0.1;
/// ceiling on the advisory soft penalty: zones reduce confidence by at most
/// 15%, never eliminating a route.
pub const MAX_SOFT_PENALTY: f64 = 0.15;

/// result of testing a route against a set of advisory zones.
pub struct ZoneOverlap<'a> {
    /// estimated share of the route affected by zones, in [0,1]
    pub overlap_score: f64,
    pub affected: Vec<&'a AdvisoryZone>,
}

/// tests a route against advisory zones. a route is affected by a zone when
/// either endpoint lies within the zone radius; this endpoint-only check is
/// a known limitation that understates overlap for long routes passing
/// through, but not ending in, a zone.
pub fn overlap<'a>(
    start: &Coordinate,
    end: &Coordinate,
    zones: &[&'a AdvisoryZone],
    now: &DateTime<Utc>,
) -> ZoneOverlap<'a> {
    let mut affected: Vec<&AdvisoryZone> = Vec::new();
    let mut score = 0.0;
    for zone in zones.iter() {
        let start_distance = geo_utils::distance_km(start, &zone.center);
        let end_distance = geo_utils::distance_km(end, &zone.center);
        if start_distance < zone.radius_km || end_distance < zone.radius_km {
            score += zone.decayed_severity(now) * OVERLAP_PER_SEVERITY;
            affected.push(zone);
        }
    }
    ZoneOverlap {
        overlap_score: score.min(1.0),
        affected,
    }
}

/// mean decayed severity across the affected zones, or the severity floor
/// when no zone applies.
pub fn average_severity(affected: &[&AdvisoryZone], now: &DateTime<Utc>) -> f64 {
    if affected.is_empty() {
        return super::zone::MIN_SEVERITY;
    }
    let total: f64 = affected.iter().map(|z| z.decayed_severity(now)).sum();
    total / affected.len() as f64
}

/// soft confidence penalty from zone overlap:
/// `overlap * ((avg_severity - 1) / 4) * 0.15`. monotonically non-decreasing
/// in both overlap and severity, capped at [`MAX_SOFT_PENALTY`].
pub fn soft_penalty(overlap_score: f64, avg_severity: f64) -> f64 {
    let severity_weight = (avg_severity - 1.0) / 4.0;
    overlap_score * severity_weight * MAX_SOFT_PENALTY
}

#[cfg(test)]
mod test {
    use super::{overlap, soft_penalty, MAX_SOFT_PENALTY};
    use crate::model::advisory::{AdvisoryZone, AdvisoryZoneType};
    use chrono::{DateTime, Duration, Utc};
    use proptest::prelude::*;
    use routewise_core::model::Coordinate;

    fn mock_zone(center: Coordinate, radius_km: f64, severity: f64) -> AdvisoryZone {
        let now = Utc::now();
        AdvisoryZone {
            id: "zone".to_string(),
            zone_type: AdvisoryZoneType::Protest,
            severity,
            center,
            radius_km,
            description: "demonstration near city hall".to_string(),
            window_start: now,
            window_end: now + Duration::hours(3),
            decay_rate: 0.1,
            is_active: true,
        }
    }

    #[test]
    fn test_overlap_requires_an_endpoint_inside_radius() {
        let now = Utc::now();
        let zone = mock_zone(Coordinate::new(40.7158, -74.0074), 0.8, 4.0);
        let zones = vec![&zone];

        // start point inside the zone
        let near = Coordinate::new(40.7160, -74.0070);
        let far = Coordinate::new(40.6413, -73.7781);
        let hit = overlap(&near, &far, &zones, &now);
        assert_eq!(hit.affected.len(), 1);
        assert!(hit.overlap_score > 0.0);

        // both endpoints outside: not affected even if the path would cross
        let miss = overlap(&far, &far, &zones, &now);
        assert!(miss.affected.is_empty());
        assert_eq!(miss.overlap_score, 0.0);
    }

    #[test]
    fn test_overlap_score_clamps_at_one() {
        let now = Utc::now();
        let center = Coordinate::new(40.7158, -74.0074);
        let zones_owned: Vec<AdvisoryZone> =
            (0..20).map(|_| mock_zone(center, 5.0, 5.0)).collect();
        let zones: Vec<&AdvisoryZone> = zones_owned.iter().collect();
        let result = overlap(&center, &center, &zones, &now);
        assert_eq!(result.overlap_score, 1.0);
        assert_eq!(result.affected.len(), 20);
    }

    #[test]
    fn test_soft_penalty_bounds() {
        // severity 1 zones carry no weight; full overlap at max severity
        // reaches exactly the 15% cap
        assert_eq!(soft_penalty(1.0, 1.0), 0.0);
        assert!((soft_penalty(1.0, 5.0) - MAX_SOFT_PENALTY).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_soft_penalty_never_exceeds_cap(
            overlap_score in 0.0f64..=1.0,
            severity in 1.0f64..=5.0,
        ) {
            let p = soft_penalty(overlap_score, severity);
            prop_assert!(p >= 0.0);
            prop_assert!(p <= MAX_SOFT_PENALTY + 1e-12);
        }

        #[test]
        fn prop_soft_penalty_monotone_in_overlap_and_severity(
            o1 in 0.0f64..=1.0,
            o2 in 0.0f64..=1.0,
            s1 in 1.0f64..=5.0,
            s2 in 1.0f64..=5.0,
        ) {
            let (o_lo, o_hi) = if o1 <= o2 { (o1, o2) } else { (o2, o1) };
            let (s_lo, s_hi) = if s1 <= s2 { (s1, s2) } else { (s2, s1) };
            prop_assert!(soft_penalty(o_lo, s_lo) <= soft_penalty(o_hi, s_lo) + 1e-12);
            prop_assert!(soft_penalty(o_lo, s_lo) <= soft_penalty(o_lo, s_hi) + 1e-12);
        }

        #[test]
        fn prop_decayed_severity_monotone_non_increasing(
            severity in 1.0f64..=5.0,
            decay_rate in 0.0f64..=1.0,
            h1 in 0.0f64..=48.0,
            h2 in 0.0f64..=48.0,
        ) {
            let start = DateTime::<Utc>::from_timestamp(1_700_000_000, 0)
                .expect("test invariant failed: could not build timestamp");
            let zone = AdvisoryZone {
                window_start: start,
                window_end: start + Duration::hours(72),
                severity,
                decay_rate,
                ..mock_zone(Coordinate::new(0.0, 0.0), 1.0, severity)
            };
            let (early, late) = if h1 <= h2 { (h1, h2) } else { (h2, h1) };
            let at_early = zone.decayed_severity(
                &(start + Duration::seconds((early * 3600.0) as i64)));
            let at_late = zone.decayed_severity(
                &(start + Duration::seconds((late * 3600.0) as i64)));
            prop_assert!(at_late <= at_early + 1e-9);
            prop_assert!((1.0..=5.0).contains(&at_early));
            prop_assert!((1.0..=5.0).contains(&at_late));
        }
    }
}
