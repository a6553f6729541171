use super::persona_ops;
use ordered_float::OrderedFloat;
use routewise_core::model::{Persona, RouteCandidate};
use std::cmp::Reverse;

/// re-ranks confidence-scored candidates by persona preference, attaching
/// the persona score and rationale to each. the sort is stable and
/// descending, so candidates with equal scores keep their input order.
///
/// if scoring fails for any individual candidate, the whole list degrades
/// to a plain confidence-descending sort with no persona annotations
/// rather than failing the request.
pub fn rank_by_persona(routes: Vec<RouteCandidate>, persona: Persona) -> Vec<RouteCandidate> {
    if routes.is_empty() {
        return routes;
    }

    let scored: Result<Vec<_>, _> = routes
        .iter()
        .map(|route| persona_ops::apply_persona_weight(route, persona))
        .collect();

    match scored {
        Ok(scores) => {
            let mut ranked: Vec<RouteCandidate> = routes
                .into_iter()
                .zip(scores)
                .map(|(route, s)| route.with_persona_score(s.score, s.explanation))
                .collect();
            ranked.sort_by_key(|r| Reverse(OrderedFloat(r.persona_score.unwrap_or(0.0))));
            ranked
        }
        Err(e) => {
            log::warn!("persona ranking degraded to confidence sort: {e}");
            let mut ranked = routes;
            ranked.sort_by_key(|r| Reverse(OrderedFloat(r.confidence.rci)));
            ranked
        }
    }
}

#[cfg(test)]
mod test {
    use super::rank_by_persona;
    use crate::model::persona::persona_ops::test::mock_candidate;
    use routewise_core::model::Persona;

    #[test]
    fn test_ranking_sorts_descending() {
        let routes = vec![
            mock_candidate("slow-reliable", 0.9, 80.0),
            mock_candidate("fast-risky", 0.55, 15.0),
            mock_candidate("middling", 0.7, 40.0),
        ];
        let ranked = rank_by_persona(routes, Persona::SafePlanner);
        assert_eq!(ranked[0].route_id, "slow-reliable");
        assert_eq!(ranked[1].route_id, "middling");
        assert_eq!(ranked[2].route_id, "fast-risky");
        assert!(ranked.iter().all(|r| r.persona_score.is_some()));
        assert!(ranked.iter().all(|r| r.persona_explanation.is_some()));
    }

    #[test]
    fn test_ties_preserve_input_order() {
        // identical candidates score identically; the stable sort must keep
        // their input order for deterministic output
        let routes = vec![
            mock_candidate("first", 0.7, 30.0),
            mock_candidate("second", 0.7, 30.0),
            mock_candidate("third", 0.7, 30.0),
        ];
        let ranked = rank_by_persona(routes, Persona::Explorer);
        let ids: Vec<&str> = ranked.iter().map(|r| r.route_id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_scoring_failure_degrades_whole_list() {
        let routes = vec![
            mock_candidate("ok-low", 0.55, 30.0),
            mock_candidate("broken", f64::NAN, 30.0),
            mock_candidate("ok-high", 0.9, 30.0),
        ];
        let ranked = rank_by_persona(routes, Persona::ComfortSeeker);

        // ASSERTION 1: no partial results; no candidate carries a persona
        // score after degradation
        assert!(ranked.iter().all(|r| r.persona_score.is_none()));

        // ASSERTION 2: surviving order is confidence-descending for the
        // well-formed candidates
        let ok_positions: Vec<usize> = ["ok-high", "ok-low"]
            .iter()
            .map(|id| {
                ranked
                    .iter()
                    .position(|r| r.route_id == *id)
                    .expect("test invariant failed: candidate missing from ranking")
            })
            .collect();
        assert!(ok_positions[0] < ok_positions[1]);
    }

    #[test]
    fn test_empty_input_stays_empty() {
        let ranked = rank_by_persona(vec![], Persona::Rusher);
        assert!(ranked.is_empty());
    }
}
