//! Iteratively removes the weakest transfer of each candidate route to surface
//! alternative, higher-reliability itineraries.

use crate::error::RouteError;
use crate::network::{EdgeKey, Graph, NameIndex, StopId, TType};
use crate::route::Route;
use crate::search::stochastic_search;
use crate::utils::{ArrivalTarget, StopQuery};

/// Runs [`stochastic_search`] up to `max_iter` times, each time deleting the
/// weakest transfer of the previous result from a private graph clone, and
/// returns up to `number_of_routes` distinct itineraries ordered by
/// decreasing success probability.
///
/// Unlike `stochastic_search`, `robust_search` never fails with `Ok(None)`:
/// an exhausted search simply yields fewer than `number_of_routes` routes.
pub fn robust_search(
    graph: &Graph,
    names: &NameIndex,
    start: StopQuery,
    end: StopQuery,
    arr_time_target: ArrivalTarget,
    threshold: f64,
    max_iter: usize,
    number_of_routes: usize,
) -> Result<Vec<Route>, RouteError> {
    let start_id = crate::utils::resolve_stop(start, names)?;
    let end_id = crate::utils::resolve_stop(end, names)?;
    let arr_time_target = crate::utils::resolve_time(arr_time_target)?;

    let mut working = graph.clone();
    let mut found: Vec<(f64, Route)> = Vec::new();
    let mut best: Option<(f64, Route)> = None;

    for iter in 0..max_iter {
        if found.len() >= number_of_routes {
            break;
        }

        let route = stochastic_search(
            &working,
            names,
            StopQuery::Id(start_id),
            StopQuery::Id(end_id),
            ArrivalTarget::Seconds(arr_time_target),
            threshold,
        )?;

        let Some(route) = route else {
            log::debug!("robust search exhausted after {iter} iterations, {} routes found", found.len());
            if found.is_empty() {
                if let Some(best) = best {
                    found.push(best);
                }
            }
            return Ok(finalize(found, number_of_routes));
        };

        let (probability, weakest) = route.success_probability();
        log::debug!("robust search iteration {iter}: probability {probability:.3}");

        if probability >= threshold {
            found.push((probability, route.clone()));
        }

        if best.as_ref().map_or(true, |(best_p, _)| probability > *best_p) {
            best = Some((probability, route));
        }

        if found.len() >= number_of_routes {
            break;
        }

        let (u, v, props) = weakest;
        match find_parallel_edge(&working, u, v, &props) {
            Some(key) => {
                working.remove_edge(key);
            }
            None => {
                log::warn!("robust search could not locate weakest edge to remove, stopping early");
                break;
            }
        }
    }

    if found.is_empty() {
        if let Some(best) = best {
            found.push(best);
        }
    }
    Ok(finalize(found, number_of_routes))
}

fn finalize(mut found: Vec<(f64, Route)>, number_of_routes: usize) -> Vec<Route> {
    found.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    found.truncate(number_of_routes);
    found.into_iter().map(|(_, route)| route).collect()
}

/// Finds the edge stored as `u -> v` (the reversed-graph direction, matching
/// how `Route::success_probability`'s weakest tuple is already oriented)
/// whose properties match `props` on `(dep_time, arr_time, trip_id)`. Falls
/// back to matching any foot edge between the pair, since synthesised foot
/// times never survive in the stored graph.
fn find_parallel_edge(graph: &Graph, u: StopId, v: StopId, props: &crate::network::EdgeProps) -> Option<EdgeKey> {
    graph
        .out_edges(u)
        .find(|(target, _, candidate)| {
            *target == v
                && candidate.dep_time == props.dep_time
                && candidate.arr_time == props.arr_time
                && candidate.trip_id == props.trip_id
        })
        .or_else(|| {
            graph
                .out_edges(u)
                .find(|(target, _, candidate)| *target == v && candidate.ttype == TType::Foot)
        })
        .map(|(_, key, _)| key)
}
