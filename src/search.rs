//! Modified backward Dijkstra from `end` back to `start` under a
//! probability threshold, a maximum-waiting-time constraint, and a
//! no-double-walk foot-edge policy.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::delay::GammaCdfCache;
use crate::error::RouteError;
use crate::network::{Graph, NameIndex, StopId, TType, Timestamp, MAX_WAITING_TIME};
use crate::route::Route;
use crate::timedistance::TimeDistance;
use crate::utils::{self, ArrivalTarget, StopQuery};

/// Default probability threshold used by callers that do not override it.
pub const DEFAULT_THRESHOLD: f64 = 0.8;

/// One-shot modified shortest path from `end` back to `start`. Returns the
/// forward itinerary arriving no later than `arr_time_target`, or `Ok(None)`
/// if no itinerary satisfies `threshold`.
pub fn stochastic_search(
    graph: &Graph,
    names: &NameIndex,
    start: StopQuery,
    end: StopQuery,
    arr_time_target: ArrivalTarget,
    threshold: f64,
) -> Result<Option<Route>, RouteError> {
    let start = utils::resolve_stop(start, names)?;
    let end = utils::resolve_stop(end, names)?;
    let arr_time_target = utils::resolve_time(arr_time_target)?;

    let node_count = graph.node_count();
    let mut labels: Vec<TimeDistance> = (0..node_count).map(|_| TimeDistance::initial(arr_time_target)).collect();
    let mut prev: HashMap<StopId, StopId> = HashMap::new();
    let mut visited = vec![false; node_count];
    let cache = GammaCdfCache::new();

    labels[end.index()] = TimeDistance::initial(arr_time_target).mark_initialised();
    visited[end.index()] = true;

    let mut queue = BinaryHeap::new();
    queue.push(Reverse((labels[end.index()].cost(), end)));

    while let Some(Reverse((_, curr))) = queue.pop() {
        // A shortest-path early exit once `start` is popped is behaviourally
        // equivalent to draining the full queue, since all edge weights here
        // are non-negative.
        if curr == start {
            break;
        }

        let prev_props = labels[curr.index()].prev_props.clone();
        let prev_dep = prev_props.dep_time as i64;
        let start_cost = labels[start.index()].cost();

        for (v, _key, props) in graph.out_edges(curr) {
            let is_foot = props.ttype == TType::Foot;

            let in_time_band = is_foot
                || (prev_dep >= props.arr_time as i64
                    && props.arr_time as i64 >= prev_dep - MAX_WAITING_TIME as i64
                    && props.dep_time as i64 >= (arr_time_target as i64).saturating_sub(start_cost));
            if !in_time_band {
                continue;
            }

            // No two consecutive foot hops.
            if is_foot && prev_props.ttype == TType::Foot {
                continue;
            }

            // Probability gate: `props` is the earlier real leg, `prev_props`
            // the next real leg already chosen at `curr`.
            if cache.connection_probability(props, &prev_props) < threshold {
                continue;
            }

            let new_label = labels[curr.index()].append_edge(props);
            if new_label < labels[v.index()] {
                labels[v.index()] = new_label.mark_initialised();
                prev.insert(v, curr);
                if !visited[v.index()] {
                    visited[v.index()] = true;
                    queue.push(Reverse((labels[v.index()].cost(), v)));
                }
            }
        }
    }

    if !prev.contains_key(&start) {
        log::warn!("stochastic search found no route meeting threshold {threshold:.3}");
        return Ok(None);
    }

    let mut connections = Vec::new();
    let mut distances = Vec::new();
    let mut node = start;
    loop {
        connections.push(node);
        distances.push(labels[node.index()].clone());
        if node == end {
            break;
        }
        node = prev[&node];
    }

    Ok(Some(Route::new(connections, distances)))
}
