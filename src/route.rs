//! The result of a search: a forward itinerary from `start` to `end`.

use std::fmt;

use crate::delay::connection_probability;
use crate::network::{EdgeProps, Graph, StopId, Timestamp};
use crate::timedistance::TimeDistance;
use crate::utils;

/// A forward itinerary discovered by [`crate::search::stochastic_search`].
///
/// Deliberately holds no `Graph` reference: the robust planner mutates its
/// private graph clone *between* producing routes, which would conflict with
/// the borrow checker if a `Route` aliased that same clone. Callers resolve
/// presentation data (name/lat/lon) themselves via [`Route::connections`]
/// against whichever `Graph` handle they hold, e.g. with [`Route::describe`].
#[derive(Debug, Clone)]
pub struct Route {
    connections: Vec<StopId>,
    distances: Vec<TimeDistance>,
}

impl Route {
    pub(crate) fn new(connections: Vec<StopId>, distances: Vec<TimeDistance>) -> Self {
        assert!(!connections.is_empty(), "route reconstructed with no stops");
        assert_eq!(connections.len(), distances.len());
        Self { connections, distances }
    }

    /// Stops visited, in forward travel order, `start` first and `end` last.
    pub fn connections(&self) -> &[StopId] {
        &self.connections
    }

    pub fn dep_time(&self) -> Timestamp {
        self.distances[0].prev_props.dep_time
    }

    pub fn travel_time(&self) -> i64 {
        self.distances[0].cum_time
    }

    pub fn arr_time(&self) -> Timestamp {
        (self.dep_time() as i64 + self.travel_time()) as Timestamp
    }

    /// Product of per-transfer probabilities, assuming independence, plus the
    /// `(u, v, props)` triple (in storage/reversed direction) of the weakest
    /// transfer. On ties the *last* encountered weakest transfer wins.
    pub fn success_probability(&self) -> (f64, (StopId, StopId, EdgeProps)) {
        assert!(self.connections.len() >= 2, "route has no transfers to evaluate");

        let mut probability = 1.0;
        let mut weakest_q = f64::INFINITY;
        let mut weakest = None;

        for i in 0..self.connections.len() - 1 {
            let dep_stop = self.connections[i];
            let arr_stop = self.connections[i + 1];
            let q = connection_probability(&self.distances[i].prev_props, &self.distances[i + 1].prev_props);
            probability *= q;
            if q <= weakest_q {
                weakest_q = q;
                weakest = Some((arr_stop, dep_stop, self.distances[i].prev_props.clone()));
            }
        }

        (probability, weakest.expect("loop runs at least once for a 2+ stop route"))
    }

    /// Pairs this route with a `Graph` for presentation purposes only.
    pub fn describe<'a>(&'a self, graph: &'a Graph) -> RouteSummary<'a> {
        RouteSummary { route: self, graph }
    }

    #[cfg(test)]
    pub(crate) fn distances_for_test(&self) -> &[TimeDistance] {
        &self.distances
    }
}

/// Developer-facing itinerary summary, retained for convenience alongside
/// the core search/planner operations (presentation is otherwise out of
/// scope of this crate).
pub struct RouteSummary<'a> {
    route: &'a Route,
    graph: &'a Graph,
}

impl fmt::Display for RouteSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (probability, _) = self.route.success_probability();
        writeln!(f, "-----------------------------------------------")?;
        writeln!(f, "Departure time      : {}", utils::get_time_str(self.route.dep_time()))?;
        writeln!(f, "Arrival   time      : {}", utils::get_time_str(self.route.arr_time()))?;
        writeln!(f, "Success probability : {probability:.3}")?;
        writeln!(f, "-----------------------------------------------")?;

        let connections = self.route.connections();
        for i in 0..connections.len() - 1 {
            let dep_stop = connections[i];
            let arr_stop = connections[i + 1];
            let curr_props = &self.route.distances[i].prev_props;
            writeln!(
                f,
                "At {} at {}:",
                self.graph.stop(dep_stop).name,
                utils::get_time_str(curr_props.dep_time)
            )?;
            match curr_props.ttype {
                crate::network::TType::Foot => {
                    let metres = (curr_props.travel_time as f64 * crate::network::WALKING_SPEED).round();
                    writeln!(f, "  walk {metres} m to {}", self.graph.stop(arr_stop).name)?;
                }
                _ => {
                    writeln!(f, "  take {:?} to {}", curr_props.trip_id, self.graph.stop(arr_stop).name)?;
                }
            }
            writeln!(f, "  arriving at {}", utils::get_time_str(curr_props.arr_time))?;
        }
        Ok(())
    }
}
