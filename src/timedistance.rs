//! The search label: a totally-ordered cumulative distance that also carries
//! enough of the last-traversed edge to evaluate the next relaxation's delay
//! model and to reconstruct the itinerary afterwards.

use std::cmp::Ordering;

use crate::network::{EdgeProps, TType, TripId, Timestamp};

/// `cum_time` of an uninitialised label, standing in for +infinity so the
/// priority queue treats "not yet reached" as worse than any real path.
pub const INFINITE_COST: i64 = i64::MAX;

#[derive(Debug, Clone, PartialEq)]
pub struct TimeDistance {
    uninitialised: bool,
    pub cum_time: i64,
    pub prev_props: EdgeProps,
}

impl TimeDistance {
    /// The label seeded at the destination stop: a synthetic `Init` edge
    /// anchored at `arr_time_target`. The sentinel's `trip_id` cannot match
    /// any real trip, so the first real relaxation is always treated as a
    /// mode change, and its `gamma = None` yields probability 1.0 for that
    /// single first hop.
    pub fn initial(arr_time_target: Timestamp) -> Self {
        Self {
            uninitialised: true,
            cum_time: 0,
            prev_props: EdgeProps {
                ttype: TType::Init,
                trip_id: TripId::Init,
                dep_time: arr_time_target,
                arr_time: arr_time_target,
                travel_time: 0,
                gamma: None,
            },
        }
    }

    /// +infinity while uninitialised, else the accumulated travel+waiting time.
    pub fn cost(&self) -> i64 {
        if self.uninitialised { INFINITE_COST } else { self.cum_time }
    }

    /// Clears the uninitialised flag; called by the search once a label is
    /// about to be inserted into the frontier.
    pub fn mark_initialised(mut self) -> Self {
        self.uninitialised = false;
        self
    }

    pub fn previous_dep_time(&self) -> Timestamp {
        self.prev_props.dep_time
    }

    /// Relaxes `edge` into this label (`new = self ⊕ edge`). Foot edges are
    /// never mutated in the shared graph; their synthesised times live only
    /// in the returned label's `prev_props`.
    pub fn append_edge(&self, edge: &EdgeProps) -> Self {
        let mut props = edge.clone();
        if props.ttype == TType::Foot {
            props.dep_time = self.prev_props.dep_time.saturating_sub(props.travel_time);
            props.arr_time = self.prev_props.dep_time;
        }
        let waiting_time = self.prev_props.dep_time as i64 - props.arr_time as i64;
        let cum_time = self.cum_time + waiting_time + props.travel_time as i64;

        Self {
            uninitialised: self.uninitialised,
            cum_time,
            prev_props: props,
        }
    }
}

impl Eq for TimeDistance {}

impl PartialOrd for TimeDistance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimeDistance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost().cmp(&other.cost())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::EdgeProps;

    #[test]
    fn uninitialised_label_is_worse_than_any_real_path() {
        let uninit = TimeDistance::initial(1000);
        let real = TimeDistance::initial(1000).mark_initialised();
        assert!(real < uninit);
        assert!(uninit > real);
    }

    #[test]
    fn ordering_is_total() {
        let a = TimeDistance::initial(1000).mark_initialised();
        let mut b = a.clone();
        b.cum_time += 1;
        assert!(a < b);
        assert!(!(b < a));
        assert_ne!(a.cost(), b.cost());
    }

    #[test]
    fn relaxation_is_monotonic_for_real_edges() {
        let label = TimeDistance::initial(1000).mark_initialised();
        let edge = EdgeProps::scheduled("T1", TType::Bus, 800, 900, None);
        let relaxed = label.append_edge(&edge);
        assert!(relaxed.cum_time >= label.cum_time);
    }

    #[test]
    fn foot_edge_times_are_synthesised_to_anchor_the_next_departure() {
        let mut label = TimeDistance::initial(1000).mark_initialised();
        label.prev_props.dep_time = 800;
        let foot = EdgeProps::foot(300);
        let relaxed = label.append_edge(&foot);
        assert_eq!(relaxed.prev_props.arr_time, 800);
        assert_eq!(relaxed.prev_props.dep_time, 500);
    }
}
