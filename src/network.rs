//! The transport graph.
//!
//! **Reversed-graph convention.** The graph is stored reversed relative to the
//! real-world direction of travel: an edge from real stop X to real stop Y is
//! stored here as an arc from Y to X. A backward search from the destination
//! therefore reconstructs a forward real-world route, and "out-edges of a
//! node" during search mean *predecessors* in the real travel direction.
//! `dep_time`/`arr_time` on an [`EdgeProps`] keep their real-world meaning
//! (departure <= arrival in wall clock time) regardless of storage direction.

use std::collections::HashMap;

use petgraph::graph::DiGraph;
pub use petgraph::graph::{EdgeIndex, NodeIndex};

/// Seconds since a fixed midnight epoch.
pub type Timestamp = u32;

/// Handle to a stop, the underlying multigraph's own node index.
pub type StopId = NodeIndex;

/// Handle to one parallel edge between a pair of stops.
pub type EdgeKey = EdgeIndex;

/// `name -> stop` lookup, built by whatever ingests the timetable.
pub type NameIndex = HashMap<String, StopId>;

/// Walking speed in metres per second (50 m / 1 min), used by callers to turn
/// pedestrian distances into foot-edge `travel_time`.
pub const WALKING_SPEED: f64 = 50.0 / 60.0;

/// Maximum time a traveller is allowed to wait at a stop between legs.
pub const MAX_WAITING_TIME: Timestamp = 45 * 60;

/// Transport mode of an edge, plus the `Init` sentinel used only by the
/// search's synthetic initial label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TType {
    Foot,
    Bus,
    Tram,
    SBahn,
    Extrazug,
    InterRegio,
    Eurocity,
    RegioExpress,
    Ice,
    Eurostar,
    Intercity,
    /// Sentinel mode of the synthetic edge seeding a search; never present on
    /// a real graph edge.
    Init,
}

/// Identity of the scheduled trip an edge belongs to, plus the two reserved
/// sentinels for foot edges and the search's synthetic initial label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TripId {
    Scheduled(Box<str>),
    /// Foot edges do not belong to any scheduled trip.
    Foot,
    /// Sentinel trip of the synthetic edge seeding a search.
    Init,
}

impl TripId {
    pub fn scheduled(id: impl Into<Box<str>>) -> Self {
        TripId::Scheduled(id.into())
    }
}

/// Parameters of a Gamma distribution modelling a trip's arrival delay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GammaParams {
    pub shape: f64,
    pub loc: f64,
    pub scale: f64,
}

impl GammaParams {
    pub fn new(shape: f64, loc: f64, scale: f64) -> Self {
        Self { shape, loc, scale }
    }
}

/// Attributes of one directed arc (stored in reversed real-world direction).
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeProps {
    pub ttype: TType,
    pub trip_id: TripId,
    pub dep_time: Timestamp,
    pub arr_time: Timestamp,
    pub travel_time: Timestamp,
    pub gamma: Option<GammaParams>,
}

impl EdgeProps {
    /// A scheduled (non-foot) edge. `travel_time` is derived from the times.
    pub fn scheduled(
        trip_id: impl Into<Box<str>>,
        ttype: TType,
        dep_time: Timestamp,
        arr_time: Timestamp,
        gamma: Option<GammaParams>,
    ) -> Self {
        debug_assert!(ttype != TType::Foot && ttype != TType::Init);
        debug_assert!(dep_time <= arr_time);
        Self {
            ttype,
            trip_id: TripId::Scheduled(trip_id.into()),
            dep_time,
            arr_time,
            travel_time: arr_time - dep_time,
            gamma,
        }
    }

    /// A foot edge. `dep_time`/`arr_time` are placeholders, synthesised at
    /// search time by [`crate::timedistance::TimeDistance::append_edge`].
    pub fn foot(travel_time: Timestamp) -> Self {
        Self {
            ttype: TType::Foot,
            trip_id: TripId::Foot,
            dep_time: 0,
            arr_time: 0,
            travel_time,
            gamma: None,
        }
    }
}

/// A node in the transport graph: a physical stop.
#[derive(Debug, Clone)]
pub struct Stop {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl Stop {
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self { name: name.into(), lat, lon }
    }
}

/// The directed transport multigraph, stored reversed (see module docs).
#[derive(Debug, Clone, Default)]
pub struct Graph {
    inner: DiGraph<Stop, EdgeProps>,
}

impl Graph {
    pub fn new() -> Self {
        Self { inner: DiGraph::new() }
    }

    pub fn add_stop(&mut self, stop: Stop) -> StopId {
        self.inner.add_node(stop)
    }

    /// Adds an arc from `from` to `to` in *storage* (reversed) direction.
    pub fn add_edge(&mut self, from: StopId, to: StopId, props: EdgeProps) -> EdgeKey {
        self.inner.add_edge(from, to, props)
    }

    pub fn stop(&self, id: StopId) -> &Stop {
        &self.inner[id]
    }

    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Out-edges of `id` in storage direction, i.e. predecessors of `id` in
    /// the real travel direction.
    pub fn out_edges(&self, id: StopId) -> impl Iterator<Item = (StopId, EdgeKey, &EdgeProps)> {
        self.inner.edges(id).map(|edge| (edge.target(), edge.id(), edge.weight()))
    }

    pub fn remove_edge(&mut self, key: EdgeKey) -> Option<EdgeProps> {
        self.inner.remove_edge(key)
    }

    /// Number of parallel edges between `from` and `to` (storage direction).
    pub fn parallel_edge_count(&self, from: StopId, to: StopId) -> usize {
        self.out_edges(from).filter(|(target, ..)| *target == to).count()
    }
}
