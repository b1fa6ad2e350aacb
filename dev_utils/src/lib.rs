//! Shared fixture graphs for the benchmarks and demos. No real timetable
//! ingestion is in scope for this crate, so these build small in-memory
//! networks by hand instead of reading a GTFS feed.

use stochastic_router::network::{NameIndex, StopId, Timestamp};
use stochastic_router::{EdgeProps, GammaParams, Graph, Stop, TType};

fn time(h: u32, m: u32) -> Timestamp {
    h * 3600 + m * 60
}

/// A small, hand-built network around a handful of Swiss stops, with one
/// tight transfer and one foot connection, for demos and quick benchmarks.
pub fn build_example_graph() -> (Graph, NameIndex) {
    let mut graph = Graph::new();
    let mut names = NameIndex::new();

    let mut add = |graph: &mut Graph, names: &mut NameIndex, name: &str| -> StopId {
        let id = graph.add_stop(Stop::new(name, 0.0, 0.0));
        names.insert(name.to_owned(), id);
        id
    };

    let zurich = add(&mut graph, &mut names, "Zürich HB");
    let olten = add(&mut graph, &mut names, "Olten");
    let olten_bus = add(&mut graph, &mut names, "Olten, Busbahnhof");
    let bern = add(&mut graph, &mut names, "Bern");
    let basel = add(&mut graph, &mut names, "Basel SBB");

    let ic_gamma = GammaParams::new(2.0, 0.0, 60.0);
    let bus_gamma = GammaParams::new(1.5, 0.0, 30.0);

    // Real world: Zürich HB -> Olten -> Bern (IC train, two legs).
    graph.add_edge(olten, zurich, EdgeProps::scheduled("IC1_1", TType::Ice, time(8, 0), time(8, 25), Some(ic_gamma)));
    graph.add_edge(bern, olten, EdgeProps::scheduled("IC1_2", TType::Ice, time(8, 27), time(8, 55), Some(ic_gamma)));

    // Real world: Basel SBB -> Olten (IC train) then a walk to the bus
    // station, then a bus onward to Bern -- a slower alternative with a
    // tight, probabilistic transfer.
    graph.add_edge(olten, basel, EdgeProps::scheduled("IC2_1", TType::Ice, time(8, 5), time(8, 30), Some(ic_gamma)));
    graph.add_edge(olten_bus, olten, EdgeProps::foot(180));
    graph.add_edge(
        bern,
        olten_bus,
        EdgeProps::scheduled("BUS1", TType::Bus, time(8, 35), time(9, 20), Some(bus_gamma)),
    );

    (graph, names)
}

pub fn get_example_start_time() -> Timestamp {
    time(9, 20)
}

pub fn get_example_threshold() -> f64 {
    0.7
}

/// `(graph, names, start, end, arrival target)` ready to hand straight to
/// `stochastic_search`/`robust_search`.
pub fn get_example_scenario() -> (Graph, NameIndex, StopId, StopId, Timestamp) {
    let (graph, names) = build_example_graph();
    let start = names["Basel SBB"];
    let end = names["Bern"];
    (graph, names, start, end, get_example_start_time())
}

/// A larger randomised network for benchmarking, built as a chain of `depth`
/// stops with `branching` parallel scheduled connections between consecutive
/// stops, plus an occasional foot edge. Deterministic for a given seed so
/// benchmark runs are comparable across commits.
pub fn build_large_example_graph(seed: u64, depth: usize, branching: usize) -> (Graph, StopId, StopId, Timestamp) {
    let rng = fastrand::Rng::with_seed(seed);
    let mut graph = Graph::new();

    let stops: Vec<StopId> = (0..depth)
        .map(|i| graph.add_stop(Stop::new(format!("Stop {i}"), 0.0, 0.0)))
        .collect();

    let modes = [TType::Bus, TType::Tram, TType::SBahn, TType::Intercity];

    for i in 0..depth - 1 {
        let base_dep = time(6, 0) + (i as u32) * 600;
        for j in 0..branching {
            let dep = base_dep + (j as u32) * 120;
            let arr = dep + 300 + rng.u32(0..600);
            let gamma = GammaParams::new(1.0 + rng.f64(), 0.0, 20.0 + rng.f64() * 60.0);
            let ttype = modes[rng.usize(0..modes.len())];
            graph.add_edge(
                stops[i + 1],
                stops[i],
                EdgeProps::scheduled(format!("T{i}_{j}"), ttype, dep, arr, Some(gamma)),
            );
        }
        if rng.bool() {
            graph.add_edge(stops[i + 1], stops[i], EdgeProps::foot(60 + rng.u32(0..240)));
        }
    }

    let start = stops[0];
    let end = stops[depth - 1];
    let arr_time_target = time(6, 0) + (depth as u32) * 1200;
    (graph, start, end, arr_time_target)
}
