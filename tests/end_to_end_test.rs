use stochastic_router::network::{EdgeProps, GammaParams, Graph, NameIndex, Stop, TType, Timestamp};
use stochastic_router::utils::{ArrivalTarget, StopQuery};
use stochastic_router::{robust_search, stochastic_search};

fn time(h: u32, m: u32) -> Timestamp {
    h * 3600 + m * 60
}

fn named_stop(graph: &mut Graph, names: &mut NameIndex, name: &str) -> stochastic_router::network::StopId {
    let id = graph.add_stop(Stop::new(name, 0.0, 0.0));
    names.insert(name.to_owned(), id);
    id
}

#[test]
fn trivial_two_stop_ride_is_found_with_certainty() {
    let mut graph = Graph::new();
    let mut names = NameIndex::new();
    let a = named_stop(&mut graph, &mut names, "A");
    let b = named_stop(&mut graph, &mut names, "B");
    graph.add_edge(b, a, EdgeProps::scheduled("T1", TType::Bus, time(8, 0), time(8, 10), None));

    let route = stochastic_search(
        &graph,
        &names,
        StopQuery::Name("A"),
        StopQuery::Name("B"),
        ArrivalTarget::Clock("08:10:00"),
        0.8,
    )
    .expect("search should not error")
    .expect("a direct connection should be found");

    assert_eq!(route.dep_time(), time(8, 0));
    assert_eq!(route.arr_time(), time(8, 10));
    assert_eq!(route.success_probability().0, 1.0);
}

#[test]
fn tight_transfer_below_threshold_yields_no_route() {
    let mut graph = Graph::new();
    let mut names = NameIndex::new();
    let a = named_stop(&mut graph, &mut names, "A");
    let b = named_stop(&mut graph, &mut names, "B");
    let c = named_stop(&mut graph, &mut names, "C");

    // A gamma distribution whose mean delay swamps the available slack, so
    // the transfer is almost never made in time.
    let gamma = GammaParams::new(2.0, 0.0, 600.0);
    graph.add_edge(b, a, EdgeProps::scheduled("T1", TType::Ice, time(7, 50), time(8, 0), Some(gamma)));
    graph.add_edge(c, b, EdgeProps::scheduled("T2", TType::Bus, time(8, 2), time(8, 20), None));

    let route = stochastic_search(
        &graph,
        &names,
        StopQuery::Name("A"),
        StopQuery::Name("C"),
        ArrivalTarget::Seconds(time(8, 20)),
        0.8,
    )
    .expect("search should not error");

    assert!(route.is_none());
}

#[test]
fn a_walk_bridges_two_otherwise_disconnected_stops() {
    let mut graph = Graph::new();
    let mut names = NameIndex::new();
    let a = named_stop(&mut graph, &mut names, "A");
    let platform = named_stop(&mut graph, &mut names, "Platform");
    let street = named_stop(&mut graph, &mut names, "Street Corner");
    let c = named_stop(&mut graph, &mut names, "C");

    graph.add_edge(platform, a, EdgeProps::scheduled("T1", TType::Bus, time(7, 50), time(8, 0), None));
    graph.add_edge(street, platform, EdgeProps::foot(240));
    graph.add_edge(c, street, EdgeProps::scheduled("T2", TType::Bus, time(8, 10), time(8, 20), None));

    let route = stochastic_search(
        &graph,
        &names,
        StopQuery::Name("A"),
        StopQuery::Name("C"),
        ArrivalTarget::Seconds(time(8, 20)),
        0.8,
    )
    .expect("search should not error")
    .expect("a route via a walk should be found");

    assert_eq!(route.connections(), &[a, platform, street, c]);
}

#[test]
fn robust_search_diverges_onto_a_second_route_once_the_first_is_removed() {
    let mut graph = Graph::new();
    let mut names = NameIndex::new();
    let a = named_stop(&mut graph, &mut names, "A");
    let b = named_stop(&mut graph, &mut names, "B");
    let c = named_stop(&mut graph, &mut names, "C");

    // Two parallel ways to get from A to B, feeding into a single fixed
    // onward connection B -> C. T1_early carries a real delay distribution,
    // making its transfer into T2 strictly the weakest edge of the route
    // that uses it (below T2's own trailing transfer, which stays 1.0 since
    // T2 has no gamma). Removing it forces the next iteration onto T1_late,
    // which has no gamma and so transfers with probability 1.0, while the
    // arrival at C stays fixed.
    // t_slack = 300s, minus the 20s Bus transfer penalty = 280s effective
    // slack; scale chosen so CDF(280s) ~= 0.5.
    let weak_gamma = GammaParams::new(1.0, 0.0, 280.0 / std::f64::consts::LN_2);
    graph.add_edge(b, a, EdgeProps::scheduled("T1_early", TType::Bus, time(7, 50), time(8, 0), Some(weak_gamma)));
    graph.add_edge(b, a, EdgeProps::scheduled("T1_late", TType::Bus, time(7, 30), time(7, 40), None));
    graph.add_edge(c, b, EdgeProps::scheduled("T2", TType::Bus, time(8, 5), time(8, 20), None));

    let routes = robust_search(
        &graph,
        &names,
        StopQuery::Name("A"),
        StopQuery::Name("C"),
        ArrivalTarget::Seconds(time(8, 20)),
        0.0,
        5,
        2,
    )
    .expect("robust search should not error");

    assert!(routes.len() >= 2, "expected at least two distinct itineraries, got {}", routes.len());
    let departures: Vec<_> = routes.iter().map(|r| r.dep_time()).collect();
    assert!(departures.contains(&time(7, 50)));
    assert!(departures.contains(&time(7, 30)));
    assert!(routes.iter().all(|r| r.arr_time() == time(8, 20)));
}
