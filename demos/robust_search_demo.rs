use dev_utils::get_example_scenario;
use stochastic_router::robust_search;
use stochastic_router::utils::{ArrivalTarget, StopQuery};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (graph, names, start, end, arr_time_target) = get_example_scenario();

    let routes = robust_search(
        &graph,
        &names,
        StopQuery::Id(start),
        StopQuery::Id(end),
        ArrivalTarget::Seconds(arr_time_target),
        0.7,
        10,
        3,
    )?;

    if routes.is_empty() {
        println!("No route found meeting the probability threshold.");
    }
    for route in &routes {
        println!("{}", route.describe(&graph));
    }

    Ok(())
}
