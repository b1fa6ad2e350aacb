use dev_utils::get_example_scenario;
use stochastic_router::utils::{ArrivalTarget, StopQuery};
use stochastic_router::stochastic_search;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (graph, names, start, end, arr_time_target) = get_example_scenario();

    let route = stochastic_search(
        &graph,
        &names,
        StopQuery::Id(start),
        StopQuery::Id(end),
        ArrivalTarget::Seconds(arr_time_target),
        0.7,
    )?;

    match route {
        Some(route) => println!("{}", route.describe(&graph)),
        None => println!("No route found meeting the probability threshold."),
    }

    Ok(())
}
