use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use dev_utils::build_large_example_graph;
use stochastic_router::network::NameIndex;
use stochastic_router::utils::{ArrivalTarget, StopQuery};
use stochastic_router::{stochastic_search, Graph};

fn search_benchmark(c: &mut Criterion, depth: usize, branching: usize) {
    let (graph, start, end, arr_time_target): (Graph, _, _, _) = build_large_example_graph(1, depth, branching);
    let names = NameIndex::new();

    c.bench_function(&format!("stochastic_search/depth={depth}/branching={branching}"), |b| {
        b.iter(|| {
            stochastic_search(
                &graph,
                &names,
                StopQuery::Id(black_box(start)),
                StopQuery::Id(black_box(end)),
                ArrivalTarget::Seconds(black_box(arr_time_target)),
                0.5,
            )
        })
    });
}

fn small_network(c: &mut Criterion) {
    search_benchmark(c, 20, 3);
}

fn large_network(c: &mut Criterion) {
    search_benchmark(c, 200, 5);
}

criterion_group!(benches, small_network, large_network);
criterion_main!(benches);
