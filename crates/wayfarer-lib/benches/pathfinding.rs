use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use std::hint::black_box;

use wayfarer_lib::{
    generate_routes, shortest_route, Graph, RouteLeg, RouteOptions, TransportMode, Waypoint,
    WeightFunctionBuilder,
};

const GRID: u64 = 20;

/// A GRID x GRID lattice with distinct distances so no two paths tie.
static GRAPH: Lazy<Graph> = Lazy::new(|| {
    let waypoint = |row: u64, col: u64| {
        Waypoint::with_id(
            row * GRID + col + 1,
            format!("wp-{row}-{col}"),
            row as f64,
            col as f64,
        )
    };

    let mut graph = Graph::new();
    for row in 0..GRID {
        for col in 0..GRID {
            if col + 1 < GRID {
                let leg = RouteLeg::new(
                    waypoint(row, col),
                    waypoint(row, col + 1),
                    TransportMode::Car,
                    Some(10.0 + (row * 7 + col) as f64 * 0.013),
                )
                .expect("valid leg");
                graph.add_edge(leg, true);
            }
            if row + 1 < GRID {
                let leg = RouteLeg::new(
                    waypoint(row, col),
                    waypoint(row + 1, col),
                    TransportMode::Train,
                    Some(10.0 + (col * 11 + row) as f64 * 0.017),
                )
                .expect("valid leg");
                graph.add_edge(leg, true);
            }
        }
    }
    graph
});

fn benchmark_pathfinding(c: &mut Criterion) {
    let graph = &*GRAPH;
    let start = 1;
    let end = GRID * GRID;

    c.bench_function("dijkstra_grid_corner_to_corner", |b| {
        let weight = WeightFunctionBuilder::new().build();
        b.iter(|| {
            let route = shortest_route(graph, start, end, &weight).expect("route exists");
            black_box(route.legs().len())
        });
    });

    c.bench_function("dijkstra_grid_emissions_and_time", |b| {
        let weight = WeightFunctionBuilder::new()
            .with_emissions(true)
            .with_time(true)
            .build();
        b.iter(|| {
            let route = shortest_route(graph, start, end, &weight).expect("route exists");
            black_box(route.legs().len())
        });
    });

    c.bench_function("generate_routes_with_alternatives", |b| {
        let options = RouteOptions::default();
        b.iter(|| {
            let routes = generate_routes(graph, start, end, &options);
            black_box(routes.len())
        });
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
