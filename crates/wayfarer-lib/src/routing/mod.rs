//! Route generation over a travel graph.
//!
//! This module provides:
//! - [`shortest_route`] - Dijkstra's algorithm for the single best route
//! - [`top_k_routes`] - alternative routes by iterative first-leg removal
//! - [`RouteOptions`] / [`generate_routes`] - per-request orchestration
//!
//! Both algorithms treat "no route" as an empty result rather than an error;
//! callers distinguish the two outcomes purely by result cardinality.

mod dijkstra;
mod top_k;

pub use dijkstra::shortest_route;
pub use top_k::{disconnect_route_edge, top_k_routes};

use crate::graph::Graph;
use crate::route::Route;
use crate::waypoint::WaypointId;
use crate::weight::WeightFunctionBuilder;

/// Per-request options for route generation.
#[derive(Debug, Clone, Copy)]
pub struct RouteOptions {
    /// Factor CO2 emissions into edge weights.
    pub eco_friendly: bool,
    /// Factor travel time into edge weights.
    pub time_aware: bool,
    /// Maximum number of alternative routes after the best one.
    pub alternatives: usize,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            eco_friendly: false,
            time_aware: false,
            alternatives: 3,
        }
    }
}

/// Generate the best route and up to `options.alternatives` alternatives
/// between two waypoints, ordered best-first.
///
/// The search runs on a private copy of the graph: the first leg of the best
/// route is disconnected before the alternative search so it cannot simply
/// be rediscovered, and each alternative disconnects its own first leg in
/// turn. The caller's graph is never mutated.
pub fn generate_routes(
    graph: &Graph,
    start: WaypointId,
    end: WaypointId,
    options: &RouteOptions,
) -> Vec<Route> {
    let weight = WeightFunctionBuilder::new()
        .with_emissions(options.eco_friendly)
        .with_time(options.time_aware)
        .build();

    let mut working = graph.clone();

    let mut routes: Vec<Route> = shortest_route(&working, start, end, &weight)
        .into_iter()
        .collect();

    if routes.len() == 1 {
        disconnect_route_edge(&mut working, &routes[0]);
    }

    routes.extend(top_k_routes(
        &mut working,
        start,
        end,
        &weight,
        options.alternatives,
    ));

    tracing::debug!(
        start,
        end,
        count = routes.len(),
        "route generation finished"
    );

    routes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_request_three_alternatives() {
        let options = RouteOptions::default();
        assert!(!options.eco_friendly);
        assert!(!options.time_aware);
        assert_eq!(options.alternatives, 3);
    }

    #[test]
    fn empty_graph_yields_no_routes() {
        let graph = Graph::new();
        let routes = generate_routes(&graph, 1, 2, &RouteOptions::default());
        assert!(routes.is_empty());
    }
}
