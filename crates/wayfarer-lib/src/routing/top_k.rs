use crate::graph::Graph;
use crate::route::Route;
use crate::waypoint::WaypointId;
use crate::weight::WeightFunction;

use super::dijkstra::shortest_route;

/// Produce up to `num_routes` distinct routes from `start` to `end`, ranked
/// by increasing cost.
///
/// Each found route has its first leg removed from the graph before the next
/// search, so every alternative avoids the immediate first hop of all
/// earlier routes. This is a diversity heuristic, not an exact K-shortest-
/// paths ranking: only the first route is guaranteed optimal.
///
/// The graph must already be the caller's private copy; the edge removals
/// are destructive and are never rolled back.
pub fn top_k_routes(
    graph: &mut Graph,
    start: WaypointId,
    end: WaypointId,
    weight: &WeightFunction,
    num_routes: usize,
) -> Vec<Route> {
    let mut routes = Vec::new();

    while routes.len() < num_routes {
        let Some(route) = shortest_route(graph, start, end, weight) else {
            break; // graph exhausted; fewer than num_routes is a valid result
        };

        disconnect_route_edge(graph, &route);
        routes.push(route);
    }

    routes
}

/// Remove the first leg of the route from the graph, severing the connection
/// that produced it so the next search must begin differently.
pub fn disconnect_route_edge(graph: &mut Graph, route: &Route) {
    if let Some(leg) = route.legs().first() {
        graph.remove_edge(leg);
    }
}
