//! Wayfarer library entry points.
//!
//! This crate exposes the travel-network graph model, the composable
//! edge-weight functions, and the route-finding algorithms (Dijkstra and
//! top-K alternatives), together with the JSON catalog/graph loading used to
//! instantiate networks. Higher-level consumers (CLI, services) should only
//! depend on the items exported here instead of reimplementing behavior.

#![deny(warnings)]

pub mod catalog;
pub mod error;
pub mod graph;
pub mod loader;
pub mod route;
pub mod routing;
pub mod transport;
pub mod waypoint;
pub mod weight;

pub use catalog::WaypointCatalog;
pub use error::{Error, Result};
pub use graph::{Graph, RouteLeg};
pub use loader::{build_graph, load_graph, read_edge_definitions, EdgeDefinition};
pub use route::{Route, SavedRoute};
pub use routing::{
    disconnect_route_edge, generate_routes, shortest_route, top_k_routes, RouteOptions,
};
pub use transport::TransportMode;
pub use waypoint::{kilometre_distance, Waypoint, WaypointId};
pub use weight::{CostTerm, WeightFunction, WeightFunctionBuilder, EMISSIONS_SCALE};
