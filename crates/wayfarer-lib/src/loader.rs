//! Graph construction from edge-definition JSON.
//!
//! An edge definition references two waypoints by id, names a transport
//! mode, and optionally fixes a distance and direction. Every reference
//! must resolve against the catalog: an unknown waypoint id or transport
//! mode aborts the build rather than dropping the edge.

use std::fs;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::catalog::WaypointCatalog;
use crate::error::{Error, Result};
use crate::graph::{Graph, RouteLeg};
use crate::transport::TransportMode;
use crate::waypoint::WaypointId;

/// One edge of the network as it appears in the JSON source.
#[derive(Debug, Clone, Deserialize)]
pub struct EdgeDefinition {
    /// Id of the start waypoint.
    pub start: WaypointId,
    /// Id of the end waypoint.
    pub end: WaypointId,
    /// Transport mode name, matched case-insensitively.
    pub transport: String,
    /// Pre-defined distance in kilometres; derived from coordinates when
    /// absent.
    #[serde(default)]
    pub distance: Option<f64>,
    /// Whether the connection can be travelled both ways.
    #[serde(default = "default_bidirectional")]
    pub bidirectional: bool,
}

fn default_bidirectional() -> bool {
    true
}

/// Read edge definitions from a JSON reader: an array of edge objects.
pub fn read_edge_definitions<R: Read>(reader: R) -> Result<Vec<EdgeDefinition>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Construct a graph from the catalog's waypoints and the given edges.
///
/// All catalog waypoints become vertices, including ones no edge touches.
/// Fails on the first edge referencing an unknown waypoint id or transport
/// mode; a partially valid source never produces a graph.
pub fn build_graph(catalog: &WaypointCatalog, edges: &[EdgeDefinition]) -> Result<Graph> {
    let mut graph = Graph::new();

    for waypoint in catalog.iter() {
        graph.add_vertex(waypoint.clone());
    }

    for edge in edges {
        let start = resolve_waypoint(catalog, edge.start)?;
        let end = resolve_waypoint(catalog, edge.end)?;
        let mode: TransportMode = edge.transport.parse()?;

        let leg = RouteLeg::new(start.clone(), end.clone(), mode, edge.distance)?;
        graph.add_edge(leg, edge.bidirectional);
    }

    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph built"
    );

    Ok(graph)
}

/// Load a catalog and a graph from waypoint and edge JSON files.
pub fn load_graph(
    waypoints_path: &Path,
    edges_path: &Path,
) -> Result<(WaypointCatalog, Graph)> {
    let catalog = WaypointCatalog::from_path(waypoints_path)?;
    let edges = read_edge_definitions(fs::File::open(edges_path)?)?;
    let graph = build_graph(&catalog, &edges)?;
    Ok((catalog, graph))
}

fn resolve_waypoint(
    catalog: &WaypointCatalog,
    id: WaypointId,
) -> Result<&crate::waypoint::Waypoint> {
    catalog.get(id).ok_or(Error::UnknownWaypointId { id })
}
