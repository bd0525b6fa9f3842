use std::collections::HashMap;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::transport::TransportMode;
use crate::waypoint::{kilometre_distance, Waypoint, WaypointId};

/// A directed connection between two waypoints via one transport mode.
///
/// A leg either carries an explicit distance in kilometres or derives the
/// great-circle distance between its endpoints on demand. Construction
/// rejects coincident endpoints, and the fields stay private so a leg can
/// never be mutated into an invalid state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteLeg {
    start: Waypoint,
    end: Waypoint,
    mode: TransportMode,
    distance: Option<f64>,
}

impl RouteLeg {
    /// Create a leg from `start` to `end`, with an optional pre-defined
    /// distance in kilometres.
    ///
    /// Fails when the endpoints share the same coordinates: a zero-length
    /// leg is never valid.
    pub fn new(
        start: Waypoint,
        end: Waypoint,
        mode: TransportMode,
        distance: Option<f64>,
    ) -> Result<Self> {
        if start.is_same_location(&end) {
            return Err(Error::CoincidentWaypoints {
                name: start.name.clone(),
            });
        }

        Ok(Self {
            start,
            end,
            mode,
            distance,
        })
    }

    /// The waypoint this leg departs from.
    pub fn start(&self) -> &Waypoint {
        &self.start
    }

    /// The waypoint this leg arrives at.
    pub fn end(&self) -> &Waypoint {
        &self.end
    }

    /// The transport mode travelling this leg.
    pub fn mode(&self) -> TransportMode {
        self.mode
    }

    /// The leg distance in kilometres: the explicit value when one was set,
    /// otherwise the great-circle distance between the endpoints.
    pub fn distance(&self) -> f64 {
        self.distance
            .unwrap_or_else(|| kilometre_distance(&self.start, &self.end))
    }

    /// Travel time for this leg in hours at the mode's average speed.
    pub fn travel_time(&self) -> f64 {
        self.distance() / self.mode.average_speed()
    }

    /// CO2 emitted over this leg, in grams.
    pub fn emissions(&self) -> f64 {
        self.mode.co2_per_km() * self.distance()
    }

    /// The same connection travelled in the opposite direction.
    pub fn reverse(&self) -> RouteLeg {
        RouteLeg {
            start: self.end.clone(),
            end: self.start.clone(),
            mode: self.mode,
            distance: self.distance,
        }
    }

    /// Whether two legs describe the same connection: same endpoints, mode
    /// and resolved distance. Used for idempotent insertion and removal.
    fn same_connection(&self, other: &RouteLeg) -> bool {
        self.start.id == other.start.id
            && self.end.id == other.end.id
            && self.start.is_same_location(&other.start)
            && self.end.is_same_location(&other.end)
            && self.mode == other.mode
            && self.distance() == other.distance()
    }

    pub(crate) fn assign_endpoint_ids(&mut self, start: WaypointId, end: WaypointId) {
        self.start.id = Some(start);
        self.end.id = Some(end);
    }
}

/// Mutable adjacency structure over waypoints and route legs.
///
/// Vertices live in a table keyed by stable id; adjacency is an ordered list
/// of outgoing legs per vertex. Every edge's start waypoint is a key in the
/// adjacency table, and adding an edge auto-inserts missing endpoints. All
/// storage is owned, so `Clone` produces a deep copy: removing edges from the
/// clone never affects the original.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: HashMap<WaypointId, Waypoint>,
    order: Vec<WaypointId>,
    adjacency: HashMap<WaypointId, Vec<RouteLeg>>,
}

impl Graph {
    /// Construct an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex, returning its id.
    ///
    /// A vertex equal to one already present is a no-op. A waypoint without
    /// an id is assigned the next free one.
    pub fn add_vertex(&mut self, mut waypoint: Waypoint) -> WaypointId {
        if let Some(id) = waypoint.id {
            if self.vertices.get(&id) == Some(&waypoint) {
                return id;
            }
            if self.vertices.insert(id, waypoint).is_none() {
                self.order.push(id);
            }
            return id;
        }

        let mut id = self.vertices.len() as WaypointId + 1;
        while self.vertices.contains_key(&id) {
            id += 1;
        }

        waypoint.id = Some(id);
        self.vertices.insert(id, waypoint);
        self.order.push(id);
        id
    }

    /// Look up a vertex by id.
    pub fn vertex(&self, id: WaypointId) -> Option<&Waypoint> {
        self.vertices.get(&id)
    }

    /// All vertices, in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &Waypoint> {
        self.order.iter().filter_map(|id| self.vertices.get(id))
    }

    /// Number of vertices in the graph.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of directed edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Whether the graph already holds this connection from its start vertex.
    pub fn contains_edge(&self, leg: &RouteLeg) -> bool {
        leg.start()
            .id
            .and_then(|id| self.adjacency.get(&id))
            .map(|legs| legs.iter().any(|existing| existing.same_connection(leg)))
            .unwrap_or(false)
    }

    /// Add an edge, auto-inserting missing endpoints as vertices.
    ///
    /// Adding a connection that already exists is a silent no-op. When
    /// `bidirectional` is set, the reversed leg is appended to the end
    /// vertex's adjacency list as well.
    pub fn add_edge(&mut self, mut leg: RouteLeg, bidirectional: bool) {
        let start_id = self.add_vertex(leg.start.clone());
        let end_id = self.add_vertex(leg.end.clone());
        leg.assign_endpoint_ids(start_id, end_id);

        if self.contains_edge(&leg) {
            return;
        }

        let reverse = leg.reverse();
        self.adjacency.entry(start_id).or_default().push(leg);

        if bidirectional && !self.contains_edge(&reverse) {
            self.adjacency.entry(end_id).or_default().push(reverse);
        }
    }

    /// Outgoing legs for the given vertex; empty when the vertex has no
    /// outgoing edges or is not in the graph.
    pub fn neighbours(&self, id: WaypointId) -> &[RouteLeg] {
        self.adjacency
            .get(&id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Remove the first edge matching this connection from its start
    /// vertex's adjacency list; no-op when absent.
    pub fn remove_edge(&mut self, leg: &RouteLeg) {
        let Some(start_id) = leg.start().id else {
            return;
        };
        if let Some(legs) = self.adjacency.get_mut(&start_id) {
            if let Some(index) = legs.iter().position(|existing| existing.same_connection(leg)) {
                legs.remove(index);
            }
        }
    }
}
