//! Waypoint catalog loading and lookup.
//!
//! The catalog is the source of named locations used to instantiate graph
//! edges: waypoints keyed by stable id, with name lookup and fuzzy
//! suggestions for near-miss names.

use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};
use crate::waypoint::{Waypoint, WaypointId};

/// Minimum similarity for a waypoint name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Collection of waypoints loaded from a JSON source.
#[derive(Debug, Clone, Default)]
pub struct WaypointCatalog {
    waypoints: HashMap<WaypointId, Waypoint>,
    name_to_id: HashMap<String, WaypointId>,
    order: Vec<WaypointId>,
}

impl WaypointCatalog {
    /// Load a catalog from a JSON file: an array of waypoint objects.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Load a catalog from a reader (e.g., file or in-memory buffer).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let waypoints: Vec<Waypoint> = serde_json::from_reader(reader)?;
        Ok(Self::from_waypoints(waypoints))
    }

    /// Build a catalog from already-constructed waypoints.
    ///
    /// Waypoints without an id are assigned one from their position. When
    /// two waypoints share a name, lookup resolves to the first inserted.
    pub fn from_waypoints(waypoints: Vec<Waypoint>) -> Self {
        let mut catalog = Self::default();

        for (position, mut waypoint) in waypoints.into_iter().enumerate() {
            let id = waypoint.id.unwrap_or(position as WaypointId + 1);
            waypoint.id = Some(id);

            catalog
                .name_to_id
                .entry(waypoint.name.clone())
                .or_insert(id);
            if catalog.waypoints.insert(id, waypoint).is_none() {
                catalog.order.push(id);
            }
        }

        tracing::debug!(count = catalog.waypoints.len(), "waypoint catalog built");
        catalog
    }

    /// Lookup a waypoint by id.
    pub fn get(&self, id: WaypointId) -> Option<&Waypoint> {
        self.waypoints.get(&id)
    }

    /// Lookup a waypoint identifier by its case-sensitive name.
    pub fn waypoint_id_by_name(&self, name: &str) -> Option<WaypointId> {
        self.name_to_id.get(name).copied()
    }

    /// Lookup a waypoint by its case-sensitive name.
    pub fn waypoint_by_name(&self, name: &str) -> Option<&Waypoint> {
        self.waypoint_id_by_name(name)
            .and_then(|id| self.waypoints.get(&id))
    }

    /// Resolve a name to a waypoint, or fail with fuzzy suggestions.
    pub fn resolve(&self, name: &str) -> Result<&Waypoint> {
        self.waypoint_by_name(name)
            .ok_or_else(|| Error::UnknownWaypoint {
                name: name.to_string(),
                suggestions: self.fuzzy_matches(name, 3),
            })
    }

    /// The closest waypoint names to `name`, best first, at most `limit`.
    pub fn fuzzy_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.to_lowercase();

        let mut scored: Vec<(f64, &str)> = self
            .iter()
            .map(|waypoint| {
                let score = strsim::jaro_winkler(&needle, &waypoint.name.to_lowercase());
                (score, waypoint.name.as_str())
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, name)| name.to_string())
            .collect()
    }

    /// All waypoints, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Waypoint> {
        self.order.iter().filter_map(|id| self.waypoints.get(id))
    }

    /// Number of waypoints in the catalog.
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Whether the catalog holds no waypoints.
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> WaypointCatalog {
        WaypointCatalog::from_waypoints(vec![
            Waypoint::with_id(1, "Dublin", 53.3498, -6.2603),
            Waypoint::with_id(2, "Cork", 51.8985, -8.4756),
            Waypoint::with_id(3, "Limerick", 52.6638, -8.6267),
        ])
    }

    #[test]
    fn name_lookup_is_case_sensitive() {
        let catalog = catalog();
        assert_eq!(catalog.waypoint_id_by_name("Cork"), Some(2));
        assert_eq!(catalog.waypoint_id_by_name("cork"), None);
    }

    #[test]
    fn resolve_suggests_near_misses() {
        let catalog = catalog();
        let err = catalog.resolve("Dubiln").unwrap_err();
        assert!(err.to_string().contains("Did you mean 'Dublin'?"));
    }

    #[test]
    fn missing_ids_are_assigned_by_position() {
        let catalog = WaypointCatalog::from_waypoints(vec![
            Waypoint::new("A", 0.0, 0.0),
            Waypoint::new("B", 1.0, 1.0),
        ]);
        assert_eq!(catalog.waypoint_id_by_name("A"), Some(1));
        assert_eq!(catalog.waypoint_id_by_name("B"), Some(2));
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let names: Vec<_> = catalog().iter().map(|w| w.name.clone()).collect();
        assert_eq!(names, vec!["Dublin", "Cork", "Limerick"]);
    }
}
