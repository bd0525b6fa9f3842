use thiserror::Error;

use crate::waypoint::WaypointId;

/// Convenient result alias for the wayfarer library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a waypoint name could not be found in the catalog.
    #[error("unknown waypoint name: {name}{}", format_suggestions(.suggestions))]
    UnknownWaypoint {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when an edge definition references a waypoint id that does not exist.
    #[error("no waypoint with id {id} exists")]
    UnknownWaypointId { id: WaypointId },

    /// Raised when an edge definition names a transport mode that is not supported.
    #[error("unknown transport mode: {name}")]
    UnknownTransportMode { name: String },

    /// Raised when a route leg would start and end at the same location.
    #[error("a route leg cannot start and end at the same waypoint ({name})")]
    CoincidentWaypoints { name: String },

    /// Raised when no route could be found between two waypoints.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when constructing a route without any legs.
    #[error("a route must have at least one leg")]
    EmptyRoute,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_waypoint_formats_suggestions() {
        let err = Error::UnknownWaypoint {
            name: "Dublni".to_string(),
            suggestions: vec!["Dublin".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unknown waypoint name: Dublni. Did you mean 'Dublin'?"
        );
    }

    #[test]
    fn unknown_waypoint_without_suggestions_is_plain() {
        let err = Error::UnknownWaypoint {
            name: "Atlantis".to_string(),
            suggestions: Vec::new(),
        };
        assert_eq!(err.to_string(), "unknown waypoint name: Atlantis");
    }
}
