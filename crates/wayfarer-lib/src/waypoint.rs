use serde::{Deserialize, Serialize};

/// Numeric identifier for a waypoint.
pub type WaypointId = u64;

/// The factor to multiply an angular distance in degrees by to get nautical miles.
const DISTANCE_FACTOR: f64 = 60.0 * 1.1515;

/// The factor to multiply the nautical-mile distance by to convert it to kilometres.
const KM_CONVERSION: f64 = 1.609344;

/// A named geographic point acting as a graph vertex.
///
/// Two waypoints are equal only when every field matches; use
/// [`Waypoint::is_same_location`] to compare coordinates alone. The id is
/// `None` until the waypoint is inserted into a [`Graph`](crate::Graph) or
/// supplied by the catalog, and stays stable from then on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Identifier assigned by the catalog or on graph insertion.
    #[serde(default)]
    pub id: Option<WaypointId>,
    /// Display name; not required to be unique.
    pub name: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl Waypoint {
    /// Create a waypoint without an assigned id.
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            latitude,
            longitude,
        }
    }

    /// Create a waypoint with a known id.
    pub fn with_id(
        id: WaypointId,
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            latitude,
            longitude,
        }
    }

    /// Whether this waypoint sits at the same coordinates as another,
    /// regardless of id or name.
    pub fn is_same_location(&self, other: &Waypoint) -> bool {
        self.latitude == other.latitude && self.longitude == other.longitude
    }
}

/// Calculate the great-circle distance in kilometres between two waypoints.
///
/// Applies the spherical law of cosines to the coordinates in degrees and
/// converts the resulting angular distance through the two empirical factors
/// above. Identical coordinates short-circuit to zero.
pub fn kilometre_distance(from: &Waypoint, to: &Waypoint) -> f64 {
    if from.is_same_location(to) {
        return 0.0;
    }

    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let delta = (from.longitude - to.longitude).to_radians();

    // Clamp guards against acos domain errors from floating-point drift.
    let cosine = (lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * delta.cos()).clamp(-1.0, 1.0);

    cosine.acos().to_degrees() * DISTANCE_FACTOR * KM_CONVERSION
}
