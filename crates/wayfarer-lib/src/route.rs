use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::RouteLeg;
use crate::waypoint::Waypoint;

/// An ordered, non-empty sequence of legs forming one start-to-end walk.
///
/// The end of each leg is the start of the next. Total distance, time and
/// emissions are folds over the legs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    legs: Vec<RouteLeg>,
}

impl Route {
    /// Build a route from its legs. A route with no legs is rejected.
    pub fn new(legs: Vec<RouteLeg>) -> Result<Self> {
        if legs.is_empty() {
            return Err(Error::EmptyRoute);
        }
        Ok(Self { legs })
    }

    /// The legs of this route, in travel order.
    pub fn legs(&self) -> &[RouteLeg] {
        &self.legs
    }

    /// The waypoint the route departs from.
    pub fn start(&self) -> &Waypoint {
        self.legs[0].start()
    }

    /// The waypoint the route arrives at.
    pub fn end(&self) -> &Waypoint {
        self.legs[self.legs.len() - 1].end()
    }

    /// Number of intermediary stops between start and end.
    pub fn num_stops(&self) -> usize {
        self.legs.len() - 1
    }

    /// Total distance over all legs, in kilometres.
    pub fn total_distance(&self) -> f64 {
        self.legs.iter().map(RouteLeg::distance).sum()
    }

    /// Total travel time over all legs, in hours.
    pub fn total_time(&self) -> f64 {
        self.legs.iter().map(RouteLeg::travel_time).sum()
    }

    /// Total CO2 emitted over all legs, in grams.
    pub fn total_emissions(&self) -> f64 {
        self.legs.iter().map(RouteLeg::emissions).sum()
    }

    /// Whether consecutive legs join up: each leg ends where the next one
    /// starts.
    pub fn is_contiguous(&self) -> bool {
        self.legs
            .windows(2)
            .all(|pair| pair[0].end().is_same_location(pair[1].start()))
    }
}

/// A route saved on a user's account.
///
/// The core only produces the wrapped [`Route`]; ownership and persistence
/// of saved routes belong to the calling layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavedRoute {
    user: String,
    route: Route,
}

impl SavedRoute {
    pub fn new(user: impl Into<String>, route: Route) -> Self {
        Self {
            user: user.into(),
            route,
        }
    }

    /// The username owning this saved route.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// The wrapped route.
    pub fn route(&self) -> &Route {
        &self.route
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::TransportMode;
    use crate::waypoint::Waypoint;

    fn leg(from: (u64, f64), to: (u64, f64), distance: f64) -> RouteLeg {
        let start = Waypoint::with_id(from.0, format!("wp{}", from.0), from.1, 0.0);
        let end = Waypoint::with_id(to.0, format!("wp{}", to.0), to.1, 0.0);
        RouteLeg::new(start, end, TransportMode::Train, Some(distance)).unwrap()
    }

    #[test]
    fn empty_route_is_rejected() {
        let err = Route::new(Vec::new()).unwrap_err();
        assert_eq!(err.to_string(), "a route must have at least one leg");
    }

    #[test]
    fn totals_fold_over_legs() {
        let route = Route::new(vec![
            leg((1, 0.0), (2, 1.0), 65.0),
            leg((2, 1.0), (3, 2.0), 130.0),
        ])
        .unwrap();

        assert_eq!(route.total_distance(), 195.0);
        assert_eq!(route.total_time(), 3.0); // 195 km at 65 km/h by train
        assert_eq!(route.total_emissions(), 41.0 * 195.0);
        assert_eq!(route.num_stops(), 1);
        assert_eq!(route.start().id, Some(1));
        assert_eq!(route.end().id, Some(3));
        assert!(route.is_contiguous());
    }

    #[test]
    fn saved_route_references_the_original() {
        let route = Route::new(vec![leg((1, 0.0), (2, 1.0), 10.0)]).unwrap();
        let saved = SavedRoute::new("ada", route.clone());
        assert_eq!(saved.user(), "ada");
        assert_eq!(saved.route(), &route);
    }
}
