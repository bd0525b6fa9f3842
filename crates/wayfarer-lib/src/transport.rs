use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;

/// Supported transport modes.
///
/// A closed set of variants; the per-kilometre emission rates and average
/// speeds are constant-table data, not computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    Car,
    Bus,
    Train,
    Plane,
    Ferry,
}

impl TransportMode {
    /// All modes, in declaration order.
    pub const ALL: [TransportMode; 5] = [
        TransportMode::Car,
        TransportMode::Bus,
        TransportMode::Train,
        TransportMode::Plane,
        TransportMode::Ferry,
    ];

    /// Average CO2 emissions per kilometre, in grams.
    pub fn co2_per_km(self) -> f64 {
        match self {
            TransportMode::Car => 122.0,
            TransportMode::Bus => 105.0,
            TransportMode::Train => 41.0,
            TransportMode::Plane => 150.0,
            TransportMode::Ferry => 19.0,
        }
    }

    /// Average travel speed in km/h.
    pub fn average_speed(self) -> f64 {
        match self {
            TransportMode::Car => 100.0,
            TransportMode::Bus => 80.0,
            TransportMode::Train => 65.0,
            TransportMode::Plane => 500.0,
            TransportMode::Ferry => 37.0,
        }
    }

    /// Display name of the mode.
    pub fn name(self) -> &'static str {
        match self {
            TransportMode::Car => "Car",
            TransportMode::Bus => "Bus",
            TransportMode::Train => "Train",
            TransportMode::Plane => "Plane",
            TransportMode::Ferry => "Ferry",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TransportMode {
    type Err = Error;

    /// Parse a mode name case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransportMode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownTransportMode {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("train".parse::<TransportMode>().unwrap(), TransportMode::Train);
        assert_eq!("FERRY".parse::<TransportMode>().unwrap(), TransportMode::Ferry);
        assert_eq!("Plane".parse::<TransportMode>().unwrap(), TransportMode::Plane);
    }

    #[test]
    fn parse_rejects_unknown_modes() {
        let err = "zeppelin".parse::<TransportMode>().unwrap_err();
        assert_eq!(err.to_string(), "unknown transport mode: zeppelin");
    }

    #[test]
    fn constants_are_positive() {
        for mode in TransportMode::ALL {
            assert!(mode.co2_per_km() > 0.0);
            assert!(mode.average_speed() > 0.0);
        }
    }
}
