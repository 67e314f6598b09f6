//! Geographic waypoints.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Valid latitudes in degrees.
pub const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;

/// Valid longitudes in degrees.
pub const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

/// A named point on the globe, in unprojected latitude/longitude degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Label shown on the map, e.g. "Las Vegas, Nevada".
    pub name: String,
    /// Degrees north of the equator.
    pub lat: f64,
    /// Degrees east of Greenwich.
    pub lon: f64,
}

impl Waypoint {
    /// Create a new waypoint.
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
        }
    }

    /// The label up to its first comma ("East Lansing, Michigan" -> "East Lansing").
    pub fn short_name(&self) -> &str {
        self.name.split(',').next().unwrap_or_default().trim()
    }

    /// Check that both coordinates fall inside the globe.
    pub fn is_in_range(&self) -> bool {
        LATITUDE_RANGE.contains(&self.lat) && LONGITUDE_RANGE.contains(&self.lon)
    }
}

impl std::fmt::Display for Waypoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:.4}, {:.4})", self.name, self.lat, self.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_name() {
        let lansing = Waypoint::new("East Lansing, Michigan", 42.73698, -84.48387);
        assert_eq!(lansing.short_name(), "East Lansing");

        let strip = Waypoint::new("Las Vegas Strip", 36.1147, -115.1728);
        assert_eq!(strip.short_name(), "Las Vegas Strip");
    }

    #[test]
    fn test_range_check() {
        assert!(Waypoint::new("Pole", 90.0, 180.0).is_in_range());
        assert!(Waypoint::new("Antipode", -90.0, -180.0).is_in_range());
        assert!(!Waypoint::new("Nowhere", 91.0, 0.0).is_in_range());
        assert!(!Waypoint::new("Nowhere", 0.0, -180.5).is_in_range());
        assert!(!Waypoint::new("Nowhere", f64::NAN, 0.0).is_in_range());
    }

    #[test]
    fn test_display() {
        let seoul = Waypoint::new("Seoul, South Korea", 37.5665, 126.978);
        assert_eq!(seoul.to_string(), "Seoul, South Korea (37.5665, 126.9780)");
    }
}
