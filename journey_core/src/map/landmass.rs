//! Coarse continent silhouettes.
//!
//! Outlines are hand-placed (longitude, latitude) vertices meant to anchor the map
//! visually, not to be accurate cartography. Each outline repeats its first vertex
//! at the end.

use super::GeoPoint;

/// A named, filled outline in longitude/latitude space.
#[derive(Debug, Clone, Copy)]
pub struct Landmass {
    pub name: &'static str,
    /// (longitude, latitude) pairs.
    pub outline: &'static [(f64, f64)],
}

impl Landmass {
    /// The outline as drawable points.
    pub fn points(&self) -> Vec<GeoPoint> {
        self.outline
            .iter()
            .map(|&(lon, lat)| GeoPoint::new(lon, lat))
            .collect()
    }
}

const NORTH_AMERICA: &[(f64, f64)] = &[
    (-170.0, 70.0), (-140.0, 72.0), (-125.0, 70.0), (-110.0, 60.0), (-102.0, 50.0), (-95.0, 48.0),
    (-85.0, 50.0), (-75.0, 45.0), (-80.0, 35.0), (-90.0, 30.0), (-95.0, 20.0), (-100.0, 15.0),
    (-110.0, 20.0), (-120.0, 25.0), (-130.0, 35.0), (-140.0, 50.0), (-155.0, 60.0), (-170.0, 70.0),
];

const SOUTH_AMERICA: &[(f64, f64)] = &[
    (-80.0, 12.0), (-70.0, 10.0), (-65.0, 0.0), (-60.0, -10.0), (-60.0, -20.0), (-62.0, -30.0),
    (-70.0, -40.0), (-78.0, -50.0), (-75.0, -55.0), (-70.0, -52.0), (-65.0, -48.0), (-60.0, -40.0),
    (-58.0, -30.0), (-58.0, -20.0), (-60.0, -10.0), (-65.0, 0.0), (-70.0, 8.0), (-80.0, 12.0),
];

const AFRICA: &[(f64, f64)] = &[
    (-17.0, 37.0), (0.0, 37.0), (20.0, 32.0), (30.0, 25.0), (35.0, 10.0), (40.0, -5.0),
    (45.0, -15.0), (40.0, -25.0), (30.0, -35.0), (15.0, -35.0), (5.0, -30.0), (0.0, -25.0),
    (-5.0, -5.0), (-10.0, 0.0), (-15.0, 10.0), (-17.0, 20.0), (-17.0, 37.0),
];

const EURASIA: &[(f64, f64)] = &[
    (-10.0, 70.0), (10.0, 72.0), (30.0, 70.0), (50.0, 65.0), (70.0, 60.0), (90.0, 55.0),
    (110.0, 60.0), (130.0, 55.0), (150.0, 60.0), (160.0, 55.0), (160.0, 40.0), (150.0, 35.0),
    (140.0, 30.0), (120.0, 25.0), (100.0, 20.0), (80.0, 15.0), (60.0, 20.0), (40.0, 25.0),
    (30.0, 30.0), (20.0, 40.0), (10.0, 45.0), (0.0, 50.0), (-10.0, 55.0), (-10.0, 60.0),
    (-10.0, 70.0),
];

const AUSTRALIA: &[(f64, f64)] = &[
    (110.0, -10.0), (120.0, -15.0), (135.0, -20.0), (145.0, -25.0), (150.0, -32.0), (145.0, -38.0),
    (130.0, -40.0), (120.0, -35.0), (110.0, -30.0), (105.0, -20.0), (110.0, -10.0),
];

const GREENLAND: &[(f64, f64)] = &[
    (-60.0, 82.0), (-40.0, 80.0), (-20.0, 75.0), (-20.0, 65.0), (-45.0, 60.0), (-60.0, 65.0),
    (-60.0, 82.0),
];

const INDIA: &[(f64, f64)] = &[
    (70.0, 22.0), (80.0, 28.0), (90.0, 22.0), (85.0, 10.0), (75.0, 5.0), (70.0, 15.0),
    (70.0, 22.0),
];

const ANTARCTICA: &[(f64, f64)] = &[
    (-180.0, -70.0), (-120.0, -72.0), (-60.0, -74.0), (0.0, -76.0), (60.0, -74.0), (120.0, -72.0),
    (180.0, -70.0), (180.0, -80.0), (-180.0, -80.0), (-180.0, -70.0),
];

/// Every landmass, in drawing order.
pub const LANDMASSES: &[Landmass] = &[
    Landmass {
        name: "North America",
        outline: NORTH_AMERICA,
    },
    Landmass {
        name: "South America",
        outline: SOUTH_AMERICA,
    },
    Landmass {
        name: "Africa",
        outline: AFRICA,
    },
    Landmass {
        name: "Eurasia",
        outline: EURASIA,
    },
    Landmass {
        name: "Australia",
        outline: AUSTRALIA,
    },
    Landmass {
        name: "Greenland",
        outline: GREENLAND,
    },
    Landmass {
        name: "India",
        outline: INDIA,
    },
    Landmass {
        name: "Antarctica",
        outline: ANTARCTICA,
    },
];
