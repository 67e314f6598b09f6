//! The drawing surface the map renderer paints on.

use serde::{Deserialize, Serialize};
use story_graph::Waypoint;

/// A point in world coordinates: longitude on the horizontal axis, latitude on
/// the vertical axis, unprojected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

impl From<&Waypoint> for GeoPoint {
    fn from(waypoint: &Waypoint) -> Self {
        Self::new(waypoint.lon, waypoint.lat)
    }
}

/// The visible window in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl Bounds {
    pub fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
        }
    }

    pub fn width(&self) -> f64 {
        self.east - self.west
    }

    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    pub fn center_lon(&self) -> f64 {
        (self.west + self.east) / 2.0
    }

    /// Check if a point lies inside the window (edges included).
    pub fn contains(&self, point: GeoPoint) -> bool {
        (self.west..=self.east).contains(&point.lon) && (self.south..=self.north).contains(&point.lat)
    }

    /// The window as a closed rectangle, clockwise from the south-west corner.
    pub fn outline(&self) -> [GeoPoint; 5] {
        [
            GeoPoint::new(self.west, self.south),
            GeoPoint::new(self.west, self.north),
            GeoPoint::new(self.east, self.north),
            GeoPoint::new(self.east, self.south),
            GeoPoint::new(self.west, self.south),
        ]
    }
}

impl Default for Bounds {
    /// The full globe plus a margin on every side.
    fn default() -> Self {
        Self::new(-190.0, -110.0, 190.0, 110.0)
    }
}

/// Horizontal text anchoring relative to the text's point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// How a piece of text is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub color: String,
    pub font_family: String,
    pub size: f64,
    pub bold: bool,
    pub align: Align,
}

/// Map layers, back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    Ocean,
    Graticule,
    Land,
    Route,
    Markers,
    Summary,
}

/// A 2D surface with a configurable world-coordinate window.
///
/// Implementations own the world-to-device transform; callers only ever pass
/// longitude/latitude points.
pub trait Canvas {
    /// Set the visible world window.
    fn set_world(&mut self, bounds: Bounds);

    /// Announce the layer the following calls belong to.
    fn begin_layer(&mut self, _layer: Layer) {}

    fn fill_polygon(&mut self, points: &[GeoPoint], color: &str);

    fn stroke_polyline(&mut self, points: &[GeoPoint], color: &str, width: f64);

    /// A filled round marker `size` device units across.
    fn dot(&mut self, at: GeoPoint, size: f64, color: &str);

    fn text(&mut self, at: GeoPoint, text: &str, style: &TextStyle);
}

#[cfg(test)]
pub(crate) mod recording {
    use super::*;

    /// One recorded canvas call.
    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawCall {
        World(Bounds),
        Layer(Layer),
        Polygon { color: String, points: usize },
        Polyline { color: String, points: usize },
        Dot { at: GeoPoint, color: String },
        Text { at: GeoPoint, text: String },
    }

    /// Canvas that remembers every call, in order.
    #[derive(Debug, Default)]
    pub struct RecordingCanvas {
        pub calls: Vec<DrawCall>,
    }

    impl RecordingCanvas {
        /// Index of the first call matching the predicate.
        pub fn first(&self, predicate: impl Fn(&DrawCall) -> bool) -> Option<usize> {
            self.calls.iter().position(predicate)
        }

        /// Index of the last call matching the predicate.
        pub fn last(&self, predicate: impl Fn(&DrawCall) -> bool) -> Option<usize> {
            self.calls.iter().rposition(predicate)
        }

        pub fn count(&self, predicate: impl Fn(&DrawCall) -> bool) -> usize {
            self.calls.iter().filter(|c| predicate(c)).count()
        }

        pub fn texts(&self) -> Vec<&str> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    DrawCall::Text { text, .. } => Some(text.as_str()),
                    _ => None,
                })
                .collect()
        }
    }

    impl Canvas for RecordingCanvas {
        fn set_world(&mut self, bounds: Bounds) {
            self.calls.push(DrawCall::World(bounds));
        }

        fn begin_layer(&mut self, layer: Layer) {
            self.calls.push(DrawCall::Layer(layer));
        }

        fn fill_polygon(&mut self, points: &[GeoPoint], color: &str) {
            self.calls.push(DrawCall::Polygon {
                color: color.to_string(),
                points: points.len(),
            });
        }

        fn stroke_polyline(&mut self, points: &[GeoPoint], color: &str, _width: f64) {
            self.calls.push(DrawCall::Polyline {
                color: color.to_string(),
                points: points.len(),
            });
        }

        fn dot(&mut self, at: GeoPoint, _size: f64, color: &str) {
            self.calls.push(DrawCall::Dot {
                at,
                color: color.to_string(),
            });
        }

        fn text(&mut self, at: GeoPoint, text: &str, _style: &TextStyle) {
            self.calls.push(DrawCall::Text {
                at,
                text: text.to_string(),
            });
        }
    }
}
