//! Map styling, loadable from TOML.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{Align, Bounds, TextStyle};
use crate::error::RenderError;

/// Most graticule lines a style may ask for along one axis.
pub const MAX_GRID_LINES: usize = 10_000;

/// Everything about how a map looks. Every field may be omitted in TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapStyle {
    pub title: String,

    /// Page size in pixels.
    pub width: u32,
    pub height: u32,

    /// Visible world window, in degrees.
    pub bounds: Bounds,

    /// Degrees between graticule lines.
    pub grid_step: f64,

    pub page_color: String,
    pub ocean_color: String,
    pub grid_color: String,
    pub land_color: String,
    pub route_color: String,
    pub marker_color: String,
    pub text_color: String,

    pub grid_width: f64,
    pub route_width: f64,
    /// Marker diameter in pixels.
    pub marker_size: f64,

    pub font_family: String,
    pub label_size: f64,
    pub summary_size: f64,

    /// Degrees between the top of the window and the summary line.
    pub summary_inset: f64,
}

impl Default for MapStyle {
    fn default() -> Self {
        Self {
            title: "Your Post-Grad Travel Map".to_string(),
            width: 1000,
            height: 600,
            bounds: Bounds::default(),
            grid_step: 30.0,
            page_color: "black".to_string(),
            ocean_color: "#06243d".to_string(),
            grid_color: "#1d4f7a".to_string(),
            land_color: "#4fa35f".to_string(),
            route_color: "gold".to_string(),
            marker_color: "#f4e409".to_string(),
            text_color: "white".to_string(),
            grid_width: 1.0,
            route_width: 2.0,
            marker_size: 8.0,
            font_family: "Arial".to_string(),
            label_size: 10.0,
            summary_size: 12.0,
            summary_inset: 10.0,
        }
    }
}

impl MapStyle {
    /// Parse a style from TOML; missing fields keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, RenderError> {
        let style: Self = toml::from_str(source)?;
        style.check()?;
        Ok(style)
    }

    /// Reject styles that cannot be drawn: an empty page or world window, or a
    /// grid step that is not positive or would need more than
    /// [`MAX_GRID_LINES`] lines around the globe.
    pub fn check(&self) -> Result<(), RenderError> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::Unusable(format!(
                "page size {}x{} is empty",
                self.width, self.height
            )));
        }
        let b = &self.bounds;
        if b.width().is_nan() || b.height().is_nan() || b.width() <= 0.0 || b.height() <= 0.0 {
            return Err(RenderError::Unusable(format!(
                "world bounds west={} south={} east={} north={} enclose no area",
                b.west, b.south, b.east, b.north
            )));
        }
        if self.grid_step.is_nan() || self.grid_step <= 0.0 {
            return Err(RenderError::Unusable(format!(
                "grid step {} must be positive",
                self.grid_step
            )));
        }
        if 360.0 / self.grid_step > MAX_GRID_LINES as f64 {
            return Err(RenderError::Unusable(format!(
                "grid step {} needs more than {} graticule lines",
                self.grid_step, MAX_GRID_LINES
            )));
        }
        Ok(())
    }

    /// Read a style from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RenderError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| RenderError::ReadStyle {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Style for waypoint labels.
    pub fn label_style(&self) -> TextStyle {
        TextStyle {
            color: self.text_color.clone(),
            font_family: self.font_family.clone(),
            size: self.label_size,
            bold: false,
            align: Align::Left,
        }
    }

    /// Style for the headline across the top of the map.
    pub fn summary_style(&self) -> TextStyle {
        TextStyle {
            color: self.text_color.clone(),
            font_family: self.font_family.clone(),
            size: self.summary_size,
            bold: true,
            align: Align::Center,
        }
    }
}
