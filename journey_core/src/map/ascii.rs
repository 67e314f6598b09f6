//! Plain-text drawing surface, used when no SVG can be produced.

use super::{Bounds, Canvas, GeoPoint, Layer, TextStyle};

pub const DEFAULT_COLUMNS: usize = 120;
pub const DEFAULT_ROWS: usize = 40;

const OCEAN: char = ' ';
const GRID: char = '.';
const LAND: char = '#';
const ROUTE: char = '*';
const MARKER: char = '@';

/// A character grid. Colors are ignored; the active layer picks the glyph.
#[derive(Debug, Clone)]
pub struct AsciiCanvas {
    cols: usize,
    rows: usize,
    cells: Vec<char>,
    world: Bounds,
    layer: Layer,
    legend: Vec<String>,
    headline: Option<String>,
}

impl Default for AsciiCanvas {
    fn default() -> Self {
        Self::new(DEFAULT_COLUMNS, DEFAULT_ROWS)
    }
}

impl AsciiCanvas {
    pub fn new(cols: usize, rows: usize) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            cells: vec![OCEAN; cols * rows],
            world: Bounds::default(),
            layer: Layer::Ocean,
            legend: Vec::new(),
            headline: None,
        }
    }

    pub fn glyph_at(&self, col: usize, row: usize) -> Option<char> {
        (col < self.cols && row < self.rows).then(|| self.cells[row * self.cols + col])
    }

    /// Marker labels in drawing order.
    pub fn legend(&self) -> &[String] {
        &self.legend
    }

    /// Headline, grid and numbered legend as one block of text.
    pub fn finish(&self) -> String {
        let mut out = String::new();
        if let Some(headline) = &self.headline {
            out.push_str(headline);
            out.push('\n');
        }
        for row in self.cells.chunks(self.cols) {
            let line: String = row.iter().collect();
            out.push_str(line.trim_end());
            out.push('\n');
        }
        for (i, label) in self.legend.iter().enumerate() {
            out.push_str(&format!("{:>3}. {}\n", i + 1, label));
        }
        out
    }

    fn glyph(&self) -> char {
        match self.layer {
            Layer::Ocean | Layer::Summary => OCEAN,
            Layer::Graticule => GRID,
            Layer::Land => LAND,
            Layer::Route => ROUTE,
            Layer::Markers => MARKER,
        }
    }

    /// Cell containing a world point, if it is on the grid.
    fn cell_of(&self, point: GeoPoint) -> Option<(usize, usize)> {
        let x = (point.lon - self.world.west) / self.world.width() * self.cols as f64;
        let y = (self.world.north - point.lat) / self.world.height() * self.rows as f64;
        if !(x.is_finite() && y.is_finite()) || x < 0.0 || y < 0.0 {
            return None;
        }
        let (col, row) = (x.floor() as usize, y.floor() as usize);
        (col < self.cols && row < self.rows).then_some((col, row))
    }

    /// World point at the center of a cell.
    fn cell_center(&self, col: usize, row: usize) -> GeoPoint {
        let lon = self.world.west + (col as f64 + 0.5) / self.cols as f64 * self.world.width();
        let lat = self.world.north - (row as f64 + 0.5) / self.rows as f64 * self.world.height();
        GeoPoint::new(lon, lat)
    }

    fn plot(&mut self, col: usize, row: usize, glyph: char) {
        let cell = &mut self.cells[row * self.cols + col];
        // grid lines stay behind anything already drawn
        if glyph == GRID && *cell != OCEAN {
            return;
        }
        *cell = glyph;
    }

    fn plot_segment(&mut self, from: GeoPoint, to: GeoPoint, glyph: char) {
        let cell_w = self.world.width() / self.cols as f64;
        let cell_h = self.world.height() / self.rows as f64;
        let span = ((to.lon - from.lon).abs() / cell_w).max((to.lat - from.lat).abs() / cell_h);
        let steps = (span.ceil() as usize).max(1) * 2;
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let at = GeoPoint::new(
                from.lon + (to.lon - from.lon) * t,
                from.lat + (to.lat - from.lat) * t,
            );
            if let Some((col, row)) = self.cell_of(at) {
                self.plot(col, row, glyph);
            }
        }
    }
}

/// Even-odd rule.
fn contains(polygon: &[GeoPoint], point: GeoPoint) -> bool {
    let mut inside = false;
    let mut j = polygon.len().wrapping_sub(1);
    for i in 0..polygon.len() {
        let (a, b) = (polygon[i], polygon[j]);
        if (a.lat > point.lat) != (b.lat > point.lat)
            && point.lon < (b.lon - a.lon) * (point.lat - a.lat) / (b.lat - a.lat) + a.lon
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

impl Canvas for AsciiCanvas {
    fn set_world(&mut self, bounds: Bounds) {
        self.world = bounds;
    }

    fn begin_layer(&mut self, layer: Layer) {
        self.layer = layer;
    }

    fn fill_polygon(&mut self, points: &[GeoPoint], _color: &str) {
        if points.len() < 3 {
            return;
        }
        let glyph = self.glyph();
        for row in 0..self.rows {
            for col in 0..self.cols {
                if contains(points, self.cell_center(col, row)) {
                    self.plot(col, row, glyph);
                }
            }
        }
    }

    fn stroke_polyline(&mut self, points: &[GeoPoint], _color: &str, _width: f64) {
        let glyph = self.glyph();
        for pair in points.windows(2) {
            self.plot_segment(pair[0], pair[1], glyph);
        }
    }

    fn dot(&mut self, at: GeoPoint, _size: f64, _color: &str) {
        if let Some((col, row)) = self.cell_of(at) {
            self.plot(col, row, MARKER);
        }
    }

    fn text(&mut self, _at: GeoPoint, text: &str, _style: &TextStyle) {
        match self.layer {
            Layer::Summary => self.headline = Some(text.to_string()),
            _ => self.legend.push(text.to_string()),
        }
    }
}
