//! SVG drawing surface.

use std::path::Path;

use super::{Align, Bounds, Canvas, GeoPoint, MapStyle, TextStyle};
use crate::error::RenderError;

/// Builds a standalone SVG document in memory.
#[derive(Debug, Clone)]
pub struct SvgCanvas {
    width: f64,
    height: f64,
    title: String,
    page_color: String,
    world: Bounds,
    elements: Vec<String>,
}

impl SvgCanvas {
    /// Create an empty page sized and titled by the style.
    pub fn new(style: &MapStyle) -> Self {
        Self {
            width: f64::from(style.width),
            height: f64::from(style.height),
            title: style.title.clone(),
            page_color: style.page_color.clone(),
            world: style.bounds,
            elements: Vec::new(),
        }
    }

    /// Number of drawn elements so far.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Map a world point to page pixels; north is up.
    pub fn project(&self, point: GeoPoint) -> (f64, f64) {
        let x = (point.lon - self.world.west) / self.world.width() * self.width;
        let y = (self.world.north - point.lat) / self.world.height() * self.height;
        (x, y)
    }

    /// Render the finished document.
    pub fn finish(&self) -> String {
        let mut doc = String::new();
        doc.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        doc.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
            w = self.width,
            h = self.height
        ));
        doc.push_str(&format!("  <title>{}</title>\n", escape_xml(&self.title)));
        doc.push_str(&format!(
            "  <rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"{}\"/>\n",
            self.width,
            self.height,
            escape_xml(&self.page_color)
        ));
        for element in &self.elements {
            doc.push_str("  ");
            doc.push_str(element);
            doc.push('\n');
        }
        doc.push_str("</svg>\n");
        doc
    }

    /// Write the finished document to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        let path = path.as_ref();
        std::fs::write(path, self.finish()).map_err(|source| RenderError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    fn points_attr(&self, points: &[GeoPoint]) -> String {
        points
            .iter()
            .map(|p| {
                let (x, y) = self.project(*p);
                format!("{x:.1},{y:.1}")
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Canvas for SvgCanvas {
    fn set_world(&mut self, bounds: Bounds) {
        self.world = bounds;
    }

    fn fill_polygon(&mut self, points: &[GeoPoint], color: &str) {
        if points.is_empty() {
            return;
        }
        self.elements.push(format!(
            "<polygon points=\"{}\" fill=\"{c}\" stroke=\"{c}\"/>",
            self.points_attr(points),
            c = escape_xml(color)
        ));
    }

    fn stroke_polyline(&mut self, points: &[GeoPoint], color: &str, width: f64) {
        if points.len() < 2 {
            return;
        }
        self.elements.push(format!(
            "<polyline points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" stroke-linejoin=\"round\" stroke-linecap=\"round\"/>",
            self.points_attr(points),
            escape_xml(color),
            width
        ));
    }

    fn dot(&mut self, at: GeoPoint, size: f64, color: &str) {
        let (x, y) = self.project(at);
        self.elements.push(format!(
            "<circle cx=\"{x:.1}\" cy=\"{y:.1}\" r=\"{:.1}\" fill=\"{}\"/>",
            size / 2.0,
            escape_xml(color)
        ));
    }

    fn text(&mut self, at: GeoPoint, text: &str, style: &TextStyle) {
        let (x, y) = self.project(at);
        let anchor = match style.align {
            Align::Left => "start",
            Align::Center => "middle",
            Align::Right => "end",
        };
        let weight = if style.bold { "bold" } else { "normal" };
        self.elements.push(format!(
            "<text x=\"{x:.1}\" y=\"{y:.1}\" fill=\"{}\" font-family=\"{}\" font-size=\"{}\" font-weight=\"{weight}\" text-anchor=\"{anchor}\">{}</text>",
            escape_xml(&style.color),
            escape_xml(&style.font_family),
            style.size,
            escape_xml(text)
        ));
    }
}

fn escape_xml(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
