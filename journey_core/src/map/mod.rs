//! World map rendering.
//!
//! The renderer knows nothing about pixels. It paints layers back to front onto
//! any [`Canvas`] in longitude/latitude space, and each surface (SVG document,
//! character grid) decides how that maps onto its own device.

mod ascii;
mod canvas;
mod landmass;
mod style;
mod svg;

pub use ascii::*;
pub use canvas::*;
pub use landmass::*;
pub use style::*;
pub use svg::*;

use serde::Serialize;
use story_graph::Waypoint;
use tracing::debug;

use crate::error::RenderError;

/// What a render pass put on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSummary {
    /// The summary line across the top of the map.
    pub headline: String,
    pub markers: usize,
    /// Straight route segments between consecutive waypoints.
    pub segments: usize,
}

/// Paints a journey onto a canvas.
#[derive(Debug, Clone, Default)]
pub struct MapRenderer {
    style: MapStyle,
}

impl MapRenderer {
    pub fn new(style: MapStyle) -> Self {
        Self { style }
    }

    pub fn with_defaults() -> Self {
        Self::default()
    }

    pub fn style(&self) -> &MapStyle {
        &self.style
    }

    /// Draw the waypoints, in visit order, on top of the world map.
    ///
    /// An empty slice still draws the world and a headline.
    pub fn render<C>(
        &self,
        waypoints: &[Waypoint],
        canvas: &mut C,
    ) -> Result<RenderSummary, RenderError>
    where
        C: Canvas + ?Sized,
    {
        let style = &self.style;
        style.check()?;
        let bounds = style.bounds;
        canvas.set_world(bounds);

        canvas.begin_layer(Layer::Ocean);
        canvas.fill_polygon(&bounds.outline(), &style.ocean_color);

        canvas.begin_layer(Layer::Graticule);
        for lon in grid_values(-180.0, 180.0, style.grid_step) {
            canvas.stroke_polyline(
                &[GeoPoint::new(lon, bounds.south), GeoPoint::new(lon, bounds.north)],
                &style.grid_color,
                style.grid_width,
            );
        }
        for lat in grid_values(-90.0, 90.0, style.grid_step) {
            canvas.stroke_polyline(
                &[GeoPoint::new(bounds.west, lat), GeoPoint::new(bounds.east, lat)],
                &style.grid_color,
                style.grid_width,
            );
        }

        canvas.begin_layer(Layer::Land);
        for land in LANDMASSES {
            canvas.fill_polygon(&land.points(), &style.land_color);
        }

        canvas.begin_layer(Layer::Route);
        let route: Vec<GeoPoint> = waypoints.iter().map(GeoPoint::from).collect();
        if route.len() >= 2 {
            canvas.stroke_polyline(&route, &style.route_color, style.route_width);
        }

        canvas.begin_layer(Layer::Markers);
        let label = style.label_style();
        for (waypoint, at) in waypoints.iter().zip(&route) {
            canvas.dot(*at, style.marker_size, &style.marker_color);
            canvas.text(*at, &waypoint.name, &label);
        }

        canvas.begin_layer(Layer::Summary);
        let headline = summary_line(waypoints);
        canvas.text(
            GeoPoint::new(bounds.center_lon(), bounds.north - style.summary_inset),
            &headline,
            &style.summary_style(),
        );

        let summary = RenderSummary {
            headline,
            markers: route.len(),
            segments: route.len().saturating_sub(1),
        };
        debug!(markers = summary.markers, segments = summary.segments, "map rendered");
        Ok(summary)
    }
}

impl MapRenderer {
    /// Draw onto a default-sized [`AsciiCanvas`] and return the headline, grid,
    /// and legend as text.
    pub fn render_text(&self, waypoints: &[Waypoint]) -> Result<String, RenderError> {
        let mut canvas = AsciiCanvas::default();
        self.render(waypoints, &mut canvas)?;
        Ok(canvas.finish())
    }
}

/// The headline for a journey: every stop in order, or a stay-at-home message
/// when nothing beyond the origin was recorded.
pub fn summary_line(waypoints: &[Waypoint]) -> String {
    match waypoints {
        [] => "You stayed home this time.".to_string(),
        [origin] => format!("You stayed in {} this time.", origin.short_name()),
        _ => {
            let names: Vec<&str> = waypoints.iter().map(|w| w.name.as_str()).collect();
            format!("You traveled to: {}", names.join(", "))
        }
    }
}

/// `from`, `from + step`, ... up to and including `to`.
fn grid_values(from: f64, to: f64, step: f64) -> impl Iterator<Item = f64> {
    let count = ((to - from) / step + 1e-9).floor() as usize;
    (0..=count).map(move |i| from + i as f64 * step)
}

#[cfg(test)]
mod tests {
    use super::canvas::recording::{DrawCall, RecordingCanvas};
    use super::*;

    fn lansing() -> Waypoint {
        Waypoint::new("East Lansing, Michigan", 42.73698, -84.48387)
    }

    fn journey() -> Vec<Waypoint> {
        vec![
            lansing(),
            Waypoint::new("Las Vegas, Nevada", 36.17497, -115.13722),
            Waypoint::new("Chicago, Illinois", 41.87811, -87.62980),
        ]
    }

    fn is_layer(layer: Layer) -> impl Fn(&DrawCall) -> bool {
        move |c| *c == DrawCall::Layer(layer)
    }

    #[test]
    fn test_layers_in_order() {
        let mut canvas = RecordingCanvas::default();
        MapRenderer::with_defaults().render(&journey(), &mut canvas).unwrap();

        let layers: Vec<Layer> = canvas
            .calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Layer(l) => Some(*l),
                _ => None,
            })
            .collect();
        assert_eq!(
            layers,
            vec![
                Layer::Ocean,
                Layer::Graticule,
                Layer::Land,
                Layer::Route,
                Layer::Markers,
                Layer::Summary,
            ]
        );
        assert_eq!(canvas.calls[0], DrawCall::World(Bounds::default()));
    }

    #[test]
    fn test_land_between_grid_and_route() {
        let mut canvas = RecordingCanvas::default();
        let style = MapStyle::default();
        MapRenderer::new(style.clone()).render(&journey(), &mut canvas).unwrap();

        let is_land = |c: &DrawCall| matches!(c, DrawCall::Polygon { color, .. } if *color == style.land_color);
        let is_ocean = |c: &DrawCall| matches!(c, DrawCall::Polygon { color, .. } if *color == style.ocean_color);
        let is_grid = |c: &DrawCall| matches!(c, DrawCall::Polyline { color, .. } if *color == style.grid_color);
        let is_route = |c: &DrawCall| matches!(c, DrawCall::Polyline { color, .. } if *color == style.route_color);
        let is_dot = |c: &DrawCall| matches!(c, DrawCall::Dot { .. });

        let first_land = canvas.first(is_land).unwrap();
        let last_land = canvas.last(is_land).unwrap();
        assert!(canvas.last(is_ocean).unwrap() < first_land);
        assert!(canvas.last(is_grid).unwrap() < first_land);
        assert!(last_land < canvas.first(is_route).unwrap());
        assert!(last_land < canvas.first(is_dot).unwrap());
        assert_eq!(canvas.count(is_land), LANDMASSES.len());
        assert!(canvas.first(is_layer(Layer::Land)).unwrap() < first_land);
    }

    #[test]
    fn test_graticule_every_thirty_degrees() {
        let mut canvas = RecordingCanvas::default();
        MapRenderer::with_defaults().render(&[lansing()], &mut canvas).unwrap();

        let grid = canvas.count(|c| matches!(c, DrawCall::Polyline { color, .. } if color == "#1d4f7a"));
        assert_eq!(grid, 13 + 7);
    }

    #[derive(Default)]
    struct GridLines {
        layer: Option<Layer>,
        lines: Vec<Vec<GeoPoint>>,
    }

    impl Canvas for GridLines {
        fn set_world(&mut self, _bounds: Bounds) {}

        fn begin_layer(&mut self, layer: Layer) {
            self.layer = Some(layer);
        }

        fn fill_polygon(&mut self, _points: &[GeoPoint], _color: &str) {}

        fn stroke_polyline(&mut self, points: &[GeoPoint], _color: &str, _width: f64) {
            if self.layer == Some(Layer::Graticule) {
                self.lines.push(points.to_vec());
            }
        }

        fn dot(&mut self, _at: GeoPoint, _size: f64, _color: &str) {}

        fn text(&mut self, _at: GeoPoint, _text: &str, _style: &TextStyle) {}
    }

    #[test]
    fn test_graticule_spans_the_window() {
        let mut canvas = GridLines::default();
        MapRenderer::with_defaults().render(&[lansing()], &mut canvas).unwrap();

        assert_eq!(
            canvas.lines[0],
            vec![GeoPoint::new(-180.0, -110.0), GeoPoint::new(-180.0, 110.0)]
        );
        assert_eq!(
            canvas.lines[13],
            vec![GeoPoint::new(-190.0, -90.0), GeoPoint::new(190.0, -90.0)]
        );
        assert_eq!(
            canvas.lines.last().unwrap(),
            &vec![GeoPoint::new(-190.0, 90.0), GeoPoint::new(190.0, 90.0)]
        );
    }

    #[test]
    fn test_tiny_grid_step_is_an_error() {
        let style = MapStyle {
            grid_step: 1e-300,
            ..MapStyle::default()
        };
        let mut canvas = RecordingCanvas::default();
        let err = MapRenderer::new(style).render(&[lansing()], &mut canvas).unwrap_err();

        assert!(matches!(err, RenderError::Unusable(_)));
        assert!(canvas.calls.is_empty());
    }

    #[test]
    fn test_origin_only_uses_fallback() {
        let mut canvas = RecordingCanvas::default();
        let summary = MapRenderer::with_defaults().render(&[lansing()], &mut canvas).unwrap();

        assert_eq!(summary.headline, "You stayed in East Lansing this time.");
        assert_eq!(summary.markers, 1);
        assert_eq!(summary.segments, 0);
        assert_eq!(canvas.count(|c| matches!(c, DrawCall::Polyline { color, .. } if color == "gold")), 0);
        assert_eq!(
            canvas.texts(),
            vec!["East Lansing, Michigan", "You stayed in East Lansing this time."]
        );
    }

    #[test]
    fn test_journey_headline_and_route() {
        let mut canvas = RecordingCanvas::default();
        let summary = MapRenderer::with_defaults().render(&journey(), &mut canvas).unwrap();

        assert_eq!(
            summary.headline,
            "You traveled to: East Lansing, Michigan, Las Vegas, Nevada, Chicago, Illinois"
        );
        assert_eq!(summary.segments, 2);
        assert!(canvas.calls.contains(&DrawCall::Polyline {
            color: "gold".to_string(),
            points: 3
        }));
        assert_eq!(canvas.count(|c| matches!(c, DrawCall::Dot { .. })), 3);
    }

    #[test]
    fn test_headline_placement() {
        let mut canvas = RecordingCanvas::default();
        MapRenderer::with_defaults().render(&journey(), &mut canvas).unwrap();

        let headline_at = canvas.calls.iter().rev().find_map(|c| match c {
            DrawCall::Text { at, .. } => Some(*at),
            _ => None,
        });
        assert_eq!(headline_at, Some(GeoPoint::new(0.0, 100.0)));
    }

    #[test]
    fn test_summary_line_without_waypoints() {
        assert_eq!(summary_line(&[]), "You stayed home this time.");
    }

    #[test]
    fn test_unusable_style_is_an_error() {
        let style = MapStyle {
            grid_step: -5.0,
            ..MapStyle::default()
        };
        let mut canvas = RecordingCanvas::default();
        let err = MapRenderer::new(style).render(&journey(), &mut canvas).unwrap_err();

        assert!(matches!(err, RenderError::Unusable(_)));
        assert!(canvas.calls.is_empty());
    }

    #[test]
    fn test_renders_to_ascii() {
        let mut canvas = AsciiCanvas::default();
        MapRenderer::with_defaults().render(&journey(), &mut canvas).unwrap();
        let text = canvas.finish();

        assert!(text.starts_with("You traveled to: East Lansing"));
        assert!(text.contains('#'));
        assert!(text.contains('@'));
        assert!(text.contains("  3. Chicago, Illinois"));
    }

    #[test]
    fn test_text_map_carries_headline_once() {
        let text = MapRenderer::with_defaults().render_text(&journey()).unwrap();
        let headline = summary_line(&journey());

        assert!(text.starts_with(&headline));
        assert_eq!(text.matches("You traveled to:").count(), 1);
    }

    #[test]
    fn test_renders_to_svg() {
        let mut canvas = SvgCanvas::new(&MapStyle::default());
        MapRenderer::with_defaults().render(&journey(), &mut canvas).unwrap();
        let doc = canvas.finish();

        assert!(doc.contains("<polyline"));
        assert!(doc.contains("Las Vegas, Nevada"));
        assert_eq!(doc.matches("<circle").count(), 3);
    }
}
