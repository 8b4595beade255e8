//! Command-recording map surface for the browser page.
//!
//! The synchronizer lives on the server; the tiles are drawn by Leaflet in
//! the browser. This surface captures the synchronizer's commands as a
//! serializable model that the page script replays verbatim.

use serde::Serialize;

use crate::domain::{Bounds, Coordinate};
use crate::map::{MapSurface, Marker};

/// A marker as the page script sees it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerModel {
    pub lat: f64,
    pub lon: f64,
    pub label: String,
}

/// Snapshot of everything the page script needs to draw the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewportModel {
    /// `[lat, lon]` viewport center.
    pub center: [f64; 2],

    /// Zoom level for the center placement.
    pub zoom: u8,

    /// Pickup and drop markers, when a route is shown.
    pub markers: Vec<MarkerModel>,

    /// Route polyline as `[lat, lon]` pairs.
    pub polyline: Vec<[f64; 2]>,

    /// Bounds to fit, when a route is shown.
    pub fit: Option<Bounds>,
}

/// [`MapSurface`] implementation that records the latest command of each
/// kind instead of drawing anything.
#[derive(Debug, Clone)]
pub struct ScriptedSurface {
    center: [f64; 2],
    zoom: u8,
    markers: Vec<MarkerModel>,
    polyline: Vec<[f64; 2]>,
    fit: Option<Bounds>,
}

impl ScriptedSurface {
    /// Create an empty surface; the synchronizer sets the real initial
    /// view on construction.
    pub fn new() -> Self {
        Self {
            center: [0.0, 0.0],
            zoom: 1,
            markers: Vec::new(),
            polyline: Vec::new(),
            fit: None,
        }
    }

    /// The current snapshot for the page.
    pub fn model(&self) -> ViewportModel {
        ViewportModel {
            center: self.center,
            zoom: self.zoom,
            markers: self.markers.clone(),
            polyline: self.polyline.clone(),
            fit: self.fit,
        }
    }
}

impl Default for ScriptedSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl MapSurface for ScriptedSurface {
    fn set_view(&mut self, center: Coordinate, zoom: u8) {
        self.center = [center.lat, center.lon];
        self.zoom = zoom;
    }

    fn place_markers(&mut self, pickup: Marker, drop: Marker) {
        self.markers = vec![
            MarkerModel {
                lat: pickup.position.lat,
                lon: pickup.position.lon,
                label: pickup.label,
            },
            MarkerModel {
                lat: drop.position.lat,
                lon: drop.position.lon,
                label: drop.label,
            },
        ];
    }

    fn draw_route(&mut self, path: &[Coordinate]) {
        self.polyline = path.iter().map(|c| [c.lat, c.lon]).collect();
    }

    fn fit_bounds(&mut self, bounds: Bounds) {
        self.fit = Some(bounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{MapConfig, MapView};

    #[test]
    fn fresh_surface_has_no_route() {
        let view = MapView::new(MapConfig::default(), ScriptedSurface::new());
        let model = view.surface().model();

        assert_eq!(model.center, [20.5937, 78.9629]);
        assert_eq!(model.zoom, 5);
        assert!(model.markers.is_empty());
        assert!(model.polyline.is_empty());
        assert!(model.fit.is_none());
    }

    #[test]
    fn route_commands_end_up_in_the_model() {
        let mut view = MapView::new(MapConfig::default(), ScriptedSurface::new());
        let path = vec![
            Coordinate::new(40.7580, -73.9855),
            Coordinate::new(40.7829, -73.9654),
        ];
        view.route_changed(path[0], path[1], &path);

        let model = view.surface().model();
        assert_eq!(model.polyline, vec![[40.7580, -73.9855], [40.7829, -73.9654]]);
        assert_eq!(model.markers.len(), 2);
        assert_eq!(model.markers[0].label, "Pickup");
        assert_eq!(model.markers[1].label, "Drop");
        assert_eq!(model.fit, Bounds::from_path(&path));
    }

    #[test]
    fn model_serializes_for_the_page() {
        let view = MapView::new(MapConfig::default(), ScriptedSurface::new());
        let json = serde_json::to_value(view.surface().model()).unwrap();

        assert_eq!(json["zoom"], 5);
        assert!(json["fit"].is_null());
        assert!(json["markers"].as_array().unwrap().is_empty());
    }
}
