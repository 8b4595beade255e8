//! The drawing-surface contract and its configuration.

use crate::domain::{Bounds, Coordinate};

/// A labelled point marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub position: Coordinate,
    pub label: String,
}

/// Construction-time map configuration.
///
/// The initial viewport and the marker labels are explicit arguments to
/// [`MapView::new`](super::MapView::new) rather than process-global
/// renderer state, so two views can be configured differently.
#[derive(Debug, Clone)]
pub struct MapConfig {
    /// Viewport center before any route is shown.
    pub center: Coordinate,

    /// Zoom level before any route is shown.
    pub zoom: u8,

    /// Label shown on the pickup marker.
    pub pickup_label: String,

    /// Label shown on the drop marker.
    pub drop_label: String,
}

impl MapConfig {
    /// Set the initial viewport.
    pub fn with_view(mut self, center: Coordinate, zoom: u8) -> Self {
        self.center = center;
        self.zoom = zoom;
        self
    }

    /// Set the marker labels.
    pub fn with_labels(mut self, pickup: impl Into<String>, drop: impl Into<String>) -> Self {
        self.pickup_label = pickup.into();
        self.drop_label = drop.into();
        self
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            // Country-level view until a route arrives.
            center: Coordinate::new(20.5937, 78.9629),
            zoom: 5,
            pickup_label: "Pickup".to_string(),
            drop_label: "Drop".to_string(),
        }
    }
}

/// The drawing surface the synchronizer writes to.
///
/// Implementations only receive coordinates and viewport commands; the
/// synchronizer never inspects how or when tiles load.
pub trait MapSurface {
    /// Set the viewport to a center and zoom level.
    fn set_view(&mut self, center: Coordinate, zoom: u8);

    /// Place the pickup and drop markers, replacing any previous ones.
    fn place_markers(&mut self, pickup: Marker, drop: Marker);

    /// Replace the route polyline.
    fn draw_route(&mut self, path: &[Coordinate]);

    /// Fit the viewport to exactly these bounds.
    fn fit_bounds(&mut self, bounds: Bounds);
}
