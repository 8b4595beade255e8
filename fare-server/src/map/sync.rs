//! Viewport synchronization for the route map.

use crate::domain::{Bounds, Coordinate};

use super::surface::{MapConfig, MapSurface, Marker};

/// Keeps a map surface's viewport fitted to the latest route.
///
/// The synchronizer is a pure function of the most recent route; the only
/// state it holds is the last path fitted, used to skip redundant refits
/// when the same route arrives twice in a row.
#[derive(Debug)]
pub struct MapView<S> {
    config: MapConfig,
    surface: S,
    last_fitted: Option<Vec<Coordinate>>,
}

impl<S: MapSurface> MapView<S> {
    /// Create a view and place the surface at the configured initial
    /// viewport.
    pub fn new(config: MapConfig, mut surface: S) -> Self {
        surface.set_view(config.center, config.zoom);
        Self {
            config,
            surface,
            last_fitted: None,
        }
    }

    /// React to a route change.
    ///
    /// An empty path is a no-op: the surface keeps whatever viewport it
    /// last had. A path identical to the previous one is also a no-op.
    /// Otherwise the pickup/drop markers and the polyline are redrawn and
    /// the viewport is fitted to the minimal bounds containing the whole
    /// path. Neither the route nor any view state is mutated here.
    pub fn route_changed(&mut self, start: Coordinate, end: Coordinate, path: &[Coordinate]) {
        if path.is_empty() {
            return;
        }
        if self.last_fitted.as_deref() == Some(path) {
            return;
        }
        let Some(bounds) = Bounds::from_path(path) else {
            return;
        };

        self.surface.place_markers(
            Marker {
                position: start,
                label: self.config.pickup_label.clone(),
            },
            Marker {
                position: end,
                label: self.config.drop_label.clone(),
            },
        );
        self.surface.draw_route(path);
        self.surface.fit_bounds(bounds);
        self.last_fitted = Some(path.to_vec());
    }

    /// The underlying surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The construction-time configuration.
    pub fn config(&self) -> &MapConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Surface that records every command it receives.
    #[derive(Debug, Default)]
    struct RecordingSurface {
        views: Vec<(Coordinate, u8)>,
        markers: Vec<(Marker, Marker)>,
        routes: Vec<Vec<Coordinate>>,
        fits: Vec<Bounds>,
    }

    impl MapSurface for RecordingSurface {
        fn set_view(&mut self, center: Coordinate, zoom: u8) {
            self.views.push((center, zoom));
        }

        fn place_markers(&mut self, pickup: Marker, drop: Marker) {
            self.markers.push((pickup, drop));
        }

        fn draw_route(&mut self, path: &[Coordinate]) {
            self.routes.push(path.to_vec());
        }

        fn fit_bounds(&mut self, bounds: Bounds) {
            self.fits.push(bounds);
        }
    }

    fn sample_path() -> Vec<Coordinate> {
        vec![
            Coordinate::new(40.7580, -73.9855),
            Coordinate::new(40.7700, -73.9750),
            Coordinate::new(40.7829, -73.9654),
        ]
    }

    #[test]
    fn construction_sets_initial_view() {
        let config = MapConfig::default().with_view(Coordinate::new(28.6139, 77.2090), 13);
        let view = MapView::new(config, RecordingSurface::default());

        assert_eq!(
            view.surface().views,
            vec![(Coordinate::new(28.6139, 77.2090), 13)]
        );
        assert!(view.surface().fits.is_empty());
    }

    #[test]
    fn empty_path_leaves_the_surface_alone() {
        let mut view = MapView::new(MapConfig::default(), RecordingSurface::default());
        view.route_changed(
            Coordinate::new(40.7580, -73.9855),
            Coordinate::new(40.7829, -73.9654),
            &[],
        );

        assert!(view.surface().markers.is_empty());
        assert!(view.surface().routes.is_empty());
        assert!(view.surface().fits.is_empty());
    }

    #[test]
    fn route_is_drawn_and_fitted_once() {
        let mut view = MapView::new(MapConfig::default(), RecordingSurface::default());
        let path = sample_path();
        view.route_changed(path[0], path[2], &path);

        assert_eq!(view.surface().routes, vec![path.clone()]);
        assert_eq!(view.surface().fits, vec![Bounds::from_path(&path).unwrap()]);

        let (pickup, drop) = &view.surface().markers[0];
        assert_eq!(pickup.position, path[0]);
        assert_eq!(pickup.label, "Pickup");
        assert_eq!(drop.position, path[2]);
        assert_eq!(drop.label, "Drop");
    }

    #[test]
    fn identical_path_is_not_refitted() {
        let mut view = MapView::new(MapConfig::default(), RecordingSurface::default());
        let path = sample_path();

        view.route_changed(path[0], path[2], &path);
        view.route_changed(path[0], path[2], &path);

        assert_eq!(view.surface().fits.len(), 1);
        assert_eq!(view.surface().routes.len(), 1);
    }

    #[test]
    fn changed_path_is_refitted() {
        let mut view = MapView::new(MapConfig::default(), RecordingSurface::default());
        let path = sample_path();
        view.route_changed(path[0], path[2], &path);

        let shorter = &path[..2];
        view.route_changed(path[0], path[1], shorter);

        assert_eq!(view.surface().fits.len(), 2);
        assert_eq!(
            view.surface().fits[1],
            Bounds::from_path(shorter).unwrap()
        );
    }

    #[test]
    fn custom_labels_reach_the_markers() {
        let config = MapConfig::default().with_labels("From here", "To there");
        let mut view = MapView::new(config, RecordingSurface::default());
        let path = sample_path();
        view.route_changed(path[0], path[2], &path);

        let (pickup, drop) = &view.surface().markers[0];
        assert_eq!(pickup.label, "From here");
        assert_eq!(drop.label, "To there");
    }
}
