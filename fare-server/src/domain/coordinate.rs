//! Geographic primitives shared by the route, map, and wire layers.

use serde::{Deserialize, Serialize};

/// A WGS84 latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    /// Create a coordinate from latitude and longitude in degrees.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// An axis-aligned bounding box over coordinates.
///
/// `south <= north` and `west <= east` hold for any value built with
/// [`Bounds::from_path`]. Routes short enough to care about here never
/// cross the antimeridian, so no wraparound handling is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    /// The minimal bounds containing every point in `path`.
    ///
    /// Returns `None` for an empty path: there is no viewport that fits
    /// nothing, and callers treat that case as "leave the map alone".
    pub fn from_path(path: &[Coordinate]) -> Option<Self> {
        let first = path.first()?;
        let mut bounds = Self {
            south: first.lat,
            west: first.lon,
            north: first.lat,
            east: first.lon,
        };
        for c in &path[1..] {
            bounds.south = bounds.south.min(c.lat);
            bounds.west = bounds.west.min(c.lon);
            bounds.north = bounds.north.max(c.lat);
            bounds.east = bounds.east.max(c.lon);
        }
        Some(bounds)
    }

    /// Whether `c` lies within the bounds (edges inclusive).
    pub fn contains(&self, c: Coordinate) -> bool {
        c.lat >= self.south && c.lat <= self.north && c.lon >= self.west && c.lon <= self.east
    }

    /// The midpoint of the bounds.
    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_path_has_no_bounds() {
        assert_eq!(Bounds::from_path(&[]), None);
    }

    #[test]
    fn single_point_is_degenerate() {
        let c = Coordinate::new(40.7580, -73.9855);
        let bounds = Bounds::from_path(&[c]).unwrap();

        assert_eq!(bounds.south, c.lat);
        assert_eq!(bounds.north, c.lat);
        assert_eq!(bounds.west, c.lon);
        assert_eq!(bounds.east, c.lon);
        assert!(bounds.contains(c));
    }

    #[test]
    fn bounds_span_all_points() {
        let path = [
            Coordinate::new(40.7580, -73.9855),
            Coordinate::new(40.7829, -73.9654),
            Coordinate::new(40.7484, -73.9857),
        ];
        let bounds = Bounds::from_path(&path).unwrap();

        assert_eq!(bounds.south, 40.7484);
        assert_eq!(bounds.north, 40.7829);
        assert_eq!(bounds.west, -73.9857);
        assert_eq!(bounds.east, -73.9654);
    }

    #[test]
    fn center_is_midpoint() {
        let bounds = Bounds {
            south: 10.0,
            west: 20.0,
            north: 30.0,
            east: 40.0,
        };
        let center = bounds.center();

        assert_eq!(center.lat, 20.0);
        assert_eq!(center.lon, 30.0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn path_strategy() -> impl Strategy<Value = Vec<Coordinate>> {
        prop::collection::vec(
            (-90.0f64..90.0, -180.0f64..180.0).prop_map(|(lat, lon)| Coordinate::new(lat, lon)),
            1..50,
        )
    }

    proptest! {
        #[test]
        fn bounds_contain_every_point(path in path_strategy()) {
            let bounds = Bounds::from_path(&path).unwrap();
            for &c in &path {
                prop_assert!(bounds.contains(c), "{c:?} escapes {bounds:?}");
            }
        }

        #[test]
        fn bounds_edges_are_attained(path in path_strategy()) {
            let bounds = Bounds::from_path(&path).unwrap();

            prop_assert!(path.iter().any(|c| c.lat == bounds.south));
            prop_assert!(path.iter().any(|c| c.lat == bounds.north));
            prop_assert!(path.iter().any(|c| c.lon == bounds.west));
            prop_assert!(path.iter().any(|c| c.lon == bounds.east));
        }
    }
}
