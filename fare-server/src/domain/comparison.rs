//! Comparison request and result types.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{Coordinate, Provider, RideMetrics, VehicleEstimate};

/// Quotes by provider, then by vehicle-class name (e.g. "Bike", "Auto").
pub type EstimateTable = BTreeMap<Provider, BTreeMap<String, VehicleEstimate>>;

/// Error returned when a submission is missing its pickup or drop location.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("pickup and drop locations are both required")]
pub struct MissingLocation;

/// A validated pickup/drop pair.
///
/// Both locations are trimmed and non-empty by construction. The value is
/// ephemeral: created on submit, discarded once the call settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRequest {
    pickup: String,
    drop: String,
}

impl ComparisonRequest {
    /// Build a request from raw user input.
    ///
    /// Leading/trailing whitespace is stripped; input that is empty after
    /// trimming is rejected, on either side.
    pub fn new(pickup: &str, drop: &str) -> Result<Self, MissingLocation> {
        let pickup = pickup.trim();
        let drop = drop.trim();

        if pickup.is_empty() || drop.is_empty() {
            return Err(MissingLocation);
        }

        Ok(Self {
            pickup: pickup.to_string(),
            drop: drop.to_string(),
        })
    }

    /// The trimmed pickup location.
    pub fn pickup_location(&self) -> &str {
        &self.pickup
    }

    /// The trimmed drop location.
    pub fn drop_location(&self) -> &str {
        &self.drop
    }
}

/// The single immutable value a successful comparison produces.
///
/// Metrics and estimates originate from one response and are never updated
/// separately; consumers read the whole value or nothing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    /// Distance, surge and demand/supply context.
    pub metrics: RideMetrics,

    /// Per-provider, per-vehicle-class quotes.
    pub estimates: EstimateTable,

    /// Geocoded pickup point.
    pub route_start: Coordinate,

    /// Geocoded drop point.
    pub route_end: Coordinate,

    /// Route polyline between pickup and drop. May be empty when the
    /// service found no drawable route.
    pub route_path: Vec<Coordinate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_trims_input() {
        let request = ComparisonRequest::new("  Times Square ", "\tCentral Park\n").unwrap();
        assert_eq!(request.pickup_location(), "Times Square");
        assert_eq!(request.drop_location(), "Central Park");
    }

    #[test]
    fn empty_pickup_is_rejected() {
        assert_eq!(
            ComparisonRequest::new("", "Central Park"),
            Err(MissingLocation)
        );
    }

    #[test]
    fn whitespace_only_drop_is_rejected() {
        assert_eq!(
            ComparisonRequest::new("Times Square", "   "),
            Err(MissingLocation)
        );
    }

    #[test]
    fn both_missing_is_rejected() {
        assert_eq!(ComparisonRequest::new(" ", ""), Err(MissingLocation));
    }
}
