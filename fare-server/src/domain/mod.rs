//! Core domain types for the fare comparison viewer.

mod comparison;
mod coordinate;
mod estimate;
mod provider;

pub use comparison::{ComparisonRequest, ComparisonResult, EstimateTable, MissingLocation};
pub use coordinate::{Bounds, Coordinate};
pub use estimate::{RideMetrics, VehicleEstimate};
pub use provider::{Provider, UnknownProvider};
