//! Remote pricing service integration.
//!
//! The pricing engine itself (geocoding, routing, surge, fares) lives in a
//! separate service; this module owns the HTTP contract with it: request
//! and response DTOs, the client, and conversion into domain types.

mod client;
mod convert;
mod error;
pub mod mock;
mod types;

pub use client::{PricingClient, PricingConfig};
pub use convert::{ConversionError, convert_comparison};
pub use error::{FALLBACK_MESSAGE, PricingError};
pub use mock::MockPricingClient;
pub use types::{ErrorBody, EstimateBody, MetricsBody, RideComparisonBody, RideRequestBody};
