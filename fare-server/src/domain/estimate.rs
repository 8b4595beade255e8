//! Fare estimates and ride metrics.

use chrono::NaiveTime;
use serde::Serialize;

/// A single provider/vehicle-class quote.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VehicleEstimate {
    /// Fare in rupees.
    pub price: f64,

    /// Estimated pickup wait in minutes.
    pub eta_minutes: u32,

    /// Likelihood of actually finding this ride, 0-100.
    pub probability_percent: u8,
}

/// The demand/supply context the pricing service computed alongside the
/// quotes. Only ever rendered together with the estimate table from the
/// same response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RideMetrics {
    /// Route length in kilometres.
    pub distance_km: f64,

    /// Service-side clock time the comparison was computed at.
    pub system_time: NaiveTime,

    /// Demand-driven price scaling factor.
    pub surge_multiplier: f64,

    /// Simulated rider demand in the area.
    pub demand: u32,

    /// Simulated driver supply in the area.
    pub supply: u32,

    /// Time-of-day flat fare adjustment, in rupees.
    pub time_increment: f64,
}
