//! Pricing service request/response DTOs.
//!
//! These map directly to the JSON the pricing service exchanges. Field
//! aliases absorb the two historical response spellings (`fares` vs
//! `estimates`, snake_case vs camelCase estimate fields) so either shape
//! deserializes into the same types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/calculate-ride`.
#[derive(Debug, Clone, Serialize)]
pub struct RideRequestBody {
    pub pickup: String,
    pub drop: String,
}

/// Success body of a ride calculation.
#[derive(Debug, Clone, Deserialize)]
pub struct RideComparisonBody {
    /// Distance, surge and demand/supply context.
    pub metrics: MetricsBody,

    /// Provider name -> vehicle class -> quote.
    #[serde(alias = "estimates")]
    pub fares: HashMap<String, HashMap<String, EstimateBody>>,

    /// Route polyline as `[lat, lon]` pairs. Omitted when no route
    /// could be drawn.
    #[serde(default)]
    pub path: Vec<[f64; 2]>,

    /// Geocoded pickup as `[lat, lon]`.
    pub start_coords: [f64; 2],

    /// Geocoded drop as `[lat, lon]`.
    pub end_coords: [f64; 2],
}

/// Ride metrics as sent on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsBody {
    pub distance_km: f64,

    pub demand: u32,

    pub supply: u32,

    #[serde(alias = "surge_multiplier")]
    pub surge: f64,

    /// Service clock, "HH:MM:SS".
    pub system_time: String,

    /// Time-of-day flat fare adjustment. Older responses omit it.
    #[serde(default)]
    pub time_increment: f64,
}

/// A single quote as sent on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct EstimateBody {
    pub price: f64,

    #[serde(alias = "etaMinutes", alias = "eta")]
    pub eta_minutes: u32,

    #[serde(alias = "probabilityPercent", alias = "probability")]
    pub probability_percent: f64,
}

/// Structured error body (`detail` in the FastAPI style).
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}
