//! Conversion from pricing DTOs to domain types.
//!
//! The wire shape is lenient (aliased field names, free-form provider
//! keys); this module narrows it into validated domain values and rejects
//! responses the viewer could not render.

use std::collections::BTreeMap;

use chrono::NaiveTime;
use tracing::warn;

use crate::domain::{
    ComparisonResult, Coordinate, EstimateTable, Provider, RideMetrics, VehicleEstimate,
};

use super::types::{EstimateBody, MetricsBody, RideComparisonBody};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConversionError {
    /// The system time string was not "HH:MM:SS"
    #[error("invalid system time: {0}")]
    InvalidSystemTime(String),

    /// Every provider key was unknown, or the table was empty
    #[error("no usable provider estimates in response")]
    NoEstimates,
}

/// Convert a ride calculation body into a [`ComparisonResult`].
///
/// Unknown provider keys are skipped with a warning rather than failing
/// the whole response; a response with no usable providers at all is an
/// error, because metrics must never be rendered without estimates.
pub fn convert_comparison(body: &RideComparisonBody) -> Result<ComparisonResult, ConversionError> {
    let metrics = convert_metrics(&body.metrics)?;

    let mut estimates: EstimateTable = BTreeMap::new();
    for (name, classes) in &body.fares {
        let provider = match Provider::parse(name) {
            Ok(provider) => provider,
            Err(_) => {
                warn!(provider = %name, "skipping unknown provider in pricing response");
                continue;
            }
        };

        let table: BTreeMap<String, VehicleEstimate> = classes
            .iter()
            .map(|(class, estimate)| (class.clone(), convert_estimate(estimate)))
            .collect();

        if !table.is_empty() {
            estimates.insert(provider, table);
        }
    }

    if estimates.is_empty() {
        return Err(ConversionError::NoEstimates);
    }

    Ok(ComparisonResult {
        metrics,
        estimates,
        route_start: coordinate(body.start_coords),
        route_end: coordinate(body.end_coords),
        route_path: body.path.iter().copied().map(coordinate).collect(),
    })
}

fn coordinate([lat, lon]: [f64; 2]) -> Coordinate {
    Coordinate::new(lat, lon)
}

fn convert_metrics(metrics: &MetricsBody) -> Result<RideMetrics, ConversionError> {
    let system_time = NaiveTime::parse_from_str(&metrics.system_time, "%H:%M:%S")
        .map_err(|_| ConversionError::InvalidSystemTime(metrics.system_time.clone()))?;

    Ok(RideMetrics {
        distance_km: metrics.distance_km,
        system_time,
        surge_multiplier: metrics.surge,
        demand: metrics.demand,
        supply: metrics.supply,
        time_increment: metrics.time_increment,
    })
}

fn convert_estimate(estimate: &EstimateBody) -> VehicleEstimate {
    VehicleEstimate {
        price: estimate.price,
        eta_minutes: estimate.eta_minutes,
        probability_percent: estimate.probability_percent.clamp(0.0, 100.0).round() as u8,
    }
}
