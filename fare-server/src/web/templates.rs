//! Askama templates and view models for the fare viewer.

use askama::Template;

use crate::controller::ViewState;
use crate::domain::{ComparisonResult, Provider, RideMetrics, VehicleEstimate};

/// The single page of the viewer.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub view: PageView,
}

/// Everything the page template needs, pre-formatted.
#[derive(Debug, Clone)]
pub struct PageView {
    /// "idle", "loading", "success" or "error"
    pub status: &'static str,
    pub error: Option<String>,
    pub metrics: Option<MetricsView>,
    pub providers: Vec<ProviderView>,
    /// JSON snapshot of the map surface, embedded for the page script.
    pub map_json: String,
}

impl PageView {
    /// Build the page view from the current state and map snapshot.
    pub fn from_view(state: &ViewState, map_json: String) -> Self {
        let (metrics, providers) = match state.result() {
            Some(result) => (
                Some(MetricsView::from_metrics(&result.metrics)),
                ProviderView::from_result(result),
            ),
            None => (None, Vec::new()),
        };

        Self {
            status: state.label(),
            error: state.error_message().map(str::to_string),
            metrics,
            providers,
            map_json,
        }
    }
}

/// Formatted ride metrics.
#[derive(Debug, Clone)]
pub struct MetricsView {
    pub distance: String,
    pub demand: u32,
    pub supply: u32,
    pub surge: String,
    pub system_time: String,
}

impl MetricsView {
    fn from_metrics(metrics: &RideMetrics) -> Self {
        Self {
            distance: format!("{} km", metrics.distance_km),
            demand: metrics.demand,
            supply: metrics.supply,
            surge: format!("{}x", metrics.surge_multiplier),
            system_time: metrics.system_time.format("%H:%M:%S").to_string(),
        }
    }
}

/// One provider's card.
#[derive(Debug, Clone)]
pub struct ProviderView {
    pub name: &'static str,
    pub rows: Vec<EstimateRow>,
}

impl ProviderView {
    /// One card per provider, in the fixed display order, skipping
    /// providers the response had no quotes for.
    fn from_result(result: &ComparisonResult) -> Vec<Self> {
        Provider::ALL
            .iter()
            .filter_map(|provider| {
                let classes = result.estimates.get(provider)?;
                Some(Self {
                    name: provider.display_name(),
                    rows: classes
                        .iter()
                        .map(|(name, estimate)| EstimateRow::new(name, estimate))
                        .collect(),
                })
            })
            .collect()
    }
}

/// One vehicle-class row, fully formatted.
#[derive(Debug, Clone)]
pub struct EstimateRow {
    pub name: String,
    pub price: String,
    pub eta: String,
    pub chance: String,
}

impl EstimateRow {
    fn new(name: &str, estimate: &VehicleEstimate) -> Self {
        Self {
            name: name.to_string(),
            price: format!("\u{20b9}{}", format_price(estimate.price)),
            eta: format!("{} mins", estimate.eta_minutes),
            chance: format!("{}% Chance", estimate.probability_percent),
        }
    }
}

/// "80" for whole rupees, "82.50" otherwise.
fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{}", price as i64)
    } else {
        format!("{price:.2}")
    }
}
