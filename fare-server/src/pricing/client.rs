//! Pricing service HTTP client.
//!
//! One async method per remote operation; responses are decoded into wire
//! DTOs and converted to domain types before they leave this module.

use tracing::debug;

use crate::domain::{ComparisonRequest, ComparisonResult};

use super::convert::convert_comparison;
use super::error::PricingError;
use super::types::{ErrorBody, RideComparisonBody, RideRequestBody};

/// Default base URL for the pricing service.
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Environment variable overriding the base URL.
const BASE_URL_ENV: &str = "PRICING_BASE_URL";

/// Configuration for the pricing client.
#[derive(Debug, Clone)]
pub struct PricingConfig {
    /// Base URL for the service (no trailing slash)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl PricingConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Create a config from the environment, falling back to defaults.
    ///
    /// `PRICING_BASE_URL` is the only recognized variable.
    pub fn from_env() -> Self {
        let mut config = Self::new();
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            config.base_url = url;
        }
        config
    }

    /// Set a custom base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// HTTP client for the remote pricing service.
#[derive(Debug, Clone)]
pub struct PricingClient {
    http: reqwest::Client,
    base_url: String,
}

impl PricingClient {
    /// Create a client with the given configuration.
    pub fn new(config: PricingConfig) -> Result<Self, PricingError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Request a fare comparison for a validated pickup/drop pair.
    ///
    /// Issues exactly one `POST /api/calculate-ride`. A non-2xx status is
    /// returned as [`PricingError::Api`], carrying the structured `detail`
    /// when the body has one; transport and decode failures map to the
    /// other variants. Nothing is retried.
    pub async fn compare(
        &self,
        request: &ComparisonRequest,
    ) -> Result<ComparisonResult, PricingError> {
        let url = format!("{}/api/calculate-ride", self.base_url);
        debug!(
            pickup = request.pickup_location(),
            drop = request.drop_location(),
            "requesting fare comparison"
        );

        let body = RideRequestBody {
            pickup: request.pickup_location().to_string(),
            drop: request.drop_location().to_string(),
        };

        let response = self.http.post(&url).json(&body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .map(|e| e.detail);
            return Err(PricingError::Api {
                status: status.as_u16(),
                detail,
            });
        }

        let body = response.text().await?;

        let parsed: RideComparisonBody =
            serde_json::from_str(&body).map_err(|e| PricingError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        convert_comparison(&parsed).map_err(|e| PricingError::Invalid {
            message: e.to_string(),
        })
    }

    /// Probe the service's health endpoint.
    pub async fn health(&self) -> Result<(), PricingError> {
        let url = format!("{}/api/health", self.base_url);
        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(PricingError::Api {
                status: status.as_u16(),
                detail: None,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = PricingConfig::new();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn config_builder() {
        let config = PricingConfig::new()
            .with_base_url("http://localhost:9000")
            .with_timeout(5);

        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn client_creation() {
        let client = PricingClient::new(PricingConfig::new());
        assert!(client.is_ok());
    }

    // Calls against a live pricing service belong in integration tests
    // with a real base URL; lifecycle behavior is covered against the
    // mock client instead.
}
