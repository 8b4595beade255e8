//! Mock pricing client for testing without a live pricing service.
//!
//! Serves canned outcomes keyed by the exact pickup/drop pair, through the
//! same method signature as the real client.

use std::collections::HashMap;

use crate::domain::{ComparisonRequest, ComparisonResult};

use super::error::PricingError;

/// Canned outcome for one pickup/drop pair.
#[derive(Debug, Clone)]
enum Canned {
    Success(ComparisonResult),
    Failure { status: u16, detail: Option<String> },
}

/// Mock pricing client.
///
/// Pairs without a canned outcome behave like an unreachable service, so
/// tests for the generic fallback path need no setup at all.
#[derive(Debug, Clone, Default)]
pub struct MockPricingClient {
    responses: HashMap<(String, String), Canned>,
}

impl MockPricingClient {
    /// Create an empty mock; every call fails as unreachable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `result` for the given pickup/drop pair.
    pub fn with_success(mut self, pickup: &str, drop: &str, result: ComparisonResult) -> Self {
        self.responses.insert(
            (pickup.to_string(), drop.to_string()),
            Canned::Success(result),
        );
        self
    }

    /// Fail the given pickup/drop pair with a service error.
    pub fn with_failure(mut self, pickup: &str, drop: &str, status: u16, detail: Option<&str>) -> Self {
        self.responses.insert(
            (pickup.to_string(), drop.to_string()),
            Canned::Failure {
                status,
                detail: detail.map(str::to_string),
            },
        );
        self
    }

    /// Mimics `PricingClient::compare`.
    pub async fn compare(
        &self,
        request: &ComparisonRequest,
    ) -> Result<ComparisonResult, PricingError> {
        let key = (
            request.pickup_location().to_string(),
            request.drop_location().to_string(),
        );

        match self.responses.get(&key) {
            Some(Canned::Success(result)) => Ok(result.clone()),
            Some(Canned::Failure { status, detail }) => Err(PricingError::Api {
                status: *status,
                detail: detail.clone(),
            }),
            // Status 0 marks a synthetic transport-level failure.
            None => Err(PricingError::Api {
                status: 0,
                detail: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::FALLBACK_MESSAGE;

    fn request(pickup: &str, drop: &str) -> ComparisonRequest {
        ComparisonRequest::new(pickup, drop).unwrap()
    }

    #[tokio::test]
    async fn unknown_pair_is_unreachable() {
        let mock = MockPricingClient::new();
        let err = mock.compare(&request("A", "B")).await.unwrap_err();

        assert_eq!(err.user_message(), FALLBACK_MESSAGE);
    }

    #[tokio::test]
    async fn canned_failure_carries_detail() {
        let mock = MockPricingClient::new().with_failure("A", "B", 400, Some("Location not found"));
        let err = mock.compare(&request("A", "B")).await.unwrap_err();

        assert_eq!(err.user_message(), "Location not found");
    }
}
