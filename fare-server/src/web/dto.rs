//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::controller::ViewState;
use crate::domain::ComparisonResult;

/// Form body for `POST /compare`.
#[derive(Debug, Deserialize)]
pub struct CompareForm {
    /// Raw pickup location text
    pub pickup: String,

    /// Raw drop location text
    pub drop: String,
}

/// JSON projection of the current view state.
#[derive(Debug, Serialize)]
pub struct StateResponse {
    /// "idle", "loading", "success" or "error"
    pub status: &'static str,

    /// User-facing message, in the error state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// The comparison, in the success state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ComparisonResult>,
}

impl StateResponse {
    /// Project a view state.
    pub fn from_view(state: &ViewState) -> Self {
        Self {
            status: state.label(),
            error: state.error_message().map(str::to_string),
            result: state.result().cloned(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
