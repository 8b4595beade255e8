//! Pricing client error types.

use std::fmt;

/// Generic user-facing message when the pricing service could not be
/// reached or its response could not be used.
pub const FALLBACK_MESSAGE: &str = "Could not reach the pricing service. Please try again.";

/// Errors from the pricing HTTP client.
#[derive(Debug)]
pub enum PricingError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization of a success body failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// Service returned an error status code; `detail` carries its
    /// structured message when one was sent
    Api { status: u16, detail: Option<String> },

    /// Response parsed but failed domain validation
    Invalid { message: String },
}

impl PricingError {
    /// The message to surface in the view for this failure.
    ///
    /// A structured `detail` from the service is shown verbatim; every
    /// other failure collapses to [`FALLBACK_MESSAGE`].
    pub fn user_message(&self) -> String {
        match self {
            PricingError::Api {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => FALLBACK_MESSAGE.to_string(),
        }
    }
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::Http(e) => write!(f, "HTTP error: {e}"),
            PricingError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            PricingError::Api { status, detail } => match detail {
                Some(detail) => write!(f, "service error {status}: {detail}"),
                None => write!(f, "service error {status}"),
            },
            PricingError::Invalid { message } => write!(f, "invalid response: {message}"),
        }
    }
}

impl std::error::Error for PricingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PricingError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for PricingError {
    fn from(err: reqwest::Error) -> Self {
        PricingError::Http(err)
    }
}
