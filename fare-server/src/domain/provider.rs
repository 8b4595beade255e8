//! Ride provider identifiers.

use std::fmt;

use serde::Serialize;

/// Error returned when parsing an unrecognized provider name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown provider: {0}")]
pub struct UnknownProvider(pub String);

/// A ride-hailing platform whose estimates are compared side by side.
///
/// The set is closed: the pricing service quotes exactly these platforms,
/// and the renderer iterates them in the fixed [`Provider::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Rapido,
    Ola,
    Uber,
}

impl Provider {
    /// Display order, cheapest platform first.
    pub const ALL: [Provider; 3] = [Provider::Rapido, Provider::Ola, Provider::Uber];

    /// Parse a provider from its wire identifier (case-insensitive).
    pub fn parse(s: &str) -> Result<Self, UnknownProvider> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rapido" => Ok(Provider::Rapido),
            "ola" => Ok(Provider::Ola),
            "uber" => Ok(Provider::Uber),
            _ => Err(UnknownProvider(s.to_string())),
        }
    }

    /// The lowercase wire identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Rapido => "rapido",
            Provider::Ola => "ola",
            Provider::Uber => "uber",
        }
    }

    /// The capitalized name shown in the comparison.
    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::Rapido => "Rapido",
            Provider::Ola => "Ola",
            Provider::Uber => "Uber",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
