//! View state for the comparison lifecycle.

use crate::domain::ComparisonResult;

/// The lifecycle state of the one comparison the viewer shows.
///
/// Exactly one variant is active at a time. Transitions are owned by
/// [`RequestController`](super::RequestController); everything else reads
/// the state and never writes it.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState {
    /// Nothing submitted yet.
    #[default]
    Idle,

    /// A submission is in flight.
    Loading,

    /// The most recent submission resolved with a result.
    Success(ComparisonResult),

    /// The most recent submission failed; the message is user-facing.
    Error(String),
}

impl ViewState {
    /// Whether a submission is currently in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    /// The comparison result, when in the success state.
    pub fn result(&self) -> Option<&ComparisonResult> {
        match self {
            ViewState::Success(result) => Some(result),
            _ => None,
        }
    }

    /// The user-facing error message, when in the error state.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// A short machine-readable tag for the active variant.
    pub fn label(&self) -> &'static str {
        match self {
            ViewState::Idle => "idle",
            ViewState::Loading => "loading",
            ViewState::Success(_) => "success",
            ViewState::Error(_) => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let state = ViewState::default();
        assert_eq!(state, ViewState::Idle);
        assert_eq!(state.label(), "idle");
        assert!(!state.is_loading());
        assert!(state.result().is_none());
        assert!(state.error_message().is_none());
    }

    #[test]
    fn error_exposes_message() {
        let state = ViewState::Error("boom".to_string());
        assert_eq!(state.error_message(), Some("boom"));
        assert_eq!(state.label(), "error");
        assert!(state.result().is_none());
    }

    #[test]
    fn loading_flag() {
        assert!(ViewState::Loading.is_loading());
        assert_eq!(ViewState::Loading.label(), "loading");
    }
}
