//! The submission lifecycle controller.

use tracing::debug;

use crate::domain::{ComparisonRequest, ComparisonResult, MissingLocation};
use crate::pricing::PricingError;

use super::state::ViewState;

/// Fixed user-facing message for a submission with missing input.
pub const VALIDATION_MESSAGE: &str = "Please enter both locations.";

/// Monotonically increasing identifier for an accepted submission.
///
/// Values are only ever minted by [`RequestController::submit`], so
/// comparing two of them orders the submissions they belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestSeq(u64);

/// An accepted submission the caller must settle with exactly one
/// outbound pricing call, passing the outcome back to
/// [`RequestController::resolve`] together with the sequence number.
#[derive(Debug, Clone)]
pub struct PendingRequest {
    pub seq: RequestSeq,
    pub request: ComparisonRequest,
}

/// Whether a resolution was applied to the view state or discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The resolution belonged to the newest submission and was applied.
    Applied,

    /// A newer submission superseded this one; the outcome was dropped.
    Stale,
}

/// Turns user intent into at most one applied outcome per submission.
///
/// The controller validates input before any network activity, hands the
/// caller a [`PendingRequest`] for the single outbound call, and applies
/// resolutions under a last-request-wins rule: a response for anything but
/// the newest accepted submission is discarded silently. All methods take
/// `&mut self`; interleaving, not parallelism, is the concurrency model.
#[derive(Debug, Default)]
pub struct RequestController {
    state: ViewState,
    next_seq: u64,
    in_flight: Option<RequestSeq>,
}

impl RequestController {
    /// Create a controller in the idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current view state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Whether a submission is awaiting resolution.
    ///
    /// Triggers (e.g. the compare button) use this to disable themselves.
    /// It is advisory: a submit that arrives anyway supersedes the
    /// in-flight attempt rather than racing it.
    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Submit a pickup/drop pair.
    ///
    /// Empty or whitespace-only input fails validation: the state becomes
    /// [`ViewState::Error`] with [`VALIDATION_MESSAGE`], no network call is
    /// to be made, and any in-flight attempt is left to resolve normally.
    ///
    /// Valid input transitions the state to [`ViewState::Loading`],
    /// discards any previous result or error, and returns the
    /// [`PendingRequest`] the caller must issue exactly one call for. A
    /// submission made while another is in flight supersedes it; the older
    /// attempt's eventual resolution will be reported as stale.
    pub fn submit(&mut self, pickup: &str, drop: &str) -> Option<PendingRequest> {
        let request = match ComparisonRequest::new(pickup, drop) {
            Ok(request) => request,
            Err(MissingLocation) => {
                self.state = ViewState::Error(VALIDATION_MESSAGE.to_string());
                return None;
            }
        };

        self.next_seq += 1;
        let seq = RequestSeq(self.next_seq);
        self.in_flight = Some(seq);
        self.state = ViewState::Loading;

        Some(PendingRequest { seq, request })
    }

    /// Settle a submission with the outcome of its pricing call.
    ///
    /// Applies only when `seq` identifies the newest accepted submission;
    /// anything else is discarded without touching the state, so a slow
    /// early response can never clobber a faster later one. On success the
    /// state becomes [`ViewState::Success`]; on failure it becomes
    /// [`ViewState::Error`] with the service's structured detail when one
    /// was sent, or the generic fallback otherwise. Either way the
    /// controller is immediately ready for the next submission.
    pub fn resolve(
        &mut self,
        seq: RequestSeq,
        outcome: Result<ComparisonResult, PricingError>,
    ) -> Resolution {
        if self.in_flight != Some(seq) {
            debug!(seq = seq.0, "discarding stale pricing response");
            return Resolution::Stale;
        }

        self.in_flight = None;
        self.state = match outcome {
            Ok(result) => ViewState::Success(result),
            Err(e) => ViewState::Error(e.user_message()),
        };

        Resolution::Applied
    }
}
