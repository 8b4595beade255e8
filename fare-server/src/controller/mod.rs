//! Request-lifecycle state machine.
//!
//! Owns the single mutable [`ViewState`] and the ordering rules for
//! overlapping submissions: validation happens before any network activity,
//! each accepted submission carries a monotonically increasing sequence
//! number, and only the most recent submission's resolution is applied.

mod lifecycle;
mod state;


pub use lifecycle::{
    PendingRequest, RequestController, RequestSeq, Resolution, VALIDATION_MESSAGE,
};
pub use state::ViewState;
