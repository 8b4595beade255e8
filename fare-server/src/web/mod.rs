//! Web layer for the fare comparison viewer.
//!
//! Serves the single-page viewer, the comparison endpoint, and a JSON
//! projection of the current view state.

mod dto;
mod routes;
mod state;
pub mod templates;
mod viewport;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
pub use templates::*;
pub use viewport::{MarkerModel, ScriptedSurface, ViewportModel};
