//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::controller::RequestController;
use crate::map::MapView;
use crate::pricing::PricingClient;

use super::viewport::ScriptedSurface;

/// Shared application state.
///
/// The viewer is single-session: one controller, one map view, mutated
/// only while their locks are held. Locks are never held across the
/// outbound pricing call, so a later submission can supersede an
/// outstanding one.
#[derive(Clone)]
pub struct AppState {
    /// Request lifecycle state machine
    pub controller: Arc<Mutex<RequestController>>,

    /// Map synchronizer writing to the page-facing surface
    pub map: Arc<Mutex<MapView<ScriptedSurface>>>,

    /// Pricing service client
    pub pricing: Arc<PricingClient>,
}

impl AppState {
    /// Create a new app state with an idle controller.
    pub fn new(pricing: PricingClient, map: MapView<ScriptedSurface>) -> Self {
        Self {
            controller: Arc::new(Mutex::new(RequestController::new())),
            map: Arc::new(Mutex::new(map)),
            pricing: Arc::new(pricing),
        }
    }
}
