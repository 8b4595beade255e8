use std::net::SocketAddr;

use fare_server::map::{MapConfig, MapView};
use fare_server::pricing::{PricingClient, PricingConfig};
use fare_server::web::{AppState, ScriptedSurface, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Pricing service location comes from PRICING_BASE_URL, if set
    let config = PricingConfig::from_env();
    let base_url = config.base_url.clone();
    let pricing = PricingClient::new(config).expect("Failed to create pricing client");

    // Warn early if the service is down; submissions will surface errors.
    if let Err(e) = pricing.health().await {
        eprintln!("Warning: pricing service at {base_url} is unreachable: {e}");
    }

    // Map configuration is explicit; labels and the initial viewport are
    // construction arguments, not global renderer state.
    let map = MapView::new(MapConfig::default(), ScriptedSurface::new());

    let state = AppState::new(pricing, map);
    let app = create_router(state, "static");

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Ride Fare Comparison listening on http://{addr}");
    println!();
    println!("Open http://{addr} in your browser for the web interface.");
    println!();
    println!("Endpoints:");
    println!("  GET  /health     - Health check");
    println!("  GET  /api/state  - Current view state (JSON)");
    println!("  POST /compare    - Submit a comparison");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
