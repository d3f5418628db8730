//! Natal Chart HTTP Server Binary
//!
//! This is the main entry point for the natal chart REST API server.
//! It initializes the geocoder and ephemeris backend, sets up the HTTP
//! router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Run with the deterministic local ephemeris (default)
//! cargo run --bin natal-server
//!
//! # Run with the Swiss Ephemeris backend
//! SE_EPHE_PATH=/var/lib/swisseph \
//!   cargo run --bin natal-server --no-default-features --features "swiss-ephe,http-server"
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 3001)
//! - `EPHEMERIS_BACKEND`: "swiss" or "local" (default: detected from SE_EPHE_PATH)
//! - `SE_EPHE_PATH`: Swiss Ephemeris data directory (swiss backend)
//! - `NOMINATIM_URL`: Geocoder base URL (default: the public OSM instance)
//! - `NOMINATIM_USER_AGENT`: User-Agent for geocoding requests
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use natal_rust::ephemeris::EphemerisFactory;
use natal_rust::geocode::NominatimGeocoder;
use natal_rust::http::{create_router, AppState};
use natal_rust::services::ChartService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting natal chart HTTP server");

    // Initialize collaborators once and inject them into the service
    let geocoder = NominatimGeocoder::from_env().map_err(|e| anyhow::anyhow!(e))?;
    let ephemeris = EphemerisFactory::from_env().map_err(|e| anyhow::anyhow!(e))?;
    info!("Ephemeris backend: {}", ephemeris.backend_name());

    let chart_service = ChartService::new(Arc::new(geocoder), ephemeris);

    // Create application state
    let state = AppState::new(Arc::new(chart_service));

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(3001);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
