use anyhow::Result;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use sensormetrics_api::{build_router, AppState, ApiConfig};
use sensormetrics_core::store::MemoryReadingStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Arc::new(ApiConfig::load()?);
    info!("Loaded configuration: {:?}", config);

    // Initialize the reading store
    let store = Arc::new(MemoryReadingStore::new());

    let state = AppState {
        store,
        config: config.clone(),
    };

    let app = build_router(state);

    // Start server
    let listener = TcpListener::bind(&config.bind_address).await?;
    let addr = listener.local_addr()?;
    info!("Sensor Metrics API listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
