use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use apod_bot::config::Config;
use apod_bot::logging;
use apod_bot::server::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Arc::new(Config::from_env()?);

    // Initialize logging
    let _logging_guard = logging::init_logging(&config)?;

    info!("APOD bot starting...");
    for name in config.missing_secrets() {
        warn!("{} is not set; posting will fail until it is configured", name);
    }

    // Build the application routes
    let state = Arc::new(AppState::new(config.clone()));
    let app = server::router(state);

    // Bind to address
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server running on port {}", config.port);
    info!(
        "Bot configured for channel: {}",
        config.channel_id.as_deref().unwrap_or("<not configured>")
    );

    // Start the server
    axum::serve(listener, app).await?;

    Ok(())
}
