//! Tickdown - an in-memory countdown timer HTTP service
//!
//! This is the main entry point for the tickdown server.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use tickdown::{api::create_router, config::Config, state::AppState, utils::shutdown_signal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(format!("tickdown={},tower_http=info", config.log_level()))
        .init();

    info!("Starting tickdown server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}", config.host, config.port);

    // Create application state
    let state = Arc::new(AppState::new());

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET    /api/timers     - List timers (?active=true/false)");
    info!("  GET    /api/timers/:id - Get timer with remaining time");
    info!("  POST   /api/timers     - Create timer");
    info!("  PUT    /api/timers/:id - Update timer (restarts countdown)");
    info!("  DELETE /api/timers/:id - Delete timer");
    info!("  DELETE /api/timers     - Delete all timers");
    info!("  GET    /api            - API info");
    info!("  GET    /health         - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
