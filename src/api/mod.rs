//! HTTP boundary for the lookup gateway.
//!
//! - `POST /lookup` (and the `/api/whois` alias) - domain or contact lookup
//! - `GET /health` - liveness probe

pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;

use tokio_util::sync::CancellationToken;

/// Binds the listener and serves until `shutdown` is cancelled.
pub async fn serve(state: AppState, bind: &str) -> Result<(), anyhow::Error> {
    let shutdown = state.shutdown.clone();
    let app = create_router().with_state(state);

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind lookup server to {}: {}", bind, e))?;

    tracing::info!("Lookup server listening on http://{}/", bind);
    tracing::info!("  - Lookup: POST http://{}/lookup", bind);
    tracing::info!("  - Health: GET http://{}/health", bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_cancel(shutdown))
        .await
        .map_err(|e| anyhow::anyhow!("Lookup server error: {}", e))?;

    Ok(())
}

async fn wait_for_cancel(token: CancellationToken) {
    token.cancelled().await;
    tracing::info!("Shutting down lookup server");
}
