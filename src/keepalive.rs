//! Keep-alive HTTP endpoint.
//!
//! A single-route server answering hosting-platform health probes so the
//! process is not put to sleep. It carries no application state.

use axum::{routing::get, Router};

use crate::error::AppError;

/// Serves the keep-alive endpoint on the given port. Blocks until the
/// listener fails.
pub async fn serve(port: u16) -> Result<(), AppError> {
    let app = Router::new().route("/", get(|| async { "Pearl Studios Bot Aktif!" }));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("Keep-alive server listening on port {}", port);

    axum::serve(listener, app).await?;
    Ok(())
}
