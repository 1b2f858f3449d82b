pub(crate) mod handlers;
pub mod mcp_service;
pub mod routes;

use crate::config::HttpConfig;
use crate::mcp::QueryServer;
use crate::shutdown::shutdown_signal;
use anyhow::{Context, Result};
use axum::Router;
use tokio_util::sync::CancellationToken;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

/// Serve MCP over Streamable HTTP at `/mcp` until a shutdown signal arrives
pub async fn start_server(config: &HttpConfig, server: QueryServer) -> Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let ct = CancellationToken::new();

    let app = build_router(server, ct.child_token());

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind HTTP listener on {}", addr))?;

    info!("HTTP server listening on {}", addr);
    info!("Health check: http://{}/health", addr);
    info!("Server info: http://{}/info", addr);
    info!("MCP endpoint: http://{}/mcp", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            ct.cancel();
        })
        .await?;

    Ok(())
}

/// Build the HTTP application: health routes plus the MCP endpoint
pub fn build_router(server: QueryServer, ct: CancellationToken) -> Router {
    let mcp_service = mcp_service::create_mcp_service(server, ct);

    Router::new()
        .merge(routes::health_routes())
        .nest_service("/mcp", mcp_service)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
