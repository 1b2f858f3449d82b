use super::QueryServer;
use crate::shutdown::shutdown_signal;
use anyhow::Result;
use rmcp::transport::stdio;
use rmcp::ServiceExt;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Serve MCP over stdin/stdout until the client disconnects or a signal arrives
pub async fn serve_stdio(server: QueryServer) -> Result<()> {
    info!("Starting MCP server with stdio transport");

    let ct = CancellationToken::new();
    let service = server
        .serve_with_ct(stdio(), ct.clone())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to initialize MCP stdio service: {:?}", e))?;

    tokio::spawn(async move {
        shutdown_signal().await;
        ct.cancel();
    });

    let reason = service.waiting().await?;
    info!("MCP stdio service stopped: {:?}", reason);

    Ok(())
}
