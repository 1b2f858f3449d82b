// Streamable HTTP service factory for the MCP endpoint

use crate::mcp::QueryServer;
use rmcp::transport::streamable_http_server::session::local::LocalSessionManager;
use rmcp::transport::streamable_http_server::{StreamableHttpServerConfig, StreamableHttpService};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Create a stateless StreamableHttpService serving the query tool.
///
/// Every request gets a fresh handler sharing the same adapter, so request IDs
/// from different clients never collide.
pub fn create_mcp_service(
    server: QueryServer,
    cancellation_token: CancellationToken,
) -> StreamableHttpService<QueryServer, LocalSessionManager> {
    let service_factory = move || Ok(server.clone());

    StreamableHttpService::new(
        service_factory,
        Arc::new(LocalSessionManager::default()),
        StreamableHttpServerConfig {
            stateful_mode: false,
            cancellation_token,
            ..Default::default()
        },
    )
}
