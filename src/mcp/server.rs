// MCP server handler that exposes the tool adapter over any rmcp transport

use rmcp::model::{
    CallToolRequestParams, CallToolResult, Content, Implementation, ListToolsResult,
    PaginatedRequestParams, ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler};
use std::sync::Arc;
use tracing::debug;

use crate::tool::{ToolAdapter, ToolCallRequest, ToolContent};

/// Name reported to clients during the MCP handshake
pub const SERVER_NAME: &str = "pacuare-mcp-server";

/// rmcp handler translating protocol requests into [`ToolAdapter`] calls
#[derive(Clone)]
pub struct QueryServer {
    adapter: Arc<ToolAdapter>,
}

impl QueryServer {
    pub fn new(adapter: ToolAdapter) -> Self {
        Self {
            adapter: Arc::new(adapter),
        }
    }
}

impl ServerHandler for QueryServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Run SQL against the Pacuare database with the query_database tool.".to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _params: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        debug!("Listing tools");

        let tools: Vec<rmcp::model::Tool> = self
            .adapter
            .list_tools()
            .into_iter()
            .map(|t| rmcp::model::Tool {
                name: t.name.into(),
                title: None,
                description: Some(t.description.into()),
                input_schema: Arc::new(t.input_schema.as_object().cloned().unwrap_or_default()),
                output_schema: None,
                annotations: None,
                icons: None,
                meta: None,
            })
            .collect();

        Ok(ListToolsResult {
            meta: None,
            tools,
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        params: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Calling tool: {}", params.name);

        let request = ToolCallRequest {
            name: params.name.into_owned(),
            arguments: params.arguments.unwrap_or_default(),
        };
        let response = self.adapter.handle(&request).await?;

        let content: Vec<Content> = response
            .content
            .into_iter()
            .map(|c| match c {
                ToolContent::Text { text } => Content::text(text),
            })
            .collect();

        // Query failures are reported as ordinary text, never flagged as tool errors
        Ok(CallToolResult {
            meta: None,
            content,
            structured_content: None,
            is_error: Some(false),
        })
    }
}
