pub mod format;
pub mod types;

pub use types::{ToolCallRequest, ToolCallResponse, ToolContent, ToolDefinition};

use crate::error::{AdapterError, Result};
use crate::pacuare::QueryExecutor;
use once_cell::sync::Lazy;
use serde_json::{json, Map, Value};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Name of the single tool this server exposes
pub const QUERY_TOOL_NAME: &str = "query_database";

pub const NO_ROWS_MESSAGE: &str = "Query executed successfully. No rows returned.";

static QUERY_TOOL: Lazy<ToolDefinition> = Lazy::new(|| ToolDefinition {
    name: QUERY_TOOL_NAME.to_string(),
    description: concat!(
        "Execute SQL queries against the Pacuare database. ",
        "This is a PostgreSQL database; most data is in the pacuare_raw table. ",
        "This tool can be used for data retrieval, aggregations, and mathematical calculations. ",
        "For math operations, convert them to SQL queries (e.g., 'SELECT 5 + 3 AS result' for addition). ",
        "For parameterized queries, put the PostgreSQL-formatted statement in 'sql' ($1, $2, ...) ",
        "and the values in 'params'. Avoid writing data if at all possible. ",
        "Returns results as a formatted table."
    )
    .to_string(),
    input_schema: json!({
        "type": "object",
        "properties": {
            "sql": {
                "type": "string",
                "description": "SQL query to execute. Use standard SQL syntax. For math, use SELECT statements with arithmetic operators."
            },
            "params": {
                "type": "array",
                "description": "Optional query parameters for parameterized queries",
                "items": { "type": "string" },
                "default": []
            }
        },
        "required": ["sql"]
    }),
});

/// Exposes the query capability as the `query_database` tool.
///
/// Stateless apart from the executor handle, so it can be shared freely.
#[derive(Clone)]
pub struct ToolAdapter {
    executor: Arc<dyn QueryExecutor>,
}

impl ToolAdapter {
    pub fn new(executor: Arc<dyn QueryExecutor>) -> Self {
        Self { executor }
    }

    /// List the tools a client may invoke
    pub fn list_tools(&self) -> Vec<ToolDefinition> {
        vec![QUERY_TOOL.clone()]
    }

    /// Invoke a tool by name.
    ///
    /// Unknown tools and a missing `sql` argument are returned as errors. Any
    /// failure of the query itself is reported inside the response text instead.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: &Map<String, Value>,
    ) -> Result<ToolCallResponse> {
        if name != QUERY_TOOL_NAME {
            warn!("Rejected call to unknown tool: {}", name);
            return Err(AdapterError::InvalidTool(name.to_string()));
        }

        let sql = extract_sql(arguments)?;
        let params = extract_params(arguments)?;

        debug!("Executing query with {} params: {}", params.len(), sql);

        let text = match self.executor.query(sql, &params).await {
            Ok(result) if result.is_empty() => NO_ROWS_MESSAGE.to_string(),
            Ok(result) => {
                info!("Query returned {} rows", result.row_count());
                format!(
                    "Query returned {} row(s):\n\n{}",
                    result.row_count(),
                    format::render_table(&result)
                )
            }
            Err(e) => {
                warn!("Query failed: {:#}", e);
                format!("Error executing query: {}", e)
            }
        };

        Ok(ToolCallResponse::text(text))
    }

    /// Dispatch a decoded protocol request
    pub async fn handle(&self, request: &ToolCallRequest) -> Result<ToolCallResponse> {
        self.call_tool(&request.name, &request.arguments).await
    }
}

fn extract_sql(arguments: &Map<String, Value>) -> Result<&str> {
    match arguments.get("sql") {
        Some(Value::String(sql)) if !sql.is_empty() => Ok(sql.as_str()),
        _ => Err(AdapterError::InvalidArgument(
            "SQL query is required".to_string(),
        )),
    }
}

fn extract_params(arguments: &Map<String, Value>) -> Result<Vec<String>> {
    match arguments.get("params") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(values)) => values
            .iter()
            .map(|value| match value {
                Value::String(s) => Ok(s.clone()),
                Value::Array(_) | Value::Object(_) => Err(AdapterError::InvalidArgument(
                    "params must be an array of strings".to_string(),
                )),
                scalar => Ok(scalar.to_string()),
            })
            .collect(),
        Some(_) => Err(AdapterError::InvalidArgument(
            "params must be an array of strings".to_string(),
        )),
    }
}
