use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Represents an MCP tool definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

/// Request to call an MCP tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCallRequest {
    pub name: String,
    #[serde(default)]
    pub arguments: Map<String, Value>,
}

/// Response from an MCP tool call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCallResponse {
    pub content: Vec<ToolContent>,
}

impl ToolCallResponse {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text { text: text.into() }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ToolContent {
    Text { text: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_content_wire_shape() {
        let response = ToolCallResponse::text("Query executed successfully. No rows returned.");
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "content": [
                    { "type": "text", "text": "Query executed successfully. No rows returned." }
                ]
            })
        );
    }

    #[test]
    fn test_request_arguments_default_to_empty() {
        let request: ToolCallRequest =
            serde_json::from_value(json!({ "name": "query_database" })).unwrap();
        assert!(request.arguments.is_empty());
    }
}
