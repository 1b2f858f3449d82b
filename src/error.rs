use rmcp::ErrorData as McpError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("Unknown tool: {0}")]
    InvalidTool(String),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("query returned status {status}: {message}")]
    QueryFailed { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, AdapterError>;

impl AdapterError {
    /// Whether this error is the caller's fault rather than ours or the database's
    pub fn is_invalid_request(&self) -> bool {
        matches!(
            self,
            AdapterError::InvalidTool(_) | AdapterError::InvalidArgument(_)
        )
    }
}

// Implement conversion from anyhow::Error for convenience
impl From<anyhow::Error> for AdapterError {
    fn from(err: anyhow::Error) -> Self {
        AdapterError::Internal(err.to_string())
    }
}

impl From<AdapterError> for McpError {
    fn from(err: AdapterError) -> Self {
        if err.is_invalid_request() {
            McpError::invalid_params(err.to_string(), None)
        } else {
            McpError::internal_error(err.to_string(), None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::ErrorCode;

    #[test]
    fn test_error_display() {
        let err = AdapterError::InvalidTool("drop_database".to_string());
        assert_eq!(err.to_string(), "Unknown tool: drop_database");

        let err = AdapterError::InvalidArgument("SQL query is required".to_string());
        assert_eq!(err.to_string(), "SQL query is required");

        let err = AdapterError::QueryFailed {
            status: 400,
            message: "syntax error at or near \"SELEC\"".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "query returned status 400: syntax error at or near \"SELEC\""
        );
    }

    #[test]
    fn test_invalid_request_classification() {
        assert!(AdapterError::InvalidTool("x".to_string()).is_invalid_request());
        assert!(AdapterError::InvalidArgument("x".to_string()).is_invalid_request());
        assert!(!AdapterError::Config("x".to_string()).is_invalid_request());
        assert!(!AdapterError::Internal("x".to_string()).is_invalid_request());
    }

    #[test]
    fn test_error_from_anyhow() {
        let anyhow_err = anyhow::anyhow!("something went wrong");
        let err: AdapterError = anyhow_err.into();
        assert!(matches!(err, AdapterError::Internal(_)));
        assert!(err.to_string().contains("something went wrong"));
    }

    #[test]
    fn test_into_mcp_error() {
        let mcp_err: McpError = AdapterError::InvalidTool("nope".to_string()).into();
        assert_eq!(mcp_err.code, ErrorCode::INVALID_PARAMS);
        assert_eq!(mcp_err.message, "Unknown tool: nope");

        let mcp_err: McpError = AdapterError::Internal("boom".to_string()).into();
        assert_eq!(mcp_err.code, ErrorCode::INTERNAL_ERROR);
    }
}
