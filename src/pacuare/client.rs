use super::types::{QueryRequest, QueryResult};
use super::QueryExecutor;
use crate::config::PacuareConfig;
use crate::error::{AdapterError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde_json::Value;
use std::fmt;
use tracing::{debug, error};

/// HTTP client for the Pacuare query API, authenticated once at construction
#[derive(Clone)]
pub struct PacuareClient {
    http: reqwest::Client,
    query_url: String,
}

impl PacuareClient {
    pub fn new(api_key: &str, config: &PacuareConfig) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|_| AdapterError::Config("API key contains invalid characters".to_string()))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout())
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            query_url: format!("{}/query", config.api_url.trim_end_matches('/')),
        })
    }

    /// Run a statement against the Pacuare database
    pub async fn execute(&self, sql: &str, params: &[String]) -> Result<QueryResult> {
        debug!(
            "Sending query to {} ({} params)",
            self.query_url,
            params.len()
        );

        let response = self
            .http
            .post(&self.query_url)
            .json(&QueryRequest { query: sql, params })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = error_message(&body).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            });
            error!("Pacuare query failed with status {}: {}", status, message);
            return Err(AdapterError::QueryFailed {
                status: status.as_u16(),
                message,
            });
        }

        let result: QueryResult = response.json().await?;
        debug!(
            "Query returned {} rows across {} columns",
            result.row_count(),
            result.columns.len()
        );
        Ok(result)
    }
}

/// Pull a readable message out of an error body
fn error_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        for key in ["error", "message", "detail"] {
            if let Some(Value::String(message)) = map.get(key) {
                return Some(message.clone());
            }
        }
    }

    Some(body.to_string())
}

#[async_trait]
impl QueryExecutor for PacuareClient {
    async fn query(&self, sql: &str, params: &[String]) -> anyhow::Result<QueryResult> {
        Ok(self.execute(sql, params).await?)
    }
}

impl fmt::Debug for PacuareClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PacuareClient")
            .field("query_url", &self.query_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}
