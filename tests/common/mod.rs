#![allow(dead_code)]

use async_trait::async_trait;
use pacuare_mcp::mcp::QueryServer;
use pacuare_mcp::pacuare::{QueryExecutor, QueryResult};
use pacuare_mcp::tool::ToolAdapter;
use rmcp::service::{RoleClient, RunningService};
use rmcp::ServiceExt;
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// Query executor double: replays one canned outcome and records every call.
pub struct StubExecutor {
    outcome: Result<QueryResult, String>,
    calls: Mutex<Vec<(String, Vec<String>)>>,
}

impl StubExecutor {
    pub fn returning(columns: &[&str], rows: Vec<Vec<Value>>) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(QueryResult::new(
                columns.iter().map(|c| c.to_string()).collect(),
                rows,
            )),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn empty() -> Arc<Self> {
        Self::returning(&[], Vec::new())
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl QueryExecutor for StubExecutor {
    async fn query(&self, sql: &str, params: &[String]) -> anyhow::Result<QueryResult> {
        self.calls
            .lock()
            .unwrap()
            .push((sql.to_string(), params.to_vec()));
        match &self.outcome {
            Ok(result) => Ok(result.clone()),
            Err(message) => Err(anyhow::anyhow!(message.clone())),
        }
    }
}

pub fn query_server(executor: Arc<StubExecutor>) -> QueryServer {
    QueryServer::new(ToolAdapter::new(executor))
}

/// Start `server` on one end of an in-memory pipe and connect an rmcp client to the other.
pub async fn connect(server: QueryServer) -> RunningService<RoleClient, ()> {
    let (server_io, client_io) = tokio::io::duplex(64 * 1024);

    tokio::spawn(async move {
        let service = server
            .serve(tokio::io::split(server_io))
            .await
            .expect("server handshake");
        let _ = service.waiting().await;
    });

    ().serve(tokio::io::split(client_io))
        .await
        .expect("client handshake")
}

/// Helper to extract JSON from a response body.
pub async fn response_json(response: axum::http::Response<axum::body::Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
