pub mod client;
pub mod types;

pub use client::PacuareClient;
pub use types::QueryResult;

use async_trait::async_trait;

/// Capability to run a SQL statement with positional parameters.
///
/// The error type is unconstrained; the tool adapter reports every failure as text.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    async fn query(&self, sql: &str, params: &[String]) -> anyhow::Result<QueryResult>;
}
