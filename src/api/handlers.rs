use crate::tool::QUERY_TOOL_NAME;
use axum::{response::IntoResponse, Json};
use serde_json::json;

pub(crate) async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub(crate) async fn server_info() -> impl IntoResponse {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "description": env!("CARGO_PKG_DESCRIPTION"),
        "tools": [QUERY_TOOL_NAME],
        "mcp_endpoint": "/mcp",
    }))
}
