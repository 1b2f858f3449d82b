pub mod api;
pub mod config;
pub mod error;
pub mod mcp;
pub mod pacuare;
pub(crate) mod shutdown;
pub mod tool;

pub use error::{AdapterError, Result};
