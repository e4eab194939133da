use async_trait::async_trait;
use thiserror::Error;

use crate::tools::{ToolCall, ToolResult, ToolSchema};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    NotFound(String),

    #[error("Execution failed: {0}")]
    Execution(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

pub type Result<T> = std::result::Result<T, ToolError>;

#[async_trait]
pub trait ToolExecutor: Send + Sync {
    async fn execute(&self, call: &ToolCall) -> Result<ToolResult>;
    fn list_tools(&self) -> Vec<ToolSchema>;
}

/// Decode the JSON argument string of a tool call; blank means `{}`
pub fn parse_tool_args(arguments: &str) -> Result<serde_json::Value> {
    let args_raw = arguments.trim();

    if args_raw.is_empty() {
        return Ok(serde_json::json!({}));
    }

    serde_json::from_str(args_raw)
        .map_err(|error| ToolError::InvalidArguments(format!("Invalid JSON arguments: {error}")))
}
