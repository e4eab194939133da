use async_trait::async_trait;
use serde_json::json;
use task_core::{Tool, ToolError, ToolResult};

use crate::render;
use crate::SharedTaskManager;

/// Tool for the grouped progress summary
pub struct GetProgressTool {
    manager: SharedTaskManager,
}

impl GetProgressTool {
    pub fn new(manager: SharedTaskManager) -> Self {
        Self { manager }
    }
}

#[async_trait]
impl Tool for GetProgressTool {
    fn name(&self) -> &str {
        "get_progress"
    }

    fn description(&self) -> &str {
        "Get a summary of the current progress including task counts by status"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {}
        })
    }

    async fn execute(&self, _args: serde_json::Value) -> Result<ToolResult, ToolError> {
        let manager = self.manager.read().await;
        let text = match manager.current_list() {
            Some(list) => render::progress_report(list),
            None => render::NO_LIST_INFO.to_string(),
        };
        Ok(ToolResult::ok(text))
    }
}
