use async_trait::async_trait;
use serde_json::json;
use task_core::{Tool, ToolError, ToolResult};

use crate::render;
use crate::SharedTaskManager;

/// Tool for rendering the whole current list
pub struct GetTaskListTool {
    manager: SharedTaskManager,
}

impl GetTaskListTool {
    pub fn new(manager: SharedTaskManager) -> Self {
        Self { manager }
    }
}

#[async_trait]
impl Tool for GetTaskListTool {
    fn name(&self) -> &str {
        "get_task_list"
    }

    fn description(&self) -> &str {
        "Get the current task list with all tasks and their statuses"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {}
        })
    }

    async fn execute(&self, _args: serde_json::Value) -> Result<ToolResult, ToolError> {
        let manager = self.manager.read().await;
        let text = manager
            .formatted_list()
            .unwrap_or_else(|| render::NO_LIST_HINT.to_string());
        Ok(ToolResult::ok(text))
    }
}
