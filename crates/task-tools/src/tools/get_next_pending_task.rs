use async_trait::async_trait;
use serde_json::json;
use task_core::{Tool, ToolError, ToolResult};

use crate::render;
use crate::SharedTaskManager;

/// Tool for picking the next task to work on
pub struct GetNextPendingTaskTool {
    manager: SharedTaskManager,
}

impl GetNextPendingTaskTool {
    pub fn new(manager: SharedTaskManager) -> Self {
        Self { manager }
    }
}

#[async_trait]
impl Tool for GetNextPendingTaskTool {
    fn name(&self) -> &str {
        "get_next_pending_task"
    }

    fn description(&self) -> &str {
        "Get the next pending task that needs to be worked on"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {}
        })
    }

    async fn execute(&self, _args: serde_json::Value) -> Result<ToolResult, ToolError> {
        let manager = self.manager.read().await;
        if !manager.has_list() {
            return Ok(ToolResult::ok(render::NO_LIST_INFO));
        }
        Ok(ToolResult::ok(render::next_pending(manager.next_pending())))
    }
}
