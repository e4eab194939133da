use async_trait::async_trait;
use serde_json::json;
use task_core::{TaskManagerError, Tool, ToolError, ToolResult};

use super::args::task_id;
use crate::render::{self, ErrorContext};
use crate::SharedTaskManager;

/// Tool for looking up a single task
pub struct GetTaskTool {
    manager: SharedTaskManager,
}

impl GetTaskTool {
    pub fn new(manager: SharedTaskManager) -> Self {
        Self { manager }
    }
}

#[async_trait]
impl Tool for GetTaskTool {
    fn name(&self) -> &str {
        "get_task"
    }

    fn description(&self) -> &str {
        "Get a single task by ID, including its status and result"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "task_id": {
                    "type": "integer",
                    "description": "ID of the task to look up"
                }
            },
            "required": ["task_id"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<ToolResult, ToolError> {
        let id = task_id(&args)?;

        let manager = self.manager.read().await;
        if !manager.has_list() {
            return Ok(render::error_result(
                &TaskManagerError::NoList,
                ErrorContext::Other,
            ));
        }

        Ok(match manager.get_task(id) {
            Some(task) => ToolResult::ok(task.to_string()),
            None => render::error_result(&TaskManagerError::TaskNotFound(id), ErrorContext::Other),
        })
    }
}
