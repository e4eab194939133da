use async_trait::async_trait;
use serde_json::json;
use task_core::{Tool, ToolError, ToolResult};

use super::args::{required_str, task_id};
use crate::render::{self, ErrorContext};
use crate::SharedTaskManager;

/// Tool for moving a task between statuses
pub struct UpdateTaskStatusTool {
    manager: SharedTaskManager,
}

impl UpdateTaskStatusTool {
    pub fn new(manager: SharedTaskManager) -> Self {
        Self { manager }
    }
}

#[async_trait]
impl Tool for UpdateTaskStatusTool {
    fn name(&self) -> &str {
        "update_task_status"
    }

    fn description(&self) -> &str {
        "Update the status of a specific task. Valid statuses are: PENDING, IN_PROGRESS, COMPLETED"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "task_id": {
                    "type": "integer",
                    "description": "ID of the task to update"
                },
                "status": {
                    "type": "string",
                    "enum": ["PENDING", "IN_PROGRESS", "COMPLETED"],
                    "description": "New status: PENDING, IN_PROGRESS, or COMPLETED"
                }
            },
            "required": ["task_id", "status"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<ToolResult, ToolError> {
        let id = task_id(&args)?;
        let status = required_str(&args, "status")?;

        let mut manager = self.manager.write().await;
        Ok(match manager.update_status(id, status) {
            Ok(task) => ToolResult::ok(render::status_updated(task)),
            Err(error) => render::error_result(&error, ErrorContext::Other),
        })
    }
}
