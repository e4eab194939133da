use async_trait::async_trait;
use serde_json::json;
use task_core::{Tool, ToolError, ToolResult};

use super::args::{optional_str, task_id};
use crate::render::{self, ErrorContext};
use crate::SharedTaskManager;

/// Tool for marking a task COMPLETED with its outcome
pub struct CompleteTaskTool {
    manager: SharedTaskManager,
}

impl CompleteTaskTool {
    pub fn new(manager: SharedTaskManager) -> Self {
        Self { manager }
    }
}

#[async_trait]
impl Tool for CompleteTaskTool {
    fn name(&self) -> &str {
        "complete_task"
    }

    fn description(&self) -> &str {
        "Mark a task as completed with an optional result or outcome"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "task_id": {
                    "type": "integer",
                    "description": "ID of the task to complete"
                },
                "result": {
                    "type": "string",
                    "description": "Result or outcome of the task (optional)"
                }
            },
            "required": ["task_id"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<ToolResult, ToolError> {
        let id = task_id(&args)?;
        let result = optional_str(&args, "result").unwrap_or_default();

        let mut manager = self.manager.write().await;
        Ok(match manager.complete_task(id, result) {
            Ok(task) => ToolResult::ok(render::task_completed(task)),
            Err(error) => render::error_result(&error, ErrorContext::Other),
        })
    }
}
