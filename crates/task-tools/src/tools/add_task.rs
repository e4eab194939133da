use async_trait::async_trait;
use serde_json::json;
use task_core::{Tool, ToolError, ToolResult};

use super::args::required_str;
use crate::render::{self, ErrorContext};
use crate::SharedTaskManager;

/// Tool for appending a task to the current list
pub struct AddTaskTool {
    manager: SharedTaskManager,
}

impl AddTaskTool {
    pub fn new(manager: SharedTaskManager) -> Self {
        Self { manager }
    }
}

#[async_trait]
impl Tool for AddTaskTool {
    fn name(&self) -> &str {
        "add_task"
    }

    fn description(&self) -> &str {
        "Add a new task to the current task list. Returns the task ID."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "description": {
                    "type": "string",
                    "description": "Description of the task to add"
                }
            },
            "required": ["description"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<ToolResult, ToolError> {
        let description = required_str(&args, "description")?;

        let mut manager = self.manager.write().await;
        Ok(match manager.add_task(description) {
            Ok(id) => ToolResult::ok(render::task_added(id, description)),
            Err(error) => render::error_result(&error, ErrorContext::AddTask),
        })
    }
}
