use async_trait::async_trait;
use serde_json::json;
use task_core::{Tool, ToolError, ToolResult};

use super::args::required_str;
use crate::render;
use crate::SharedTaskManager;

/// Tool for starting a fresh task list
pub struct CreateTaskListTool {
    manager: SharedTaskManager,
}

impl CreateTaskListTool {
    pub fn new(manager: SharedTaskManager) -> Self {
        Self { manager }
    }
}

#[async_trait]
impl Tool for CreateTaskListTool {
    fn name(&self) -> &str {
        "create_task_list"
    }

    fn description(&self) -> &str {
        "Create a new task list for a given goal or project. \
        This should be called first before adding any tasks. \
        Any existing task list is replaced."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "description": {
                    "type": "string",
                    "description": "Description of the overall goal or project"
                }
            },
            "required": ["description"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<ToolResult, ToolError> {
        let description = required_str(&args, "description")?;

        let mut manager = self.manager.write().await;
        let list = manager.create_list(description);

        Ok(ToolResult::ok(render::list_created(list.description())))
    }
}
