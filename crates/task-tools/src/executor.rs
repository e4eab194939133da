use std::sync::Arc;

use async_trait::async_trait;
use task_core::tools::{
    normalize_tool_name, parse_tool_args, Tool, ToolCall, ToolError, ToolExecutor, ToolResult,
    ToolSchema,
};
use task_core::{TaskManager, ToolRegistry, TransitionPolicy};
use tokio::sync::RwLock;

use crate::render::ERROR_PREFIX;
use crate::tools::{
    AddTaskTool, CompleteTaskTool, CreateTaskListTool, GetNextPendingTaskTool, GetProgressTool,
    GetTaskListTool, GetTaskTool, UpdateTaskStatusTool,
};
use crate::SharedTaskManager;

/// List of all task tool names
pub const TASK_TOOL_NAMES: [&str; 8] = [
    "create_task_list",
    "add_task",
    "get_task",
    "update_task_status",
    "complete_task",
    "get_task_list",
    "get_progress",
    "get_next_pending_task",
];

pub fn is_task_tool(value: &str) -> bool {
    let name = normalize_tool_name(value.trim());
    TASK_TOOL_NAMES.iter().any(|tool| *tool == name)
}

/// Dispatches tool calls to the task tools, all bound to one manager
pub struct TaskToolExecutor {
    registry: ToolRegistry,
    manager: SharedTaskManager,
}

impl TaskToolExecutor {
    /// Creates an executor around a fresh, permissive manager
    pub fn new() -> Self {
        Self::with_manager(Arc::new(RwLock::new(TaskManager::new())))
    }

    pub fn with_policy(policy: TransitionPolicy) -> Self {
        Self::with_manager(Arc::new(RwLock::new(TaskManager::with_policy(policy))))
    }

    /// Creates an executor sharing an existing manager
    pub fn with_manager(manager: SharedTaskManager) -> Self {
        let registry = ToolRegistry::new();
        Self::register_task_tools(&registry, &manager);
        Self { registry, manager }
    }

    pub fn manager(&self) -> SharedTaskManager {
        Arc::clone(&self.manager)
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Registers every task tool against `manager`
    pub fn register_task_tools(registry: &ToolRegistry, manager: &SharedTaskManager) {
        let _ = registry.register(CreateTaskListTool::new(Arc::clone(manager)));
        let _ = registry.register(AddTaskTool::new(Arc::clone(manager)));
        let _ = registry.register(GetTaskTool::new(Arc::clone(manager)));
        let _ = registry.register(UpdateTaskStatusTool::new(Arc::clone(manager)));
        let _ = registry.register(CompleteTaskTool::new(Arc::clone(manager)));
        let _ = registry.register(GetTaskListTool::new(Arc::clone(manager)));
        let _ = registry.register(GetProgressTool::new(Arc::clone(manager)));
        let _ = registry.register(GetNextPendingTaskTool::new(Arc::clone(manager)));
    }

    /// Registers an extra tool next to the task tools
    pub fn register_tool<T: Tool + 'static>(&self, tool: T) -> Result<(), ToolError> {
        self.registry
            .register(tool)
            .map_err(|e| ToolError::Execution(e.to_string()))
    }

    /// Runs a tool by name and always returns text.
    ///
    /// Protocol-level failures (unknown tool, bad arguments) are rendered
    /// with the same `Error:` prefix as domain errors.
    pub async fn call_text(&self, name: &str, args: serde_json::Value) -> String {
        match self.call(name, args).await {
            Ok(result) => result.result,
            Err(error) => format!("{ERROR_PREFIX} {error}"),
        }
    }

    pub async fn call(&self, name: &str, args: serde_json::Value) -> Result<ToolResult, ToolError> {
        let tool_name = normalize_tool_name(name.trim());

        log::debug!("Executing tool '{}' with args {}", tool_name, args);
        let result = self.registry.execute(tool_name, args).await;

        match &result {
            Ok(outcome) if !outcome.success => {
                log::debug!("Tool '{}' reported: {}", tool_name, outcome.result)
            }
            Err(error) => log::warn!("Tool '{}' failed: {}", tool_name, error),
            _ => {}
        }

        result
    }
}

impl Default for TaskToolExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ToolExecutor for TaskToolExecutor {
    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        let args = parse_tool_args(&call.function.arguments)?;
        self.call(&call.function.name, args).await
    }

    fn list_tools(&self) -> Vec<ToolSchema> {
        self.registry.list_tools()
    }
}
