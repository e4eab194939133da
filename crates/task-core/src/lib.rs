//! task-core - Task tracking domain and tool contract
//!
//! - `task`: Task, TaskStatus, TaskList, ProgressCounts
//! - `task_manager`: the manager owning the current list, with typed errors
//! - `tools`: Tool trait, registry and executor contract used by orchestrators

pub mod task;
pub mod task_manager;
pub mod tools;

pub use task::{ParseStatusError, ProgressCounts, Task, TaskList, TaskStatus};
pub use task_manager::{TaskManager, TaskManagerError, TransitionPolicy};
pub use tools::{
    normalize_tool_name, parse_tool_args, RegistryError, Tool, ToolCall, ToolError, ToolExecutor,
    ToolRegistry, ToolResult, ToolSchema,
};
