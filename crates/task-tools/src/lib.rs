//! Task tracking tools for agent orchestrators.
//!
//! Every tool implements the `Tool` trait from `task-core` and works on a
//! `TaskManager` shared through `SharedTaskManager`. Results are plain text;
//! failures start with `Error:` (see [`render`]).

mod executor;
pub mod render;
pub mod tools;

use std::sync::Arc;

use task_core::TaskManager;
use tokio::sync::RwLock;

pub use executor::{is_task_tool, TaskToolExecutor, TASK_TOOL_NAMES};

pub use tools::{
    AddTaskTool, CompleteTaskTool, CreateTaskListTool, GetNextPendingTaskTool, GetProgressTool,
    GetTaskListTool, GetTaskTool, UpdateTaskStatusTool,
};

// Re-export the domain types tool callers usually need
pub use task_core::{Task, TaskStatus, TransitionPolicy};

/// Manager handle shared by all tools of one executor
pub type SharedTaskManager = Arc<RwLock<TaskManager>>;
