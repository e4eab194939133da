mod add_task;
mod args;
mod complete_task;
mod create_task_list;
mod get_next_pending_task;
mod get_progress;
mod get_task;
mod get_task_list;
mod update_task_status;

pub use add_task::AddTaskTool;
pub use complete_task::CompleteTaskTool;
pub use create_task_list::CreateTaskListTool;
pub use get_next_pending_task::GetNextPendingTaskTool;
pub use get_progress::GetProgressTool;
pub use get_task::GetTaskTool;
pub use get_task_list::GetTaskListTool;
pub use update_task_status::UpdateTaskStatusTool;
