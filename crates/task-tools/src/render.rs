//! Text rendering for the orchestrator-facing channel.
//!
//! Every manager outcome becomes a plain string; failures carry the
//! `Error:` prefix so an LLM caller can recognise and react to them.

use task_core::{Task, TaskList, TaskManagerError, TaskStatus, ToolResult};

pub const ERROR_PREFIX: &str = "Error:";

pub const NO_LIST_INFO: &str = "No task list exists.";
pub const NO_LIST_HINT: &str = "No task list exists. Create one first using create_task_list.";
pub const NO_PENDING: &str = "No pending tasks. All tasks are either in progress or completed!";

/// Which operation failed; only `add_task` points the caller at the fix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorContext {
    AddTask,
    Other,
}

pub fn error_text(error: &TaskManagerError, context: ErrorContext) -> String {
    match error {
        TaskManagerError::NoList => match context {
            ErrorContext::AddTask => format!(
                "{ERROR_PREFIX} No task list exists. Please create a task list first using create_task_list."
            ),
            ErrorContext::Other => format!("{ERROR_PREFIX} No task list exists."),
        },
        TaskManagerError::TaskNotFound(id) => format!("{ERROR_PREFIX} Task #{id} not found."),
        TaskManagerError::InvalidStatus(value) => format!(
            "{ERROR_PREFIX} Invalid status '{}'. Valid values are: {}",
            value,
            TaskStatus::valid_values()
        ),
        TaskManagerError::InvalidTransition { id, from, to } => {
            format!("{ERROR_PREFIX} Cannot move task #{id} from {from} to {to}.")
        }
    }
}

pub fn error_result(error: &TaskManagerError, context: ErrorContext) -> ToolResult {
    ToolResult::error(error_text(error, context))
}

pub fn is_error_text(text: &str) -> bool {
    text.starts_with(ERROR_PREFIX)
}

pub fn list_created(description: &str) -> String {
    format!("Task list created: '{description}'")
}

pub fn task_added(id: u32, description: &str) -> String {
    format!("Task #{id} added: {description}")
}

pub fn status_updated(task: &Task) -> String {
    format!(
        "Task #{} status updated to {}: {}",
        task.id(),
        task.status(),
        task.description()
    )
}

pub fn task_completed(task: &Task) -> String {
    format!(
        "Task #{} completed: {}\nResult: {}",
        task.id(),
        task.description(),
        task.result().unwrap_or_default()
    )
}

pub fn next_pending(task: Option<&Task>) -> String {
    match task {
        Some(task) => format!("Next pending task: #{} - {}", task.id(), task.description()),
        None => NO_PENDING.to_string(),
    }
}

/// Progress counts followed by the tasks grouped by status
pub fn progress_report(list: &TaskList) -> String {
    let mut output = String::from("Progress Summary\n");
    output.push_str(&task_core::task::separator());
    output.push('\n');
    output.push_str(&list.progress().to_string());
    output.push_str("\n\n");

    let completed: Vec<&Task> = list.completed_tasks().collect();
    if !completed.is_empty() {
        output.push_str("Completed Tasks:\n");
        for task in completed {
            output.push_str("  ✓ ");
            output.push_str(task.description());
            if let Some(result) = task.visible_result() {
                output.push_str(" - ");
                output.push_str(result);
            }
            output.push('\n');
        }
        output.push('\n');
    }

    let in_progress: Vec<&Task> = list.in_progress_tasks().collect();
    if !in_progress.is_empty() {
        output.push_str("In Progress:\n");
        for task in in_progress {
            output.push_str(&format!("  → {}\n", task.description()));
        }
        output.push('\n');
    }

    let pending: Vec<&Task> = list.pending_tasks().collect();
    if !pending.is_empty() {
        output.push_str("Pending Tasks:\n");
        for task in pending {
            output.push_str(&format!("  [ ] {}\n", task.description()));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use task_core::TaskManager;

    #[test]
    fn error_texts_carry_prefix() {
        let errors = [
            TaskManagerError::NoList,
            TaskManagerError::TaskNotFound(99),
            TaskManagerError::InvalidStatus("DONE".to_string()),
            TaskManagerError::InvalidTransition {
                id: 1,
                from: TaskStatus::Completed,
                to: TaskStatus::Pending,
            },
        ];
        for error in &errors {
            assert!(is_error_text(&error_text(error, ErrorContext::Other)));
        }
    }

    #[test]
    fn no_list_hint_only_for_add_task() {
        assert_eq!(
            error_text(&TaskManagerError::NoList, ErrorContext::Other),
            "Error: No task list exists."
        );
        assert!(error_text(&TaskManagerError::NoList, ErrorContext::AddTask)
            .ends_with("using create_task_list."));
    }

    #[test]
    fn invalid_status_lists_valid_values() {
        assert_eq!(
            error_text(
                &TaskManagerError::InvalidStatus("done".to_string()),
                ErrorContext::Other
            ),
            "Error: Invalid status 'done'. Valid values are: PENDING, IN_PROGRESS, COMPLETED"
        );
    }

    #[test]
    fn progress_report_groups_by_status() {
        let mut manager = TaskManager::new();
        manager.create_list("Launch");
        manager.add_task("Write copy").unwrap();
        manager.add_task("Design page").unwrap();
        manager.add_task("Publish").unwrap();
        manager.complete_task(1, "Drafted").unwrap();
        manager.update_status(2, "IN_PROGRESS").unwrap();

        let report = progress_report(manager.current_list().unwrap());
        let expected = format!(
            "Progress Summary\n{}\nProgress: 1/3 completed, 1 in progress, 1 pending\n\n\
             Completed Tasks:\n  ✓ Write copy - Drafted\n\n\
             In Progress:\n  → Design page\n\n\
             Pending Tasks:\n  [ ] Publish\n",
            "=".repeat(50)
        );
        assert_eq!(report, expected);
    }

    #[test]
    fn progress_report_omits_empty_sections() {
        let mut manager = TaskManager::new();
        manager.create_list("Empty");

        let report = progress_report(manager.current_list().unwrap());
        assert!(report.ends_with("Progress: 0/0 completed, 0 in progress, 0 pending\n\n"));
        assert!(!report.contains("Pending Tasks"));
    }

    #[test]
    fn completion_text_shows_empty_result() {
        let mut manager = TaskManager::new();
        manager.create_list("P");
        manager.add_task("A").unwrap();
        let task = manager.complete_task(1, "").unwrap();
        assert_eq!(task_completed(task), "Task #1 completed: A\nResult: ");
    }
}
