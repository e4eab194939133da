//! TaskManager implementation
//!
//! Owns the current TaskList and applies every status change to it.

use thiserror::Error;

use crate::task::{ProgressCounts, Task, TaskList, TaskStatus};

use super::policy::TransitionPolicy;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskManagerError {
    #[error("No task list exists")]
    NoList,

    #[error("Task #{0} not found")]
    TaskNotFound(u32),

    #[error("Invalid status '{0}'")]
    InvalidStatus(String),

    #[error("Cannot move task #{id} from {from} to {to}")]
    InvalidTransition {
        id: u32,
        from: TaskStatus,
        to: TaskStatus,
    },
}

pub type Result<T> = std::result::Result<T, TaskManagerError>;

/// Holds at most one current list; `create_list` replaces it wholesale
#[derive(Debug, Default)]
pub struct TaskManager {
    current: Option<TaskList>,
    policy: TransitionPolicy,
}

impl TaskManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: TransitionPolicy) -> Self {
        Self {
            current: None,
            policy,
        }
    }

    pub fn policy(&self) -> TransitionPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: TransitionPolicy) {
        self.policy = policy;
    }

    pub fn current_list(&self) -> Option<&TaskList> {
        self.current.as_ref()
    }

    pub fn has_list(&self) -> bool {
        self.current.is_some()
    }

    /// Drop the current list
    pub fn reset(&mut self) {
        self.current = None;
    }

    /// Replace the current list with a new empty one
    pub fn create_list(&mut self, description: impl Into<String>) -> &TaskList {
        let list = TaskList::new(description);
        if let Some(previous) = &self.current {
            log::debug!(
                "Replacing task list '{}' ({} tasks)",
                previous.description(),
                previous.len()
            );
        }
        log::debug!("Created task list '{}'", list.description());
        self.current.insert(list)
    }

    pub fn add_task(&mut self, description: impl Into<String>) -> Result<u32> {
        let list = self.list_mut()?;
        let task = list.add_task(description);
        log::debug!("Added task #{}: {}", task.id(), task.description());
        Ok(task.id())
    }

    pub fn get_task(&self, id: u32) -> Option<&Task> {
        self.current.as_ref().and_then(|list| list.get_task(id))
    }

    /// Parse `status` and apply it. The result field is not touched.
    pub fn update_status(&mut self, id: u32, status: &str) -> Result<&Task> {
        if self.current.is_none() {
            return Err(TaskManagerError::NoList);
        }
        let status: TaskStatus = status.parse().map_err(|_| {
            log::warn!("Rejected status '{}' for task #{}", status, id);
            TaskManagerError::InvalidStatus(status.to_string())
        })?;
        self.set_status(id, status)
    }

    pub fn set_status(&mut self, id: u32, status: TaskStatus) -> Result<&Task> {
        let policy = self.policy;
        let task = self.task_mut(id)?;
        let from = task.status();

        if !policy.allows(from, status) {
            log::warn!("Rejected transition of task #{} from {} to {}", id, from, status);
            return Err(TaskManagerError::InvalidTransition {
                id,
                from,
                to: status,
            });
        }

        task.set_status(status);
        log::debug!("Task #{} status {} -> {}", id, from, status);
        Ok(&*task)
    }

    /// Force COMPLETED and store `result`, whatever the prior status
    pub fn complete_task(&mut self, id: u32, result: impl Into<String>) -> Result<&Task> {
        let policy = self.policy;
        let task = self.task_mut(id)?;
        let from = task.status();

        if !policy.allows(from, TaskStatus::Completed) {
            log::warn!("Rejected completion of task #{} ({})", id, from);
            return Err(TaskManagerError::InvalidTransition {
                id,
                from,
                to: TaskStatus::Completed,
            });
        }

        task.complete(result);
        log::debug!("Task #{} completed", id);
        Ok(&*task)
    }

    pub fn next_pending(&self) -> Option<&Task> {
        self.current.as_ref().and_then(|list| list.next_pending())
    }

    pub fn formatted_list(&self) -> Option<String> {
        self.current.as_ref().map(|list| list.formatted())
    }

    pub fn progress_counts(&self) -> Option<ProgressCounts> {
        self.current.as_ref().map(|list| list.progress())
    }

    fn list_mut(&mut self) -> Result<&mut TaskList> {
        self.current.as_mut().ok_or(TaskManagerError::NoList)
    }

    fn task_mut(&mut self, id: u32) -> Result<&mut Task> {
        self.list_mut()?
            .get_task_mut(id)
            .ok_or(TaskManagerError::TaskNotFound(id))
    }
}
