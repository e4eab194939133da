//! TaskList - Container for Tasks
//!
//! Holds the tasks created for one goal, in creation order.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::item::Task;
use super::progress::ProgressCounts;
use super::status::TaskStatus;

pub(crate) const SEPARATOR_WIDTH: usize = 50;

pub fn separator() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}

/// Ordered collection of tasks for a goal or project
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TaskList {
    description: String,
    tasks: Vec<Task>,
    next_id: u32,
    created_at: DateTime<Utc>,
}

impl TaskList {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            tasks: Vec::new(),
            next_id: 1,
            created_at: Utc::now(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Append a pending task with the next identifier
    pub fn add_task(&mut self, description: impl Into<String>) -> &Task {
        let id = self.next_id;
        self.next_id += 1;
        self.tasks.push(Task::new(id, description));
        &self.tasks[self.tasks.len() - 1]
    }

    pub fn get_task(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == id)
    }

    pub(crate) fn get_task_mut(&mut self, id: u32) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id() == id)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn tasks_with_status(&self, status: TaskStatus) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(move |t| t.status() == status)
    }

    pub fn pending_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks_with_status(TaskStatus::Pending)
    }

    pub fn in_progress_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks_with_status(TaskStatus::InProgress)
    }

    pub fn completed_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks_with_status(TaskStatus::Completed)
    }

    /// First pending task in creation order
    pub fn next_pending(&self) -> Option<&Task> {
        self.pending_tasks().next()
    }

    pub fn progress(&self) -> ProgressCounts {
        ProgressCounts::from_tasks(&self.tasks)
    }

    pub fn is_all_completed(&self) -> bool {
        self.progress().is_finished()
    }

    /// Header, one line per task, and the progress footer
    pub fn formatted(&self) -> String {
        let mut output = format!("Task List: {}\n", self.description);
        output.push_str(&separator());
        output.push('\n');

        if self.tasks.is_empty() {
            output.push_str("No tasks yet.\n");
            return output;
        }

        for task in &self.tasks {
            output.push_str(&task.to_string());
            output.push('\n');
        }
        output.push_str(&separator());
        output.push('\n');
        output.push_str(&self.progress().to_string());
        output.push('\n');

        output
    }
}

impl fmt::Display for TaskList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_are_sequential() {
        let mut list = TaskList::new("Project");
        let ids: Vec<u32> = (0..4).map(|i| list.add_task(format!("t{i}")).id()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn next_pending_skips_started_tasks() {
        let mut list = TaskList::new("Project");
        list.add_task("first");
        list.add_task("second");
        list.get_task_mut(1)
            .unwrap()
            .set_status(TaskStatus::InProgress);

        assert_eq!(list.next_pending().map(Task::id), Some(2));
    }

    #[test]
    fn formatted_empty_list() {
        let list = TaskList::new("Nothing");
        assert_eq!(
            list.formatted(),
            format!("Task List: Nothing\n{}\nNo tasks yet.\n", "=".repeat(50))
        );
    }

    #[test]
    fn formatted_list_with_results() {
        let mut list = TaskList::new("Trip");
        list.add_task("Book flights");
        list.add_task("Pack");
        list.get_task_mut(1).unwrap().complete("Booked");
        list.get_task_mut(2)
            .unwrap()
            .set_status(TaskStatus::InProgress);

        let sep = "=".repeat(50);
        let expected = format!(
            "Task List: Trip\n{sep}\n[✓] Task #1: Book flights\n  Result: Booked\n[→] Task #2: Pack\n{sep}\nProgress: 1/2 completed, 1 in progress, 0 pending\n"
        );
        assert_eq!(list.formatted(), expected);
    }

    #[test]
    fn all_completed_requires_tasks() {
        let mut list = TaskList::new("Empty");
        assert!(!list.is_all_completed());
        list.add_task("only");
        list.get_task_mut(1).unwrap().complete("done");
        assert!(list.is_all_completed());
    }
}
