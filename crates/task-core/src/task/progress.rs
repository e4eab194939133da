//! Progress tracking
//!
//! Per-status task counts for a list.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::item::Task;
use super::status::TaskStatus;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProgressCounts {
    pub completed: usize,
    pub in_progress: usize,
    pub pending: usize,
    pub total: usize,
}

impl ProgressCounts {
    pub fn from_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        let mut counts = Self::default();
        for task in tasks {
            match task.status() {
                TaskStatus::Pending => counts.pending += 1,
                TaskStatus::InProgress => counts.in_progress += 1,
                TaskStatus::Completed => counts.completed += 1,
            }
            counts.total += 1;
        }
        counts
    }

    /// Completed share as a whole percentage (0 for an empty list)
    pub fn percentage(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        ((self.completed * 100) / self.total) as u8
    }

    pub fn is_finished(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

impl fmt::Display for ProgressCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Progress: {}/{} completed, {} in progress, {} pending",
            self.completed, self.total, self.in_progress, self.pending
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_each_status() {
        let mut a = Task::new(1, "a");
        let mut b = Task::new(2, "b");
        let c = Task::new(3, "c");
        a.complete("ok");
        b.set_status(TaskStatus::InProgress);

        let counts = ProgressCounts::from_tasks(&[a, b, c]);
        assert_eq!(
            counts,
            ProgressCounts {
                completed: 1,
                in_progress: 1,
                pending: 1,
                total: 3
            }
        );
        assert_eq!(counts.percentage(), 33);
        assert_eq!(
            counts.to_string(),
            "Progress: 1/3 completed, 1 in progress, 1 pending"
        );
    }

    #[test]
    fn empty_list_has_zero_percentage() {
        let counts = ProgressCounts::default();
        assert_eq!(counts.percentage(), 0);
        assert!(!counts.is_finished());
    }
}
