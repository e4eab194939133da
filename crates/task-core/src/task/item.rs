//! Task - a single unit of work inside a TaskList

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::status::TaskStatus;

/// A task owned by its parent list.
///
/// The description is fixed at creation; status and result only change
/// through the owning list.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Task {
    id: u32,
    description: String,
    status: TaskStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    completed_at: Option<DateTime<Utc>>,
}

impl Task {
    pub(crate) fn new(id: u32, description: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            description: description.into(),
            status: TaskStatus::Pending,
            result: None,
            created_at: now,
            updated_at: now,
            completed_at: None,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Result text when present and non-empty
    pub fn visible_result(&self) -> Option<&str> {
        self.result().filter(|r| !r.is_empty())
    }

    /// `{icon} Task #{id}: {description}`
    pub fn status_line(&self) -> String {
        format!(
            "{} Task #{}: {}",
            self.status.icon(),
            self.id,
            self.description
        )
    }

    pub(crate) fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    pub(crate) fn complete(&mut self, result: impl Into<String>) {
        let now = Utc::now();
        self.status = TaskStatus::Completed;
        self.result = Some(result.into());
        self.updated_at = now;
        self.completed_at = Some(now);
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.status_line())?;
        if let Some(result) = self.visible_result() {
            write!(f, "\n  Result: {}", result)?;
        }
        Ok(())
    }
}
