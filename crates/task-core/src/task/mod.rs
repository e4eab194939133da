//! Task domain types
//!
//! - `Task` - a single unit of work
//! - `TaskStatus` - PENDING / IN_PROGRESS / COMPLETED
//! - `TaskList` - ordered container with sequential identifiers
//! - `ProgressCounts` - per-status counts

mod item;
mod list;
mod progress;
mod status;

pub use item::Task;
pub use list::{separator, TaskList};
pub use progress::ProgressCounts;
pub use status::{ParseStatusError, TaskStatus};
