//! TaskManager - Manages the current TaskList
//!
//! Handles list creation, task CRUD, status updates and progress queries.

mod manager;
mod policy;

pub use manager::{Result, TaskManager, TaskManagerError};
pub use policy::TransitionPolicy;
