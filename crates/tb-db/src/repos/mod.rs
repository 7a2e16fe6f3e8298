//! Repository modules implementing the task operations.
//!
//! Each module adds methods to `TaskService` via `impl TaskService` blocks.

pub mod history;
pub mod task;
