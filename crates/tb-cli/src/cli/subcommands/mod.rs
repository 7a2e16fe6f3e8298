mod task;

pub use task::{CreateArgs, TaskCommands};
