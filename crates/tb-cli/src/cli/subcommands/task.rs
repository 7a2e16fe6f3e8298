use clap::{Args, Subcommand};

/// Task commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TaskCommands {
    /// List tasks, newest first.
    List {
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        assignee: Option<String>,
        #[arg(long)]
        creator: Option<String>,
        #[arg(long)]
        search: Option<String>,
    },
    /// Get a task by ID.
    Get { id: i64 },
    /// Post a new task as the caller (`--as`).
    Create(CreateArgs),
    /// Accept an open task as the caller (`--as`).
    Accept { id: i64 },
    /// Complete a task you accepted (`--as`).
    Complete { id: i64 },
    /// Override a task's status.
    Update {
        id: i64,
        #[arg(long)]
        status: String,
    },
    /// Delete a task.
    Delete { id: i64 },
    /// Task counts per status.
    Stats,
}

#[derive(Clone, Debug, Args)]
pub struct CreateArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: String,
    #[arg(long)]
    pub priority: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    /// Due date, YYYY-MM-DD
    #[arg(long)]
    pub due: Option<String>,
    #[arg(long)]
    pub hours: Option<f64>,
    /// Reward amount
    #[arg(long)]
    pub reward: Option<f64>,
    /// Reward token symbol (defaults to general.default_reward_token)
    #[arg(long)]
    pub token: Option<String>,
    /// Repeatable
    #[arg(long = "tag")]
    pub tags: Vec<String>,
}
