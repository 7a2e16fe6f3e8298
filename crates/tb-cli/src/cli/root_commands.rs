use clap::{Args, Subcommand};

use crate::cli::subcommands::TaskCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP API.
    Serve(ServeArgs),
    /// Task operations.
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
    /// Transaction history of accepted and completed tasks.
    History,
}

#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Listen address (overrides server.bind from config)
    #[arg(long)]
    pub bind: Option<String>,
}
