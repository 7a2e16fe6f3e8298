use clap::ValueEnum;

/// How command results are printed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed response envelope, as returned by the HTTP API.
    Json,
    /// Aligned columns of the response rows.
    Table,
    /// Single-line response envelope.
    Raw,
}

/// Flags shared by every `tb` command, accepted before or after the subcommand.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    /// Row cap for `task list` and `history`; unset prints every row.
    pub limit: Option<u32>,
    pub quiet: bool,
    pub verbose: bool,
    /// Database path overriding `database.path`.
    pub db: Option<String>,
    /// Wallet address acting as the caller (`--as`).
    pub caller: Option<String>,
}
