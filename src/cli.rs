use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// A task tracker that judges you.
/// Tasks are stored in ~/.rogue/tasks.json unless --data or ROGUE_DATA says otherwise.
#[derive(Parser)]
#[command(name = "rogue", version, about = "Sarcastic directive-driven task tracker")]
pub struct Cli {
    /// Path to the JSON task file.
    #[arg(long, global = true, env = "ROGUE_DATA")]
    pub data: Option<PathBuf>,

    /// Log debug output to stderr (RUST_LOG overrides).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive session (default).
    Shell,

    /// Run a single directive and exit, e.g. `rogue run todo /d read book`.
    Run {
        /// The directive words.
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
