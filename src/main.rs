//! # Rogue - a task tracker with an attitude
//!
//! Rogue keeps a single list of todos, deadlines and events, driven by short
//! textual directives:
//!
//! ```text
//! todo /d read book
//! deadline /d submit report /by 2024-03-01
//! event /d team dinner /at 2024-03-08
//! list
//! find book
//! done 1
//! delete 2
//! bye
//! ```
//!
//! Each line is tokenized into an [`argument::Argument`], turned into a
//! [`directive::Directive`] by the dispatcher in [`parser`], and executed
//! against the [`task_list::TaskList`]. Every mutation rewrites the whole list
//! to a JSON snapshot (`~/.rogue/tasks.json` by default).
//!
//! ## Usage
//!
//! ```bash
//! # Interactive session
//! rogue
//!
//! # One-shot directive
//! rogue run todo /d water plants
//!
//! # Use another task file
//! rogue --data ./work.json list
//! ```

use std::io::{IsTerminal, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub mod argument;
pub mod cli;
pub mod config;
pub mod date;
pub mod directive;
pub mod error;
pub mod parser;
pub mod report;
pub mod session;
pub mod storage;
pub mod task;
pub mod task_list;
pub mod ui;

use cli::{Cli, Commands};
use session::{user_message, Session};
use storage::Storage;
use ui::Ui;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        // Needs no task file, so nothing is resolved or created for it.
        Some(Commands::Completions { shell }) => cmd_completions(shell, &mut std::io::stdout()),
        Some(Commands::Run { words }) => {
            let mut session = open_session(cli.data.as_deref())?;
            let mut ui = Ui::stdio(std::io::stdout().is_terminal());
            match session.handle_line(&words.join(" ")) {
                Ok(report) => ui.show_report(&report)?,
                Err(e) => {
                    ui.show_error(&user_message(&e))?;
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Shell) | None => {
            let mut session = open_session(cli.data.as_deref())?;
            let interactive = std::io::stdin().is_terminal();
            let mut ui = Ui::stdio(std::io::stdout().is_terminal());
            session.run(&mut ui, interactive)?;
        }
    }
    Ok(())
}

/// Generate shell completion scripts.
fn cmd_completions(shell: Shell, out: &mut dyn Write) {
    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, out);
}

/// Resolve the task file and load it into a new session.
fn open_session(explicit: Option<&Path>) -> Result<Session> {
    let data_path = config::resolve_data_path(explicit)?;
    debug!(path = %data_path.display(), "using task file");
    Session::open(Storage::new(&data_path))
        .with_context(|| format!("refusing to start with unreadable task file {}", data_path.display()))
}

/// Logs go to stderr so they never mix with reports. Defaults to `warn`.
fn init_logging(verbose: bool) {
    let default = if verbose { "rogue=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completions_need_no_task_file() {
        let mut out = Vec::new();
        cmd_completions(Shell::Bash, &mut out);
        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("rogue"));
    }

    #[test]
    fn test_open_session_on_fresh_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("work").join("tasks.json");
        let session = open_session(Some(&path)).unwrap();
        assert!(session.tasks().is_empty());
        assert!(path.parent().unwrap().is_dir());
    }

    #[test]
    fn test_open_session_refuses_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        std::fs::write(&path, "{ nope").unwrap();
        let err = open_session(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("refusing to start"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ nope");
    }
}
