//! The read, parse, execute, report loop.
//!
//! Each line is handled independently; the task list is the only state carried
//! between lines. Every failure is shown to the user and the loop continues.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::directive::Execute;
use crate::error::{DirectiveError, RogueError, RogueResult};
use crate::parser::parse_line;
use crate::report::Report;
use crate::storage::Storage;
use crate::task_list::TaskList;
use crate::ui::Ui;

/// A running session: the storage collaborator plus the task list it owns.
#[derive(Debug)]
pub struct Session {
    storage: Storage,
    tasks: TaskList,
}

impl Session {
    pub fn new(storage: Storage, tasks: TaskList) -> Self {
        Session { storage, tasks }
    }

    /// Open a session over the snapshot at `storage`'s path.
    pub fn open(storage: Storage) -> Result<Self, crate::error::StorageError> {
        let tasks = storage.load()?;
        Ok(Session::new(storage, tasks))
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// Parse and execute one line of input.
    pub fn handle_line(&mut self, line: &str) -> RogueResult<Report> {
        let directive = parse_line(line)?;
        let report = directive.execute(&self.storage, &mut self.tasks)?;
        Ok(report)
    }

    /// Read lines until `bye` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, ui: &mut Ui<R, W>, prompt: bool) -> io::Result<()> {
        ui.show_greeting()?;
        while let Some(line) = ui.read_line(prompt)? {
            if line.trim().is_empty() {
                continue;
            }
            match self.handle_line(&line) {
                Ok(report) => {
                    ui.show_report(&report)?;
                    if report.is_exit() {
                        debug!("session ended by user");
                        return Ok(());
                    }
                }
                Err(e) => {
                    log_failure(&e);
                    ui.show_error(&user_message(&e))?;
                }
            }
        }
        debug!("input closed");
        Ok(())
    }
}

/// The text shown for a failed line.
pub fn user_message(error: &RogueError) -> String {
    match error {
        RogueError::Directive(DirectiveError::Storage(e)) => {
            format!("wElL, ThAt wEnT BaDlY. cOuLdN'T SaVe yOuR PrEcIoUs tAsKs: {e}")
        }
        other => other.to_string(),
    }
}

fn log_failure(error: &RogueError) {
    match error {
        RogueError::Directive(DirectiveError::Storage(e)) => warn!(error = %e, "save failed"),
        other => debug!(error = %other, "line rejected"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directive::test_support::temp_storage;

    fn run_script(session: &mut Session, script: &str) -> String {
        let mut ui = Ui::new(script.as_bytes(), Vec::new(), false);
        session.run(&mut ui, false).unwrap();
        String::from_utf8(ui.into_output()).unwrap()
    }

    #[test]
    fn test_full_session() {
        let (_dir, storage) = temp_storage();
        let mut session = Session::open(storage.clone()).unwrap();

        let out = run_script(
            &mut session,
            "todo /d read book\n\
             deadline /d submit report /by 2024-03-01\n\
             \n\
             deadline /d submit report /by tomorrow\n\
             done 1\n\
             done 7\n\
             list\n\
             bye\n\
             todo /d never reached\n",
        );

        assert!(out.contains("[T][X] read book"));
        assert!(out.contains("yEaR-MoNtH-DaY"));
        assert!(out.contains("taSK #7 dOeS NoT ExIsT"));
        assert!(out.contains("2. [D][ ] submit report (by: Mar 1 2024)"));
        assert!(!out.contains("never reached"));

        assert_eq!(session.tasks().len(), 2);
        assert_eq!(storage.load().unwrap(), *session.tasks());
    }

    #[test]
    fn test_session_reloads_previous_snapshot() {
        let (_dir, storage) = temp_storage();
        let mut first = Session::open(storage.clone()).unwrap();
        first.handle_line("event /d party /at 2024-12-25").unwrap();

        let mut second = Session::open(storage).unwrap();
        let report = second.handle_line("find PARTY").unwrap();
        assert!(report.message().contains("1. [E][ ] party (at: Dec 25 2024)"));
    }

    #[test]
    fn test_handle_line_error_kinds() {
        let (_dir, storage) = temp_storage();
        let mut session = Session::open(storage).unwrap();

        assert!(matches!(session.handle_line("todo /d"), Err(RogueError::IncorrectInput(_))));
        assert!(matches!(
            session.handle_line("delete 1"),
            Err(RogueError::Directive(DirectiveError::Execution(_)))
        ));
    }

    #[test]
    fn test_storage_failure_keeps_session_alive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        std::fs::create_dir(&path).unwrap();
        let mut session = Session::new(Storage::new(&path), TaskList::new());

        let out = run_script(&mut session, "todo /d read book\nlist\n");

        assert!(out.contains("cOuLdN'T SaVe"));
        assert!(!out.contains("aDdEd"));
        assert!(out.contains("1. [T][ ] read book"));
    }
}
