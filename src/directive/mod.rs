//! Executable directives.
//!
//! Every directive implements [`Execute`]; [`Directive`] is the closed set the
//! dispatcher can produce, one variant per action family.

mod add;
mod delete;
mod done;
mod query;

pub use add::AddDirective;
pub use delete::DeleteDirective;
pub use done::DoneDirective;
pub use query::{FindDirective, ListDirective};

use crate::error::DirectiveError;
use crate::report::Report;
use crate::storage::Storage;
use crate::task_list::TaskList;

const MESSAGE_HELP: &str = "yOu nEeD HeLp? fInE.\n\
    \x20 todo /d <description>\n\
    \x20 deadline /d <description> /by <YYYY-MM-DD>\n\
    \x20 event /d <description> /at <YYYY-MM-DD>\n\
    \x20 list\n\
    \x20 find <keyword>\n\
    \x20 done <task number>\n\
    \x20 delete <task number>\n\
    \x20 bye";

const MESSAGE_EXIT: &str = "fInAlLy, SoMe PeAcE AnD QuIeT. bYe.";

/// Something that runs against the task list and produces a report.
pub trait Execute {
    /// Run the directive. Mutating directives persist the whole list through
    /// `storage` before building their report.
    fn execute(&self, storage: &Storage, tasks: &mut TaskList) -> Result<Report, DirectiveError>;
}

/// A parsed, executable command derived from one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Add(AddDirective),
    Done(DoneDirective),
    Delete(DeleteDirective),
    List(ListDirective),
    Find(FindDirective),
    Help,
    Exit,
}

impl Execute for Directive {
    fn execute(&self, storage: &Storage, tasks: &mut TaskList) -> Result<Report, DirectiveError> {
        match self {
            Directive::Add(d) => d.execute(storage, tasks),
            Directive::Done(d) => d.execute(storage, tasks),
            Directive::Delete(d) => d.execute(storage, tasks),
            Directive::List(d) => d.execute(storage, tasks),
            Directive::Find(d) => d.execute(storage, tasks),
            Directive::Help => Ok(Report::new(MESSAGE_HELP)),
            Directive::Exit => Ok(Report::farewell(MESSAGE_EXIT)),
        }
    }
}

/// Format the missing-task message for a 0-based index.
pub(crate) fn incorrect_index(index: i64) -> String {
    format!("sToP TrYiNg tO FoOl mE. taSK #{} dOeS NoT ExIsT.", index + 1)
}
