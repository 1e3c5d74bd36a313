use chrono::NaiveDate;
use tracing::info;

use super::Execute;
use crate::argument::Action;
use crate::error::DirectiveError;
use crate::report::Report;
use crate::storage::Storage;
use crate::task::{Task, TaskKind};
use crate::task_list::TaskList;

/// Adds a todo, deadline or event to the task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddDirective {
    description: String,
    kind: TaskKind,
}

impl AddDirective {
    pub fn todo(description: impl Into<String>) -> Self {
        AddDirective { description: description.into(), kind: TaskKind::Todo }
    }

    pub fn deadline(description: impl Into<String>, by: NaiveDate) -> Self {
        AddDirective { description: description.into(), kind: TaskKind::Deadline(by) }
    }

    pub fn event(description: impl Into<String>, at: NaiveDate) -> Self {
        AddDirective { description: description.into(), kind: TaskKind::Event(at) }
    }

    pub fn action(&self) -> Action {
        match self.kind {
            TaskKind::Todo => Action::AddTodo,
            TaskKind::Deadline(_) => Action::AddDeadline,
            TaskKind::Event(_) => Action::AddEvent,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The `/by` or `/at` date, absent for todos.
    pub fn date(&self) -> Option<NaiveDate> {
        self.kind.date()
    }
}

impl Execute for AddDirective {
    fn execute(&self, storage: &Storage, tasks: &mut TaskList) -> Result<Report, DirectiveError> {
        let task = Task::new(self.description.clone(), self.kind);
        let message = message_added(&task, tasks.len() + 1);
        tasks.add(task);

        storage.save(tasks)?;
        info!(action = %self.action(), count = tasks.len(), "task added");

        Ok(Report::new(message))
    }
}

fn message_added(task: &Task, count: usize) -> String {
    format!("uGh, mOrE WoRk. aDdEd: {task}\nnOw yOu hAvE {count} tAsKs tO IgNoRe.")
}
