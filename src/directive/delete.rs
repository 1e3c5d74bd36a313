use tracing::info;

use super::{incorrect_index, Execute};
use crate::error::{DirectiveError, ExecutionError};
use crate::report::Report;
use crate::storage::Storage;
use crate::task::Task;
use crate::task_list::TaskList;

/// Removes a task from the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteDirective {
    index: i64,
}

impl DeleteDirective {
    /// `index` is 0-based.
    pub fn new(index: i64) -> Self {
        DeleteDirective { index }
    }
}

impl Execute for DeleteDirective {
    fn execute(&self, storage: &Storage, tasks: &mut TaskList) -> Result<Report, DirectiveError> {
        let removed = tasks
            .remove(self.index)
            .ok_or_else(|| ExecutionError::new(incorrect_index(self.index)))?;

        storage.save(tasks)?;
        info!(index = self.index, remaining = tasks.len(), "task deleted");

        Ok(Report::new(message_removed(&removed, tasks.len())))
    }
}

fn message_removed(task: &Task, remaining: usize) -> String {
    format!("gIvInG Up aLrEaDy? rEmOvEd: {task}\n{remaining} tAsKs LeFt.")
}
