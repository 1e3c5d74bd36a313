use tracing::info;

use super::{incorrect_index, Execute};
use crate::error::{DirectiveError, ExecutionError};
use crate::report::Report;
use crate::storage::Storage;
use crate::task_list::TaskList;

/// Marks a task as complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoneDirective {
    index: i64,
}

impl DoneDirective {
    /// `index` is 0-based; it may be negative if the user typed `done 0`.
    pub fn new(index: i64) -> Self {
        DoneDirective { index }
    }
}

impl Execute for DoneDirective {
    fn execute(&self, storage: &Storage, tasks: &mut TaskList) -> Result<Report, DirectiveError> {
        let task = tasks
            .get_mut(self.index)
            .ok_or_else(|| ExecutionError::new(incorrect_index(self.index)))?;
        task.mark_as_done();
        let message = format!("fInAlLy, I feLL AsLeEp wHiLe wAiTiNg fOr yOu tO FiNiSh: {task}");

        storage.save(tasks)?;
        info!(index = self.index, "task marked done");

        Ok(Report::new(message))
    }
}
