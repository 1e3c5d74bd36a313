//! Read-only directives. Neither touches storage.

use super::Execute;
use crate::error::DirectiveError;
use crate::report::Report;
use crate::storage::Storage;
use crate::task::Task;
use crate::task_list::TaskList;

const MESSAGE_LIST_HEADER: &str = "hErE'S EvErYtHiNg yOu'Ve pIlEd uP, dOnE Or nOt:";
const MESSAGE_LIST_EMPTY: &str = "nOtHiNg tO Do. sHoCkInG.";

/// Shows every task, numbered from 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListDirective;

impl Execute for ListDirective {
    fn execute(&self, _storage: &Storage, tasks: &mut TaskList) -> Result<Report, DirectiveError> {
        if tasks.is_empty() {
            return Ok(Report::new(MESSAGE_LIST_EMPTY));
        }
        let rows = tasks.iter().enumerate();
        Ok(Report::new(numbered(MESSAGE_LIST_HEADER.to_string(), rows)))
    }
}

/// Shows tasks whose description contains a keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindDirective {
    keyword: String,
}

impl FindDirective {
    pub fn new(keyword: impl Into<String>) -> Self {
        FindDirective { keyword: keyword.into() }
    }
}

impl Execute for FindDirective {
    fn execute(&self, _storage: &Storage, tasks: &mut TaskList) -> Result<Report, DirectiveError> {
        let keyword = &self.keyword;
        let hits = tasks.find(keyword);
        if hits.is_empty() {
            return Ok(Report::new(format!("nOtHiNg mAtChEs \"{keyword}\". sUrPrIsE.")));
        }
        let header = format!("i dUg tHeSe uP FoR \"{keyword}\":");
        Ok(Report::new(numbered(header, hits.into_iter())))
    }
}

fn numbered<'a>(mut out: String, rows: impl Iterator<Item = (usize, &'a Task)>) -> String {
    for (i, task) in rows {
        out.push_str(&format!("\n{}. {}", i + 1, task));
    }
    out
}
