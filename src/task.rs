//! Task data structure and related functionality.
//!
//! A `Task` is a description, a done flag and a `TaskKind`. The kind decides
//! whether the task carries a date and is fixed once the task exists.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date::format_date;

/// The three shapes a task can take.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "date", rename_all = "kebab-case")]
pub enum TaskKind {
    /// A plain item with no date.
    Todo,
    /// Something that must be finished by a date.
    Deadline(NaiveDate),
    /// Something that happens at a date.
    Event(NaiveDate),
}

impl TaskKind {
    /// Single-letter tag used in the display form.
    pub fn symbol(&self) -> char {
        match self {
            TaskKind::Todo => 'T',
            TaskKind::Deadline(_) => 'D',
            TaskKind::Event(_) => 'E',
        }
    }

    /// The date attached to the task, if any.
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            TaskKind::Todo => None,
            TaskKind::Deadline(d) | TaskKind::Event(d) => Some(*d),
        }
    }
}

/// One tracked item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    description: String,
    #[serde(default)]
    done: bool,
    kind: TaskKind,
}

impl Task {
    /// Create a task that is not yet done.
    ///
    /// Callers are expected to have rejected empty descriptions already.
    pub fn new(description: impl Into<String>, kind: TaskKind) -> Self {
        let description = description.into();
        debug_assert!(!description.is_empty(), "task description must not be empty");
        Task { description, done: false, kind }
    }

    pub fn todo(description: impl Into<String>) -> Self {
        Task::new(description, TaskKind::Todo)
    }

    pub fn deadline(description: impl Into<String>, by: NaiveDate) -> Self {
        Task::new(description, TaskKind::Deadline(by))
    }

    pub fn event(description: impl Into<String>, at: NaiveDate) -> Self {
        Task::new(description, TaskKind::Event(at))
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> TaskKind {
        self.kind
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Mark the task complete. Marking an already-done task is a no-op.
    pub fn mark_as_done(&mut self) {
        self.done = true;
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.done { 'X' } else { ' ' };
        write!(f, "[{}][{}] {}", self.kind.symbol(), status, self.description)?;
        match self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline(by) => write!(f, " (by: {})", format_date(by)),
            TaskKind::Event(at) => write!(f, " (at: {})", format_date(at)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_display_forms() {
        let mut todo = Task::todo("read book");
        assert_eq!(todo.to_string(), "[T][ ] read book");
        todo.mark_as_done();
        assert_eq!(todo.to_string(), "[T][X] read book");

        let deadline = Task::deadline("submit report", date(2024, 3, 1));
        assert_eq!(deadline.to_string(), "[D][ ] submit report (by: Mar 1 2024)");

        let event = Task::event("party", date(2024, 12, 25));
        assert_eq!(event.to_string(), "[E][ ] party (at: Dec 25 2024)");
    }

    #[test]
    fn test_mark_as_done_is_idempotent() {
        let mut t = Task::event("party", date(2024, 12, 25));
        assert!(!t.is_done());
        t.mark_as_done();
        t.mark_as_done();
        assert!(t.is_done());
        assert_eq!(t.kind(), TaskKind::Event(date(2024, 12, 25)));
    }

    #[test]
    fn test_serde_shape() {
        let t = Task::deadline("submit report", date(2024, 3, 1));
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["kind"]["type"], "deadline");
        assert_eq!(json["kind"]["date"], "2024-03-01");
        assert_eq!(json["done"], false);

        let todo: Task = serde_json::from_str(r#"{"description":"x","kind":{"type":"todo"}}"#).unwrap();
        assert_eq!(todo, Task::todo("x"));
    }
}
