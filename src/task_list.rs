//! The ordered, in-memory list of tasks owned by a session.
//!
//! Positions are 0-based here. User-facing numbers are 1-based and the
//! conversion happens in the directive parsers and messages.

use serde::{Deserialize, Serialize};

use crate::task::Task;

/// In-memory collection of tasks, persisted as a whole after every mutation.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        TaskList::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Append a task and return its 0-based position.
    pub fn add(&mut self, task: Task) -> usize {
        self.tasks.push(task);
        self.tasks.len() - 1
    }

    /// Get a task by position. Negative or too-large positions yield `None`.
    pub fn get(&self, index: i64) -> Option<&Task> {
        let idx = usize::try_from(index).ok()?;
        self.tasks.get(idx)
    }

    /// Get a mutable reference to a task by position.
    pub fn get_mut(&mut self, index: i64) -> Option<&mut Task> {
        let idx = usize::try_from(index).ok()?;
        self.tasks.get_mut(idx)
    }

    /// Remove and return the task at a position, shifting later tasks down.
    pub fn remove(&mut self, index: i64) -> Option<Task> {
        let idx = usize::try_from(index).ok()?;
        if idx < self.tasks.len() {
            Some(self.tasks.remove(idx))
        } else {
            None
        }
    }

    /// Tasks whose description contains `keyword`, ignoring case, with their positions.
    pub fn find(&self, keyword: &str) -> Vec<(usize, &Task)> {
        let needle = keyword.to_lowercase();
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.description().to_lowercase().contains(&needle))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        TaskList { tasks }
    }
}
