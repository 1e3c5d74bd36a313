//! Snapshot persistence for the task list.
//!
//! The whole list is written as pretty JSON on every save. Writes go to a
//! sibling temp file which is then renamed over the target, so a failed save
//! leaves the previous snapshot in place.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::StorageError;
use crate::task_list::TaskList;

/// Load/save collaborator bound to one snapshot file.
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Storage { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the task list, returning an empty list if the file doesn't exist yet.
    pub fn load(&self) -> Result<TaskList, StorageError> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "no task file yet, starting empty");
            return Ok(TaskList::default());
        }
        let buf = fs::read_to_string(&self.path).map_err(|e| StorageError::io(&self.path, e))?;
        let tasks: TaskList = serde_json::from_str(&buf).map_err(|source| StorageError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        info!(path = %self.path.display(), count = tasks.len(), "loaded tasks");
        Ok(tasks)
    }

    /// Save the full task list using atomic write (temp file + rename).
    pub fn save(&self, tasks: &TaskList) -> Result<(), StorageError> {
        let data = serde_json::to_string_pretty(tasks)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, data.as_bytes()).map_err(|e| StorageError::io(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| StorageError::io(&self.path, e))?;
        debug!(path = %self.path.display(), count = tasks.len(), "saved tasks");
        Ok(())
    }
}
