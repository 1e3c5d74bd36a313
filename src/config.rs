//! Locating the task file.
//!
//! Precedence: `--data`, then `ROGUE_DATA` (both handled by clap), then
//! `$HOME/.rogue/tasks.json`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Directory under `$HOME` holding the default task file.
pub const DATA_DIR: &str = ".rogue";
/// Default task file name.
pub const DATA_FILE: &str = "tasks.json";

/// Resolve the task file path and make sure its directory exists.
pub fn resolve_data_path(explicit: Option<&Path>) -> Result<PathBuf> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => default_data_path(std::env::var_os("HOME").map(PathBuf::from)),
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create data directory {}", parent.display()))?;
    }
    Ok(path)
}

/// `<home>/.rogue/tasks.json`, or `./.rogue/tasks.json` without a home directory.
pub fn default_data_path(home: Option<PathBuf>) -> PathBuf {
    home.unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_DIR)
        .join(DATA_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path_under_home() {
        assert_eq!(
            default_data_path(Some(PathBuf::from("/home/alex"))),
            PathBuf::from("/home/alex/.rogue/tasks.json")
        );
        assert_eq!(default_data_path(None), PathBuf::from("./.rogue/tasks.json"));
    }

    #[test]
    fn test_explicit_path_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let wanted = dir.path().join("a").join("b").join("mine.json");
        let path = resolve_data_path(Some(&wanted)).unwrap();
        assert_eq!(path, wanted);
        assert!(wanted.parent().unwrap().is_dir());
        assert!(!wanted.exists());
    }
}
