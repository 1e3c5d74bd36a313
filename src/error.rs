//! Error families raised while turning input into directives and running them.
//!
//! Parse-time problems are [`IncorrectInputError`], problems against the current
//! task list are [`ExecutionError`], and persistence failures are [`StorageError`].
//! Each carries a single human-readable message.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Malformed or incomplete user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct IncorrectInputError(pub String);

impl IncorrectInputError {
    pub fn new<S: Into<String>>(msg: S) -> Self {
        IncorrectInputError(msg.into())
    }
}

/// A well-formed directive that cannot be applied to the current task list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ExecutionError(pub String);

impl ExecutionError {
    pub fn new<S: Into<String>>(msg: S) -> Self {
        ExecutionError(msg.into())
    }
}

/// Failure to read or write the task snapshot file.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("corrupt task file {}: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot encode tasks: {0}")]
    Encode(#[from] serde_json::Error),
}

impl StorageError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StorageError::Io { path: path.into(), source }
    }
}

/// Everything a directive may fail with while executing.
#[derive(Debug, Error)]
pub enum DirectiveError {
    #[error(transparent)]
    Execution(#[from] ExecutionError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Any failure the session loop can observe for one line of input.
#[derive(Debug, Error)]
pub enum RogueError {
    #[error(transparent)]
    IncorrectInput(#[from] IncorrectInputError),

    #[error(transparent)]
    Directive(#[from] DirectiveError),
}

pub type RogueResult<T> = Result<T, RogueError>;
