//! The user-facing result of executing a directive.

use std::fmt;

/// A message for the user, plus whether the session should end after showing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    message: String,
    exit: bool,
}

impl Report {
    pub fn new(message: impl Into<String>) -> Self {
        Report { message: message.into(), exit: false }
    }

    /// A report after which the session stops reading input.
    pub fn farewell(message: impl Into<String>) -> Self {
        Report { message: message.into(), exit: true }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_exit(&self) -> bool {
        self.exit
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
