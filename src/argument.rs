//! Tokenizing a raw input line into an [`Action`] and its options.
//!
//! A line looks like `deadline /d submit report /by 2024-03-01`: the first word
//! names the action, text up to the first recognised flag is the positional
//! value, and each flag owns the words that follow it.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::error::IncorrectInputError;

/// Option carrying a task description.
pub const OPTION_DESCRIPTION: &str = "/d";
/// Option carrying a deadline date.
pub const OPTION_DEADLINE_DATE: &str = "/by";
/// Option carrying an event date.
pub const OPTION_EVENT_DATE: &str = "/at";

/// Flags the tokenizer splits on. Any other `/word` is plain text.
pub const RECOGNISED_OPTIONS: [&str; 3] = [OPTION_DESCRIPTION, OPTION_DEADLINE_DATE, OPTION_EVENT_DATE];

const ERROR_EMPTY_INPUT: &str = "sAy SoMeThInG. i dOn'T ReAd mInDs.";

/// The kind of directive a line asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    AddTodo,
    AddDeadline,
    AddEvent,
    Done,
    Delete,
    List,
    Find,
    Help,
    Exit,
}

impl Action {
    /// Look up an action by its keyword, ignoring case.
    pub fn from_keyword(keyword: &str) -> Option<Action> {
        let action = match keyword.to_lowercase().as_str() {
            "todo" => Action::AddTodo,
            "deadline" => Action::AddDeadline,
            "event" => Action::AddEvent,
            "done" => Action::Done,
            "delete" => Action::Delete,
            "list" => Action::List,
            "find" => Action::Find,
            "help" => Action::Help,
            "bye" | "exit" => Action::Exit,
            _ => return None,
        };
        Some(action)
    }

    /// Canonical keyword for this action.
    pub fn keyword(&self) -> &'static str {
        match self {
            Action::AddTodo => "todo",
            Action::AddDeadline => "deadline",
            Action::AddEvent => "event",
            Action::Done => "done",
            Action::Delete => "delete",
            Action::List => "list",
            Action::Find => "find",
            Action::Help => "help",
            Action::Exit => "bye",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// One input line split into its action, positional value and options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    action: Action,
    value: String,
    options: HashMap<String, String>,
}

impl Argument {
    pub fn new(action: Action) -> Self {
        Argument { action, value: String::new(), options: HashMap::new() }
    }

    /// Builder used by tests and callers that already have structured input.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_option(mut self, flag: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(flag.into(), value.into());
        self
    }

    pub fn action(&self) -> Action {
        self.action
    }

    /// Text between the action keyword and the first option, or `""`.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Value following `flag`, or `""` when the flag was not supplied.
    pub fn option_value(&self, flag: &str) -> &str {
        self.options.get(flag).map(String::as_str).unwrap_or("")
    }

    /// Parse one raw input line.
    pub fn parse(input: &str) -> Result<Argument, IncorrectInputError> {
        let mut words = input.split_whitespace();
        let Some(keyword) = words.next() else {
            return Err(IncorrectInputError::new(ERROR_EMPTY_INPUT));
        };
        let action = Action::from_keyword(keyword).ok_or_else(|| {
            IncorrectInputError::new(format!("sToP TrYiNg tO FoOl mE. \"{keyword}\" iS NoT A ThInG I Do."))
        })?;

        let mut argument = Argument::new(action);
        let mut current: Option<&str> = None;
        let mut buffer: Vec<&str> = Vec::new();

        for word in words {
            if RECOGNISED_OPTIONS.contains(&word) {
                argument.store(current, buffer.join(" "));
                buffer.clear();
                current = Some(word);
            } else {
                buffer.push(word);
            }
        }
        argument.store(current, buffer.join(" "));

        debug!(?argument, "parsed input");
        Ok(argument)
    }

    fn store(&mut self, flag: Option<&str>, text: String) {
        match flag {
            None => self.value = text,
            // A repeated flag overwrites the earlier value.
            Some(flag) => {
                self.options.insert(flag.to_string(), text);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_deadline_line() {
        let arg = Argument::parse("deadline /d submit   report /by 2024-03-01").unwrap();
        assert_eq!(arg.action(), Action::AddDeadline);
        assert_eq!(arg.value(), "");
        assert_eq!(arg.option_value(OPTION_DESCRIPTION), "submit report");
        assert_eq!(arg.option_value(OPTION_DEADLINE_DATE), "2024-03-01");
        assert_eq!(arg.option_value(OPTION_EVENT_DATE), "");
    }

    #[test]
    fn test_positional_value() {
        let arg = Argument::parse("DONE 2").unwrap();
        assert_eq!(arg.action(), Action::Done);
        assert_eq!(arg.value(), "2");

        let arg = Argument::parse("find old book").unwrap();
        assert_eq!(arg.value(), "old book");
    }

    #[test]
    fn test_absent_and_empty_options_read_as_empty() {
        let arg = Argument::parse("todo /d").unwrap();
        assert_eq!(arg.option_value(OPTION_DESCRIPTION), "");
        let arg = Argument::parse("todo").unwrap();
        assert_eq!(arg.option_value(OPTION_DESCRIPTION), "");
        assert_eq!(arg.option_value("/nope"), "");
    }

    #[test]
    fn test_unrecognised_flags_are_text() {
        let arg = Argument::parse("todo /d fix /usr/bin perms").unwrap();
        assert_eq!(arg.option_value(OPTION_DESCRIPTION), "fix /usr/bin perms");
    }

    #[test]
    fn test_repeated_flag_keeps_last() {
        let arg = Argument::parse("event /d party /at 2024-01-01 /at 2024-02-02").unwrap();
        assert_eq!(arg.option_value(OPTION_EVENT_DATE), "2024-02-02");
    }

    #[test]
    fn test_bad_input_is_rejected() {
        assert!(Argument::parse("   ").is_err());
        let err = Argument::parse("dance /d now").unwrap_err();
        assert!(err.to_string().contains("\"dance\""));
        let err = Argument::parse("{} now").unwrap_err();
        assert!(err.to_string().contains("\"{}\""));
    }

    #[test]
    fn test_exit_aliases() {
        assert_eq!(Action::from_keyword("bye"), Some(Action::Exit));
        assert_eq!(Action::from_keyword("Exit"), Some(Action::Exit));
        assert_eq!(Action::from_keyword("ls"), None);
    }
}
