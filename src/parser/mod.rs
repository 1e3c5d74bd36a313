//! Turning an [`Argument`] into a [`Directive`].
//!
//! [`parse_directive`] is the dispatcher: each action maps to exactly one parser.

pub mod add;
pub mod index;

use tracing::debug;

use crate::argument::{Action, Argument, OPTION_DESCRIPTION};
use crate::directive::{DeleteDirective, Directive, DoneDirective, FindDirective, ListDirective};
use crate::error::IncorrectInputError;

const ERROR_MISSING_KEYWORD: &str = "sToP TrYiNg tO FoOl mE. i cAn'T FiNd nOtHiNg.";

/// Build the directive an argument asks for.
pub fn parse_directive(args: &Argument) -> Result<Directive, IncorrectInputError> {
    let directive = match args.action() {
        Action::AddTodo | Action::AddDeadline | Action::AddEvent => Directive::Add(add::parse(args)?),
        Action::Done => Directive::Done(DoneDirective::new(index::parse(args)?)),
        Action::Delete => Directive::Delete(DeleteDirective::new(index::parse(args)?)),
        Action::List => Directive::List(ListDirective),
        Action::Find => Directive::Find(parse_find(args)?),
        Action::Help => Directive::Help,
        Action::Exit => Directive::Exit,
    };
    debug!(?directive, "built directive");
    Ok(directive)
}

/// Parse a raw line straight into a directive.
pub fn parse_line(input: &str) -> Result<Directive, IncorrectInputError> {
    parse_directive(&Argument::parse(input)?)
}

/// `find <keyword>` or `find /d <keyword>`.
fn parse_find(args: &Argument) -> Result<FindDirective, IncorrectInputError> {
    let keyword = match args.value() {
        "" => args.option_value(OPTION_DESCRIPTION),
        v => v,
    };
    if keyword.is_empty() {
        return Err(IncorrectInputError::new(ERROR_MISSING_KEYWORD));
    }
    Ok(FindDirective::new(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directive::AddDirective;

    #[test]
    fn test_dispatch_each_action() {
        assert_eq!(parse_line("todo /d read book").unwrap(), Directive::Add(AddDirective::todo("read book")));
        assert_eq!(parse_line("done 3").unwrap(), Directive::Done(DoneDirective::new(2)));
        assert_eq!(parse_line("delete 1").unwrap(), Directive::Delete(DeleteDirective::new(0)));
        assert_eq!(parse_line("list").unwrap(), Directive::List(ListDirective));
        assert_eq!(parse_line("find book").unwrap(), Directive::Find(FindDirective::new("book")));
        assert_eq!(parse_line("find /d book").unwrap(), Directive::Find(FindDirective::new("book")));
        assert_eq!(parse_line("help").unwrap(), Directive::Help);
        assert_eq!(parse_line("bye").unwrap(), Directive::Exit);
    }

    #[test]
    fn test_parse_errors_surface() {
        assert!(parse_line("todo").is_err());
        assert!(parse_line("deadline /d x /by 2024-13-01").is_err());
        assert!(parse_line("done").is_err());
        assert!(parse_line("find").is_err());
        assert!(parse_line("launch rockets").is_err());
    }
}
