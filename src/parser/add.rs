//! Validation of `todo`, `deadline` and `event` arguments.

use crate::argument::{Action, Argument, OPTION_DEADLINE_DATE, OPTION_DESCRIPTION, OPTION_EVENT_DATE};
use crate::date::parse_string_to_date;
use crate::directive::AddDirective;
use crate::error::IncorrectInputError;

const ERROR_MISSING_DESC: &str = "sToP TrYiNg tO FoOl mE. a taSK MuSt bE FoLlOwEd bY A DesCrIpTiOn.";
const ERROR_INCORRECT_DATE_FORMAT: &str = "sToP TrYiNg tO FoOl mE. dAtE MuSt bE In yEaR-MoNtH-DaY FoRmAt.";
const ERROR_INVALID_TASK: &str = "sToP TrYiNg tO FoOl mE. sUcH A TaSk cAnNoT Be aDdEd.";

/// Validate an add-type argument and build its directive.
///
/// Requires a non-empty `/d`; deadlines also need `/by` and events `/at`, each
/// a `YYYY-MM-DD` date.
pub fn parse(args: &Argument) -> Result<AddDirective, IncorrectInputError> {
    let description = args.option_value(OPTION_DESCRIPTION);
    if description.is_empty() {
        return Err(IncorrectInputError::new(ERROR_MISSING_DESC));
    }

    match args.action() {
        Action::AddTodo => Ok(AddDirective::todo(description)),
        Action::AddDeadline => {
            let by = parse_date(args, OPTION_DEADLINE_DATE)?;
            Ok(AddDirective::deadline(description, by))
        }
        Action::AddEvent => {
            let at = parse_date(args, OPTION_EVENT_DATE)?;
            Ok(AddDirective::event(description, at))
        }
        // Not reachable through the dispatcher.
        _ => Err(IncorrectInputError::new(ERROR_INVALID_TASK)),
    }
}

fn parse_date(args: &Argument, flag: &str) -> Result<chrono::NaiveDate, IncorrectInputError> {
    let raw = args.option_value(flag);
    if raw.is_empty() {
        return Err(IncorrectInputError::new(format!(
            "sToP TrYiNg tO FoOl mE. tHe dAtE MuSt cOmE RiGhT AfTeR \"{flag}\"."
        )));
    }
    parse_string_to_date(raw).map_err(|_| IncorrectInputError::new(ERROR_INCORRECT_DATE_FORMAT))
}
