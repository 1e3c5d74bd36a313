//! Parsing the task number taken by `done` and `delete`.

use crate::argument::Argument;
use crate::error::IncorrectInputError;

const ERROR_MISSING_INDEX: &str = "sToP TrYiNg tO FoOl mE. wHiCh tAsK? gIvE Me a nUmBeR.";

/// Read the 1-based task number from the positional value and return it 0-based.
///
/// Range is not checked here; `0` becomes `-1` and is rejected when executed.
pub fn parse(args: &Argument) -> Result<i64, IncorrectInputError> {
    let raw = args.value();
    if raw.is_empty() {
        return Err(IncorrectInputError::new(ERROR_MISSING_INDEX));
    }
    let number: i64 = raw.parse().map_err(|_| not_a_number(raw))?;
    number.checked_sub(1).ok_or_else(|| not_a_number(raw))
}

fn not_a_number(raw: &str) -> IncorrectInputError {
    IncorrectInputError::new(format!("sToP TrYiNg tO FoOl mE. \"{raw}\" iS NoT A TaSk nUmBeR."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argument::Action;

    #[test]
    fn test_one_based_to_zero_based() {
        assert_eq!(parse(&Argument::new(Action::Done).with_value("1")).unwrap(), 0);
        assert_eq!(parse(&Argument::new(Action::Done).with_value("12")).unwrap(), 11);
        assert_eq!(parse(&Argument::new(Action::Delete).with_value("0")).unwrap(), -1);
        assert_eq!(parse(&Argument::new(Action::Delete).with_value("-4")).unwrap(), -5);
    }

    #[test]
    fn test_rejects_missing_and_garbage() {
        assert_eq!(parse(&Argument::new(Action::Done)).unwrap_err().0, ERROR_MISSING_INDEX);
        let err = parse(&Argument::new(Action::Done).with_value("two")).unwrap_err();
        assert!(err.to_string().contains("\"two\""));
        let err = parse(&Argument::new(Action::Done).with_value("{}")).unwrap_err();
        assert!(err.to_string().contains("\"{}\""));
        assert!(parse(&Argument::new(Action::Done).with_value(i64::MIN.to_string())).is_err());
    }
}
