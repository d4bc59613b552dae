//! Operator commands, one input line each.
//!
//! Parsing validates every parameter up front, so a rejected line never
//! touches the record collection.

pub mod date;
pub mod important;
pub mod show;
pub mod sort;

use chrono::NaiveDate;

use crate::error::CommandError;
use crate::query::{self, SortKey};
use crate::record::TodoRecord;

/// A parsed operator command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Exit,
    Show,
    Important,
    User(&'a str),
    Sort(SortKey),
    Date(NaiveDate),
}

/// What the session should do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Table(String),
    Exit,
}

impl<'a> Command<'a> {
    /// Parse one line: the first whitespace-separated token is the action,
    /// the second its parameter. Further tokens are ignored.
    pub fn parse(line: &'a str) -> Result<Self, CommandError> {
        let mut tokens = line.split_whitespace();
        let action = tokens.next().unwrap_or("");
        let parameter = tokens.next();

        match action {
            "exit" => Ok(Command::Exit),
            "show" => Ok(Command::Show),
            "important" => Ok(Command::Important),
            "user" => Ok(Command::User(parameter.unwrap_or(""))),
            "sort" => parameter
                .ok_or(CommandError::InvalidSortKey)?
                .parse()
                .map(Command::Sort),
            "date" => query::parse_threshold(parameter.unwrap_or("")).map(Command::Date),
            _ => Err(CommandError::UnknownCommand),
        }
    }
}

/// Run `command` against the session's records. The `important`, `sort` and
/// `date` commands leave `records` reordered.
pub fn execute(records: &mut [TodoRecord], command: Command<'_>) -> Outcome {
    match command {
        Command::Exit => Outcome::Exit,
        Command::Show => Outcome::Table(show::run(records)),
        Command::User(prefix) => Outcome::Table(show::run_for_user(records, prefix)),
        Command::Important => Outcome::Table(important::run(records)),
        Command::Sort(key) => Outcome::Table(sort::run(records, key)),
        Command::Date(threshold) => Outcome::Table(date::run(records, threshold)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_actions() {
        assert_eq!(Command::parse("exit"), Ok(Command::Exit));
        assert_eq!(Command::parse("show"), Ok(Command::Show));
        assert_eq!(Command::parse("important"), Ok(Command::Important));
        assert_eq!(Command::parse("  show  extra "), Ok(Command::Show));
    }

    #[test]
    fn test_parse_user_prefix() {
        assert_eq!(Command::parse("user al"), Ok(Command::User("al")));
        assert_eq!(Command::parse("user"), Ok(Command::User("")));
    }

    #[test]
    fn test_parse_sort_keys() {
        assert_eq!(Command::parse("sort date"), Ok(Command::Sort(SortKey::Date)));
        assert_eq!(Command::parse("sort"), Err(CommandError::InvalidSortKey));
        assert_eq!(Command::parse("sort size"), Err(CommandError::InvalidSortKey));
    }

    #[test]
    fn test_parse_date_threshold() {
        assert_eq!(
            Command::parse("date 2020-05"),
            Ok(Command::Date(NaiveDate::from_ymd_opt(2020, 5, 1).unwrap()))
        );
        assert_eq!(Command::parse("date"), Err(CommandError::InvalidDate));
        assert_eq!(Command::parse("date 20-05-15"), Err(CommandError::InvalidDate));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(Command::parse("list"), Err(CommandError::UnknownCommand));
        assert_eq!(Command::parse(""), Err(CommandError::UnknownCommand));
        assert_eq!(Command::parse("SHOW"), Err(CommandError::UnknownCommand));
    }

    #[test]
    fn test_execute_exit() {
        let mut records: Vec<TodoRecord> = Vec::new();
        assert_eq!(execute(&mut records, Command::Exit), Outcome::Exit);
    }
}
