use std::cmp::Ordering;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::CommandError;
use crate::record::{self, TodoRecord};

static THRESHOLD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}(-(0[1-9]|1[0-2])(-(0[1-9]|[12]\d|3[01]))?)?$")
        .expect("THRESHOLD_RE pattern must be valid")
});

/// Key accepted by the `sort` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Importance,
    User,
    Date,
}

impl FromStr for SortKey {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "importance" => Ok(SortKey::Importance),
            "user" => Ok(SortKey::User),
            "date" => Ok(SortKey::Date),
            _ => Err(CommandError::InvalidSortKey),
        }
    }
}

/// Records carrying at least one `!`, in their current order.
pub fn filter_important(records: &[TodoRecord]) -> Vec<&TodoRecord> {
    records.iter().filter(|r| r.is_important()).collect()
}

/// Records whose user starts with `prefix`, ignoring case.
pub fn filter_by_user<'a>(records: &'a [TodoRecord], prefix: &str) -> Vec<&'a TodoRecord> {
    let prefix = prefix.to_lowercase();
    records
        .iter()
        .filter(|r| r.user().to_lowercase().starts_with(&prefix))
        .collect()
}

/// Records dated on or after `threshold`. Undated records never qualify.
pub fn filter_since_date(records: &[TodoRecord], threshold: NaiveDate) -> Vec<&TodoRecord> {
    records
        .iter()
        .filter(|r| r.timestamp().is_some_and(|t| t >= threshold))
        .collect()
}

/// Most exclamation marks first.
pub fn compare_importance(a: &TodoRecord, b: &TodoRecord) -> Ordering {
    b.exclamations_count().cmp(&a.exclamations_count())
}

/// Case-insensitive by user, blank users last.
pub fn compare_users(a: &TodoRecord, b: &TodoRecord) -> Ordering {
    let a_blank = a.user().trim().is_empty();
    let b_blank = b.user().trim().is_empty();
    match (a_blank, b_blank) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.user().to_lowercase().cmp(&b.user().to_lowercase()),
    }
}

/// Most recent first, undated records last.
pub fn compare_dates(a: &TodoRecord, b: &TodoRecord) -> Ordering {
    match (a.timestamp(), b.timestamp()) {
        (Some(ta), Some(tb)) => tb.cmp(&ta),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

// The sorts are stable: records that compare equal keep their relative order.

pub fn sort_by_importance(records: &mut [TodoRecord]) {
    records.sort_by(compare_importance);
}

pub fn sort_by_user(records: &mut [TodoRecord]) {
    records.sort_by(compare_users);
}

pub fn sort_by_date(records: &mut [TodoRecord]) {
    records.sort_by(compare_dates);
}

pub fn sort(records: &mut [TodoRecord], key: SortKey) {
    match key {
        SortKey::Importance => sort_by_importance(records),
        SortKey::User => sort_by_user(records),
        SortKey::Date => sort_by_date(records),
    }
}

/// Check that `date` is `yyyy`, `yyyy-mm` or `yyyy-mm-dd` with month 01-12
/// and day 01-31. Days are not checked against the month.
pub fn is_correct_date(date: &str) -> bool {
    THRESHOLD_RE.is_match(date)
}

/// Validate and parse a `date` command threshold.
pub fn parse_threshold(date: &str) -> Result<NaiveDate, CommandError> {
    if !is_correct_date(date) {
        return Err(CommandError::InvalidDate);
    }
    record::parse_date(date).ok_or(CommandError::InvalidDate)
}
