use chrono::{Days, NaiveDate};

use crate::matcher;

/// A parsed TODO annotation together with the file it came from.
///
/// Fields are fixed at construction; queries only reorder or filter records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRecord {
    text: String,
    user: String,
    date: String,
    timestamp: Option<NaiveDate>,
    exclamations_count: usize,
    comment: String,
    filename: String,
}

impl TodoRecord {
    /// Build a record from one annotation span as yielded by
    /// [`matcher::find_annotations`].
    ///
    /// Never fails: fields that cannot be extracted are left empty and an
    /// unreadable date leaves the timestamp unset.
    pub fn from_annotation(text: &str, filename: &str) -> Self {
        let line = matcher::strip_terminator(text);
        let free = matcher::free_text(line).unwrap_or_else(|| line.trim());
        let fields = Fields::split(free);

        TodoRecord {
            text: text.to_string(),
            user: fields.user.to_string(),
            date: fields.date.to_string(),
            timestamp: parse_date(fields.date),
            exclamations_count: text.matches('!').count(),
            comment: fields.comment.to_string(),
            filename: filename.to_string(),
        }
    }

    /// The raw annotation span, line terminator included.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    /// The parsed date, `None` when `date` is empty or unreadable.
    pub fn timestamp(&self) -> Option<NaiveDate> {
        self.timestamp
    }

    pub fn exclamations_count(&self) -> usize {
        self.exclamations_count
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// File stem of the source file.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn is_important(&self) -> bool {
        self.exclamations_count > 0
    }
}

/// The `user; date; comment` split of an annotation's free text.
struct Fields<'a> {
    user: &'a str,
    date: &'a str,
    comment: &'a str,
}

impl<'a> Fields<'a> {
    fn split(free: &'a str) -> Self {
        let Some((user, tail)) = free.split_once(';') else {
            return Fields {
                user: "",
                date: "",
                comment: free.trim(),
            };
        };

        match tail.split_once(';') {
            Some((date, comment)) => Fields {
                user: user.trim(),
                date: date.trim(),
                comment: comment.trim(),
            },
            // `TODO 2021-06-01; text` still reads as dated text.
            None if ends_with_full_date(user) => Fields {
                user: user.trim(),
                date: "",
                comment: tail.trim(),
            },
            None => Fields {
                user: user.trim(),
                date: "",
                comment: free.trim(),
            },
        }
    }
}

fn ends_with_full_date(s: &str) -> bool {
    let s = s.trim_end();
    let Some(tail) = s.len().checked_sub(10).and_then(|start| s.get(start..)) else {
        return false;
    };
    tail.bytes().enumerate().all(|(i, b)| match i {
        4 | 7 => b == b'-',
        _ => b.is_ascii_digit(),
    })
}

/// Parse a `yyyy`, `yyyy-mm` or `yyyy-mm-dd` date.
///
/// Missing parts default to the first month/day. Days up to 31 are accepted
/// for every month and roll over into the next one, so `2021-02-30` is
/// March 2nd.
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    let mut parts = date.trim().split('-');
    let year = parse_digits(parts.next()?, 4)?;
    let month = parts.next().map_or(Some(1), |m| parse_digits(m, 2))?;
    let day = parts.next().map_or(Some(1), |d| parse_digits(d, 2))?;

    if parts.next().is_some() || !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }

    let year = i32::try_from(year).ok()?;
    NaiveDate::from_ymd_opt(year, month, 1)?.checked_add_days(Days::new(u64::from(day - 1)))
}

fn parse_digits(s: &str, width: usize) -> Option<u32> {
    if s.len() == width && s.bytes().all(|b| b.is_ascii_digit()) {
        s.parse().ok()
    } else {
        None
    }
}
