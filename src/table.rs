//! Fixed-width text table for TODO records.
//!
//! Each text column is as wide as its widest value, clamped to the column's
//! bounds. Longer values are cut and end in `...`. Every cell carries a
//! two-space margin on both sides; the importance marker column is always
//! five characters wide.

use std::borrow::Borrow;

use crate::record::TodoRecord;

/// Minimum and maximum content width of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnBounds {
    pub min: usize,
    pub max: usize,
}

impl ColumnBounds {
    const fn new(min: usize, max: usize) -> Self {
        ColumnBounds { min, max }
    }

    pub fn clamp(self, len: usize) -> usize {
        len.clamp(self.min, self.max)
    }
}

pub const USER_BOUNDS: ColumnBounds = ColumnBounds::new(4, 10);
pub const DATE_BOUNDS: ColumnBounds = ColumnBounds::new(4, 10);
pub const COMMENT_BOUNDS: ColumnBounds = ColumnBounds::new(7, 50);
pub const FILENAME_BOUNDS: ColumnBounds = ColumnBounds::new(8, 15);

const ELLIPSIS: &str = "...";
const MARK_IMPORTANT: &str = "  !  ";
const MARK_PLAIN: &str = "     ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Widths {
    user: usize,
    date: usize,
    comment: usize,
    filename: usize,
}

impl Widths {
    fn measure<R: Borrow<TodoRecord>>(records: &[R]) -> Self {
        let widest = |field: fn(&TodoRecord) -> &str| {
            records
                .iter()
                .map(|r| field(r.borrow()).chars().count())
                .max()
                .unwrap_or(0)
        };

        Widths {
            user: USER_BOUNDS.clamp(widest(TodoRecord::user)),
            date: DATE_BOUNDS.clamp(widest(TodoRecord::date)),
            comment: COMMENT_BOUNDS.clamp(widest(TodoRecord::comment)),
            filename: FILENAME_BOUNDS.clamp(widest(TodoRecord::filename)),
        }
    }

    fn line(&self, important: bool, user: &str, date: &str, comment: &str, filename: &str) -> String {
        let mark = if important { MARK_IMPORTANT } else { MARK_PLAIN };
        format!(
            "{}|{}|{}|{}|{}\n",
            mark,
            cell(self.user, user),
            cell(self.date, date),
            cell(self.comment, comment),
            cell(self.filename, filename)
        )
    }

    fn header(&self) -> String {
        self.line(false, "user", "date", "comment", "fileName")
    }
}

fn cell(width: usize, text: &str) -> String {
    if text.chars().count() > width {
        let kept: String = text.chars().take(width.saturating_sub(ELLIPSIS.len())).collect();
        format!("  {kept}{ELLIPSIS}  ")
    } else {
        format!("  {text:<width$}  ")
    }
}

/// Render `records` in their given order.
///
/// The header is followed by a dashed delimiter. A second delimiter closes
/// the data rows, and is left out when there are none.
pub fn render_table<R: Borrow<TodoRecord>>(records: &[R]) -> String {
    let widths = Widths::measure(records);
    let header = widths.header();
    let delimiter = format!("{}\n", "-".repeat(header.chars().count() - 1));

    let mut table = header;
    table.push_str(&delimiter);
    for record in records {
        let r = record.borrow();
        table.push_str(&widths.line(r.is_important(), r.user(), r.date(), r.comment(), r.filename()));
    }
    if !records.is_empty() {
        table.push_str(&delimiter);
    }
    table
}
