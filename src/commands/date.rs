use chrono::NaiveDate;

use crate::query;
use crate::record::TodoRecord;
use crate::table;

/// Execute the `date` command: sort the collection newest first and show the
/// records dated on or after `threshold`.
pub fn run(records: &mut [TodoRecord], threshold: NaiveDate) -> String {
    query::sort_by_date(records);
    table::render_table(&query::filter_since_date(records, threshold))
}
