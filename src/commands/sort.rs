use crate::query::{self, SortKey};
use crate::record::TodoRecord;
use crate::table;

/// Execute the `sort` command: reorder the collection and show all of it.
pub fn run(records: &mut [TodoRecord], key: SortKey) -> String {
    query::sort(records, key);
    table::render_table(records)
}
