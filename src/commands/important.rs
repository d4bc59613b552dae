use crate::query;
use crate::record::TodoRecord;
use crate::table;

/// Execute the `important` command: sort the collection by importance, then
/// show only the records with at least one `!`.
pub fn run(records: &mut [TodoRecord]) -> String {
    query::sort_by_importance(records);
    table::render_table(&query::filter_important(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts_in_place_and_filters() {
        let mut records = vec![
            TodoRecord::from_annotation("// TODO a; 2020; calm", "f"),
            TodoRecord::from_annotation("// TODO b; 2020; loud!", "f"),
            TodoRecord::from_annotation("// TODO c; 2020; louder!!", "f"),
        ];
        let out = run(&mut records);

        let users: Vec<&str> = records.iter().map(|r| r.user()).collect();
        assert_eq!(users, vec!["c", "b", "a"]);

        let rows: Vec<&str> = out.lines().skip(2).filter(|l| !l.starts_with('-')).collect();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.starts_with("  !  |")));
        assert!(rows[0].contains("louder!!"));
    }
}
