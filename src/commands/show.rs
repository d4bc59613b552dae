use crate::query;
use crate::record::TodoRecord;
use crate::table;

/// Execute the `show` command: every record in the current order.
pub fn run(records: &[TodoRecord]) -> String {
    table::render_table(records)
}

/// Execute the `user` command: records whose user starts with `prefix`.
pub fn run_for_user(records: &[TodoRecord], prefix: &str) -> String {
    table::render_table(&query::filter_by_user(records, prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<TodoRecord> {
        vec![
            TodoRecord::from_annotation("// TODO Veronika; 2018-08-16; read this!", "index"),
            TodoRecord::from_annotation("// TODO pe; 2018-12-26; sort the tests", "util"),
            TodoRecord::from_annotation("// TODO: no author", "index"),
        ]
    }

    #[test]
    fn test_show_lists_everything() {
        let out = run(&records());
        assert_eq!(out.lines().count(), 3 + 3);
        assert!(out.contains("Veronika"));
        assert!(out.contains("no author"));
    }

    #[test]
    fn test_user_filter() {
        let out = run_for_user(&records(), "VER");
        assert_eq!(out.lines().count(), 1 + 3);
        assert!(out.contains("Veronika"));
        assert!(!out.contains("pe "));
    }

    #[test]
    fn test_user_filter_without_match() {
        let out = run_for_user(&records(), "zed");
        assert_eq!(out.lines().count(), 2);
    }
}
