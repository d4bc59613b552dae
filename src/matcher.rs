//! Locates `// TODO ...` annotations in raw file text.
//!
//! The grammar is deliberately small and is walked by hand:
//!
//! ```text
//! "//" [" "] "TODO" separator free-text [line-terminator]
//! separator := " "+ | ":" | ": " | " : " | " "* ":" " "*
//! ```
//!
//! The marker is matched case-insensitively. An annotation never spans lines,
//! and the yielded span runs from the comment opener to the end of the line,
//! terminator included.

/// The literal marker every annotation carries.
pub const MARKER: &str = "TODO";

const OPENER: &str = "//";

/// Lazy iterator over the annotation spans of one file, in file order.
#[derive(Debug, Clone)]
pub struct Annotations<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Annotations<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        while !self.rest.is_empty() {
            let end = self.rest.find('\n').map_or(self.rest.len(), |i| i + 1);
            let (line, rest) = self.rest.split_at(end);
            self.rest = rest;

            if let Some(start) = annotation_start(line) {
                return Some(&line[start..]);
            }
        }
        None
    }
}

/// Iterate over every annotation in `text`.
/// This is a pure function with no IO.
pub fn find_annotations(text: &str) -> Annotations<'_> {
    Annotations { rest: text }
}

/// Strip the line terminator (`\n` or `\r\n`) from a line or annotation span.
pub fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Return the free text following opener, marker and separator, or `None` if
/// `annotation` does not start with a well-formed annotation head.
pub fn free_text(annotation: &str) -> Option<&str> {
    let rest = annotation.strip_prefix(OPENER)?;
    let rest = rest.strip_prefix(' ').unwrap_or(rest);
    let rest = strip_marker(rest)?;
    strip_separator(rest)
}

/// Byte offset of the leftmost comment opener on `line` that begins an
/// annotation.
fn annotation_start(line: &str) -> Option<usize> {
    let content = strip_terminator(line);
    content
        .match_indices('/')
        .map(|(idx, _)| idx)
        .find(|&idx| free_text(&content[idx..]).is_some())
}

fn strip_marker(s: &str) -> Option<&str> {
    let head = s.get(..MARKER.len())?;
    if head.eq_ignore_ascii_case(MARKER) {
        Some(&s[MARKER.len()..])
    } else {
        None
    }
}

fn strip_separator(s: &str) -> Option<&str> {
    let after_spaces = s.trim_start_matches(' ');
    match after_spaces.strip_prefix(':') {
        Some(after_colon) => Some(after_colon.trim_start_matches(' ')),
        // At least one space is required when there is no colon.
        None if after_spaces.len() < s.len() => Some(after_spaces),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(text: &str) -> Vec<&str> {
        find_annotations(text).collect()
    }

    #[test]
    fn test_matches_in_source_order() {
        let text = "// TODO alice; 2020-01-02; first\nlet x = 1;\n// TODO: second\n// TODO third\n";
        assert_eq!(
            collect(text),
            vec![
                "// TODO alice; 2020-01-02; first\n",
                "// TODO: second\n",
                "// TODO third\n",
            ]
        );
    }

    #[test]
    fn test_last_line_without_terminator() {
        assert_eq!(collect("x\n// TODO end of file"), vec!["// TODO end of file"]);
    }

    #[test]
    fn test_crlf_terminator_is_kept() {
        assert_eq!(collect("// TODO a\r\nb\r\n"), vec!["// TODO a\r\n"]);
    }

    #[test]
    fn test_inline_after_code() {
        let text = "let x = 1; // TODO: inline comment\n";
        assert_eq!(collect(text), vec!["// TODO: inline comment\n"]);
    }

    #[test]
    fn test_case_insensitive_marker() {
        assert_eq!(collect("// todo lower\n// ToDo: mixed\n").len(), 2);
    }

    #[test]
    fn test_all_separators() {
        let text = "//TODO x\n// TODO:x\n// TODO: x\n// TODO : x\n// TODO    x\n";
        assert_eq!(collect(text).len(), 5);
        for span in collect(text) {
            assert_eq!(free_text(strip_terminator(span)), Some("x"));
        }
    }

    #[test]
    fn test_marker_without_separator_is_not_a_match() {
        assert!(collect("// TODO\n").is_empty());
        assert!(collect("// TODO").is_empty());
        assert!(collect("// TODOS are piling up\n").is_empty());
        assert!(collect("// TODO_later\n").is_empty());
    }

    #[test]
    fn test_separator_with_empty_text_matches() {
        assert_eq!(collect("// TODO:\n"), vec!["// TODO:\n"]);
    }

    #[test]
    fn test_requires_line_comment_opener() {
        assert!(collect("/* TODO: block */\n").is_empty());
        assert!(collect("let todo = \"TODO: not a comment\";\n").is_empty());
        assert!(collect("//   TODO too far from the opener\n").is_empty());
    }

    #[test]
    fn test_leftmost_opener_on_line() {
        let text = "// see /// TODO x\n";
        assert_eq!(collect(text), vec!["// TODO x\n"]);
    }

    #[test]
    fn test_one_match_per_line() {
        let text = "// TODO a // TODO b\n";
        assert_eq!(collect(text), vec!["// TODO a // TODO b\n"]);
    }

    #[test]
    fn test_never_spans_lines() {
        let text = "// TODO\nnext line\n";
        assert!(collect(text).is_empty());
    }

    #[test]
    fn test_n_annotations_yield_n_matches() {
        let text: String = (0..25)
            .map(|i| format!("fn f{i}() {{}}\n// TODO user{i}; 2021-03-04; item {i}\n"))
            .collect();
        let spans = collect(&text);
        assert_eq!(spans.len(), 25);
        assert!(spans[7].contains("item 7"));
    }

    #[test]
    fn test_multibyte_text_is_safe() {
        let text = "// ünïcödé TODO x\n// TODO: 🚀 launch\n";
        assert_eq!(collect(text), vec!["// TODO: 🚀 launch\n"]);
    }

    #[test]
    fn test_edge_case_fixture() {
        let spans = collect(include_str!("../test_cases/edge_cases.js"));
        assert_eq!(spans.len(), 13);
        assert_eq!(spans[0], "// TODO you can do it!\n");
        assert_eq!(spans[2], "// TODO: inline comment\n");
        assert_eq!(spans[9], "// TODO:\n");
        assert!(spans.iter().all(|s| s.ends_with('\n')));
    }
}
