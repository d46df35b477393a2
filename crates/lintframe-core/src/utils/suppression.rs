//! Inline suppression comments.
//!
//! A comment on the offending line or the line above silences rules:
//! ```text
//! // lintframe: ignore(LineLength, TrailingWhitespace)
//! // lintframe: ignore(all)
//! ```

use std::collections::{BTreeMap, BTreeSet};

const DIRECTIVE: &str = "lintframe:";

/// Suppression directives found in one unit, keyed by 1-indexed line.
#[derive(Debug, Clone, Default)]
pub struct Suppressions {
    by_line: BTreeMap<usize, BTreeSet<String>>,
}

impl Suppressions {
    /// Scans `content` for suppression comments.
    #[must_use]
    pub fn scan(content: &str) -> Self {
        let by_line = content
            .lines()
            .enumerate()
            .filter_map(|(i, line)| parse_directive(line).map(|names| (i + 1, names)))
            .collect();
        Self { by_line }
    }

    /// Whether `rule` is silenced at `line`.
    #[must_use]
    pub fn is_suppressed(&self, rule: &str, line: usize) -> bool {
        [line.saturating_sub(1), line]
            .iter()
            .filter_map(|l| self.by_line.get(l))
            .any(|names| names.contains(rule) || names.contains("all"))
    }

    /// Every `(line, name)` pair mentioned by a directive.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &str)> {
        self.by_line
            .iter()
            .flat_map(|(line, names)| names.iter().map(move |n| (*line, n.as_str())))
    }

    /// Whether no directives were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_line.is_empty()
    }
}

/// Parses the first `// lintframe: ignore(...)` comment on `line`.
///
/// Other `//` sequences, such as the one in `https://`, are skipped.
fn parse_directive(line: &str) -> Option<BTreeSet<String>> {
    let body = line.match_indices(DIRECTIVE).find_map(|(i, _)| {
        line[..i]
            .trim_end()
            .ends_with("//")
            .then(|| line[i + DIRECTIVE.len()..].trim())
    })?;
    let list = body.strip_prefix("ignore(")?;
    let list = &list[..list.find(')')?];

    let names: BTreeSet<String> = list
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();
    (!names.is_empty()).then_some(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rule_list() {
        let names = parse_directive("// lintframe: ignore(LineLength, AvoidUnwrap)").unwrap();
        assert!(names.contains("LineLength"));
        assert!(names.contains("AvoidUnwrap"));
    }

    #[test]
    fn ignores_other_comments() {
        assert!(parse_directive("// just a comment").is_none());
        assert!(parse_directive("// lintframe: ignore()").is_none());
        assert!(parse_directive("let x = 1;").is_none());
    }

    #[test]
    fn trailing_comment_applies_to_its_line() {
        let content = "let a = 1;\nlet b = 2; // lintframe: ignore(LineLength)\nlet c = 3;";
        let s = Suppressions::scan(content);
        assert!(s.is_suppressed("LineLength", 2));
        assert!(s.is_suppressed("LineLength", 3));
        assert!(!s.is_suppressed("LineLength", 1));
        assert!(!s.is_suppressed("TrailingWhitespace", 2));
    }

    #[test]
    fn url_before_trailing_directive() {
        let line = concat!(
            r#"let u = "https://example.com/a/very/long/path"; "#,
            "// lintframe: ignore(LineLength)"
        );
        let names = parse_directive(line).unwrap();
        assert_eq!(names.into_iter().collect::<Vec<_>>(), ["LineLength"]);
        assert!(parse_directive(r#"let u = "https://example.com";"#).is_none());
    }

    #[test]
    fn all_silences_everything() {
        let s = Suppressions::scan("// lintframe: ignore(all)\nlet x = 1;");
        assert!(s.is_suppressed("Anything", 2));
        assert_eq!(s.entries().collect::<Vec<_>>(), vec![(1, "all")]);
    }
}
