//! Context handed to rules while a unit is analysed.

use std::path::Path;

use crate::source::SourceUnit;
use crate::types::Location;

/// Read-only view of the unit being analysed.
///
/// Carries a line table for offset math and, for Rust units that parse,
/// the `syn` syntax tree.
#[derive(Debug)]
pub struct UnitContext<'a> {
    /// The unit itself.
    pub unit: &'a SourceUnit,
    /// Parsed syntax tree, for Rust units that parse.
    pub ast: Option<syn::File>,
    /// Whether this unit is detected as test code.
    pub is_test: bool,
    line_starts: Vec<usize>,
}

impl<'a> UnitContext<'a> {
    /// Creates a context for `unit`.
    #[must_use]
    pub fn new(unit: &'a SourceUnit, ast: Option<syn::File>) -> Self {
        let line_starts = std::iter::once(0)
            .chain(unit.content().match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            unit,
            ast,
            is_test: Self::detect_test_file(unit.path()),
            line_starts,
        }
    }

    /// Source text.
    #[must_use]
    pub fn content(&self) -> &'a str {
        self.unit.content()
    }

    /// Lines of the unit, without terminators.
    pub fn lines(&self) -> impl Iterator<Item = &'a str> {
        self.unit.content().lines()
    }

    /// Detects if a file is a test file based on path conventions.
    fn detect_test_file(path: &Path) -> bool {
        for component in path.components() {
            if let std::path::Component::Normal(s) = component {
                let s = s.to_string_lossy();
                if s == "tests" || s == "test" || s == "benches" {
                    return true;
                }
            }
        }

        if let Some(file_name) = path.file_name().and_then(|n| n.to_str()) {
            if file_name.ends_with("_test.rs")
                || file_name.ends_with("_tests.rs")
                || file_name.starts_with("test_")
                || file_name == "tests.rs"
            {
                return true;
            }
        }

        false
    }

    /// Calculates the byte offset for a 1-indexed line and character column.
    ///
    /// Columns past the end of a line map to the line end; lines past the
    /// end of the unit map to the end of the unit.
    #[must_use]
    pub fn offset_for(&self, line: usize, column: usize) -> usize {
        if line == 0 {
            return 0;
        }
        let content = self.content();
        let Some(&start) = self.line_starts.get(line - 1) else {
            return content.len();
        };
        let end = self.line_starts.get(line).map_or(content.len(), |next| next - 1);
        let text = &content[start..end];
        text.char_indices()
            .nth(column.saturating_sub(1))
            .map_or(end, |(byte, _)| start + byte)
    }

    /// Location at a 1-indexed line and column, spanning `length` bytes.
    #[must_use]
    pub fn location(&self, line: usize, column: usize, length: usize) -> Location {
        Location::new(self.unit.path().to_path_buf(), line, column)
            .with_span(self.offset_for(line, column), length)
    }

    /// Location of a syntax node.
    #[must_use]
    pub fn span_location(&self, span: proc_macro2::Span) -> Location {
        let location = Location::from_span(self.unit.path().to_path_buf(), span);
        let offset = self.offset_for(location.line, location.column);
        let end = span.end();
        let end_offset = self.offset_for(end.line, end.column + 1);
        location.with_span(offset, end_offset.saturating_sub(offset))
    }
}
