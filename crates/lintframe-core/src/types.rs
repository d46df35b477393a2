//! Diagnostic types produced by analysis.

use miette::{Diagnostic, NamedSource, SourceSpan};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, does not fail lint.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// What produced a diagnostic.
///
/// The engine may emit more than lint findings; the default diagnostic
/// filter keeps only [`DiagnosticCategory::Lint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticCategory {
    /// Emitted by a lint rule.
    Lint,
    /// The source could not be parsed.
    Syntax,
    /// Engine-level hint, e.g. an unknown rule in a suppression comment.
    Hint,
}

/// Source code location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Path or synthetic name of the source unit.
    pub file: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    /// Byte offset in the unit (for miette integration).
    pub offset: usize,
    /// Length of the span in bytes.
    pub length: usize,
}

impl Location {
    /// Creates a new location from span information.
    #[must_use]
    pub fn from_span(file: PathBuf, span: proc_macro2::Span) -> Self {
        let start = span.start();
        Self {
            file,
            line: start.line,
            column: start.column + 1,
            offset: 0,
            length: 0,
        }
    }

    /// Creates a new location with explicit values.
    #[must_use]
    pub fn new(file: PathBuf, line: usize, column: usize) -> Self {
        Self {
            file,
            line,
            column,
            offset: 0,
            length: 0,
        }
    }

    /// Sets the byte offset and length for this location.
    #[must_use]
    pub fn with_span(mut self, offset: usize, length: usize) -> Self {
        self.offset = offset;
        self.length = length;
        self
    }
}

/// One diagnostic emitted while analysing a source unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticInfo {
    /// Name of the rule that produced it (`"syntax"` for parse failures).
    pub rule: String,
    /// What kind of diagnostic this is.
    pub category: DiagnosticCategory,
    /// Severity of this diagnostic.
    pub severity: Severity,
    /// Where it applies.
    pub location: Location,
    /// Human-readable message.
    pub message: String,
    /// Optional hint on how to fix it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correction: Option<String>,
}

impl DiagnosticInfo {
    /// Creates a lint diagnostic.
    #[must_use]
    pub fn lint(
        rule: impl Into<String>,
        severity: Severity,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule: rule.into(),
            category: DiagnosticCategory::Lint,
            severity,
            location,
            message: message.into(),
            correction: None,
        }
    }

    /// Creates a syntax diagnostic.
    #[must_use]
    pub fn syntax(location: Location, message: impl Into<String>) -> Self {
        Self {
            rule: "syntax".to_string(),
            category: DiagnosticCategory::Syntax,
            severity: Severity::Error,
            location,
            message: message.into(),
            correction: None,
        }
    }

    /// Creates an engine hint.
    #[must_use]
    pub fn hint(location: Location, message: impl Into<String>) -> Self {
        Self {
            rule: "hint".to_string(),
            category: DiagnosticCategory::Hint,
            severity: Severity::Info,
            location,
            message: message.into(),
            correction: None,
        }
    }

    /// Adds a correction hint.
    #[must_use]
    pub fn with_correction(mut self, correction: impl Into<String>) -> Self {
        self.correction = Some(correction.into());
        self
    }

    /// Whether this diagnostic came from a lint rule.
    #[must_use]
    pub fn is_lint(&self) -> bool {
        self.category == DiagnosticCategory::Lint
    }

    /// Formats the diagnostic for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        use std::fmt::Write;
        let mut output = format!(
            "{} at {}:{}:{}\n",
            self.rule,
            self.location.file.display(),
            self.location.line,
            self.location.column,
        );
        let _ = writeln!(output, "  {}: {}", self.severity, self.message);
        if let Some(correction) = &self.correction {
            let _ = writeln!(output, "  = help: {correction}");
        }
        output
    }
}

impl std::fmt::Display for DiagnosticInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}: {} [{}] {}",
            self.location.file.display(),
            self.location.line,
            self.location.column,
            self.severity,
            self.rule,
            self.message
        )
    }
}

/// A [`DiagnosticInfo`] paired with its source text for miette rendering.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("[{rule}] {message}")]
pub struct RenderedDiagnostic {
    rule: String,
    message: String,
    #[source_code]
    source_code: NamedSource<String>,
    #[help]
    help: Option<String>,
    #[label("{rule}")]
    span: SourceSpan,
}

impl RenderedDiagnostic {
    /// Pairs a diagnostic with the text of the unit it was found in.
    #[must_use]
    pub fn new(diagnostic: &DiagnosticInfo, source: impl Into<String>) -> Self {
        let name = diagnostic.location.file.display().to_string();
        Self {
            rule: diagnostic.rule.clone(),
            message: diagnostic.message.clone(),
            source_code: NamedSource::new(name, source.into()),
            help: diagnostic.correction.clone(),
            span: SourceSpan::from((diagnostic.location.offset, diagnostic.location.length)),
        }
    }
}

/// Diagnostics collected across several source units.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// All diagnostics found.
    pub diagnostics: Vec<DiagnosticInfo>,
    /// Number of units analysed.
    pub files_checked: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.has_diagnostics_at(Severity::Error)
    }

    /// Checks if any diagnostics meet or exceed the given severity.
    #[must_use]
    pub fn has_diagnostics_at(&self, severity: Severity) -> bool {
        self.diagnostics.iter().any(|d| d.severity >= severity)
    }

    /// Counts diagnostics by severity as `(errors, warnings, infos)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        let count = |severity| {
            self.diagnostics
                .iter()
                .filter(|d| d.severity == severity)
                .count()
        };
        (
            count(Severity::Error),
            count(Severity::Warning),
            count(Severity::Info),
        )
    }

    /// Adds the diagnostics of one more analysed unit.
    pub fn push_unit(&mut self, diagnostics: Vec<DiagnosticInfo>) {
        self.diagnostics.extend(diagnostics);
        self.files_checked += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_diagnostic(severity: Severity) -> DiagnosticInfo {
        DiagnosticInfo::lint(
            "LineLength",
            severity,
            Location::new(PathBuf::from("src/lib.rs"), 42, 81),
            "Line is longer than 80 characters",
        )
    }

    #[test]
    fn display_is_compact() {
        let d = make_diagnostic(Severity::Warning);
        assert_eq!(
            d.to_string(),
            "src/lib.rs:42:81: warning [LineLength] Line is longer than 80 characters"
        );
    }

    #[test]
    fn format_includes_correction() {
        let d = make_diagnostic(Severity::Error).with_correction("Wrap the line");
        assert!(d.format().contains("= help: Wrap the line"));
        assert!(!make_diagnostic(Severity::Error).format().contains("help:"));
    }

    #[test]
    fn categories() {
        let loc = Location::new(PathBuf::from("a.rs"), 1, 1);
        assert!(make_diagnostic(Severity::Info).is_lint());
        assert!(!DiagnosticInfo::syntax(loc.clone(), "expected `;`").is_lint());
        assert!(!DiagnosticInfo::hint(loc, "unknown rule").is_lint());
    }

    #[test]
    fn result_counts() {
        let mut result = LintResult::new();
        result.push_unit(vec![
            make_diagnostic(Severity::Warning),
            make_diagnostic(Severity::Error),
        ]);
        result.push_unit(Vec::new());

        assert_eq!(result.files_checked, 2);
        assert_eq!(result.count_by_severity(), (1, 1, 0));
        assert!(result.has_errors());
        assert!(result.has_diagnostics_at(Severity::Warning));
    }

    #[test]
    fn rendered_diagnostic_keeps_rule_and_help() {
        let d = make_diagnostic(Severity::Error).with_correction("Wrap the line");
        let rendered = RenderedDiagnostic::new(&d, "fn main() {}\n");
        assert_eq!(rendered.to_string(), "[LineLength] Line is longer than 80 characters");
        assert_eq!(rendered.help.as_deref(), Some("Wrap the line"));
    }
}
