//! Rule flagging whitespace at the end of a line.

use lintframe_core::{DiagnosticListener, Group, Kind, NameError, Rule, RuleInfo, UnitContext};

/// Rule name for trailing-whitespace.
pub const NAME: &str = "TrailingWhitespace";

/// Flags spaces and tabs before a line break.
#[derive(Debug, Clone)]
pub struct TrailingWhitespace {
    info: RuleInfo,
}

impl TrailingWhitespace {
    /// Creates the rule.
    ///
    /// # Errors
    ///
    /// Returns [`NameError`] if the rule name is rejected.
    pub fn new() -> Result<Self, NameError> {
        let info = RuleInfo::new(
            NAME,
            Kind::Dont,
            Group::StyleGuide,
            "Don't leave whitespace at the end of a line.",
        )?
        .details("**DON'T** end lines with spaces or tabs; they show up as noise in diffs.");
        Ok(Self { info })
    }
}

impl Rule for TrailingWhitespace {
    fn info(&self) -> &RuleInfo {
        &self.info
    }

    fn check(&self, ctx: &UnitContext<'_>, sink: &mut dyn DiagnosticListener) {
        for (i, line) in ctx.lines().enumerate() {
            let trimmed = line.trim_end_matches([' ', '\t']);
            if trimmed.len() < line.len() {
                let column = trimmed.chars().count() + 1;
                self.report(sink, ctx.location(i + 1, column, line.len() - trimmed.len()));
            }
        }
    }
}
