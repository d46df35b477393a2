//! Rule flagging lines longer than a configured limit.
//!
//! # Configuration
//!
//! - `max`: longest allowed line in characters (default: 80)

use lintframe_core::{
    DiagnosticListener, Group, Kind, NameError, Rule, RuleInfo, UnitContext,
};

/// Rule name for line-length.
pub const NAME: &str = "LineLength";

/// Default line limit in characters.
pub const DEFAULT_MAX: usize = 80;

const DETAILS: &str = r"**AVOID** lines longer than the configured limit (80 characters by default).

Long lines are hard to read side by side and in review tools. URIs and
generated code may be silenced with `// lintframe: ignore(LineLength)`.";

/// Flags lines longer than `max` characters.
#[derive(Debug, Clone)]
pub struct LineLength {
    info: RuleInfo,
    max: usize,
}

impl LineLength {
    /// Creates the rule with the default limit.
    ///
    /// # Errors
    ///
    /// Returns [`NameError`] if the rule name is rejected.
    pub fn new() -> Result<Self, NameError> {
        Self::with_max(DEFAULT_MAX)
    }

    /// Creates the rule with a custom limit.
    ///
    /// # Errors
    ///
    /// Returns [`NameError`] if the rule name is rejected.
    pub fn with_max(max: usize) -> Result<Self, NameError> {
        let info = RuleInfo::new(
            NAME,
            Kind::Avoid,
            Group::StyleGuide,
            format!("Avoid lines longer than {max} characters."),
        )?
        .details(DETAILS);
        Ok(Self { info, max })
    }

    /// The configured limit.
    #[must_use]
    pub fn max(&self) -> usize {
        self.max
    }
}

impl Rule for LineLength {
    fn info(&self) -> &RuleInfo {
        &self.info
    }

    fn check(&self, ctx: &UnitContext<'_>, sink: &mut dyn DiagnosticListener) {
        for (i, line) in ctx.lines().enumerate() {
            if line.chars().count() <= self.max {
                continue;
            }
            // Byte length of the overflowing tail, for the span.
            let tail = line
                .char_indices()
                .nth(self.max)
                .map_or(0, |(byte, _)| line.len() - byte);
            self.report(sink, ctx.location(i + 1, self.max + 1, tail));
        }
    }
}
