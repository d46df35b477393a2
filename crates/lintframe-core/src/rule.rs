//! The rule contract.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::context::UnitContext;
use crate::engine::DiagnosticListener;
use crate::error::NameError;
use crate::name::RuleName;
use crate::taxonomy::{Group, Kind, Maturity};
use crate::types::{DiagnosticInfo, Location, Severity};

/// Identity and classification of a rule.
///
/// Ordered by [`Kind`] first, then by the name string. This is the order
/// used for every rule listing.
#[derive(Debug, Clone)]
pub struct RuleInfo {
    /// Validated rule name.
    pub name: RuleName,
    /// Priority classification.
    pub kind: Kind,
    /// Thematic group.
    pub group: Group,
    /// Stability.
    pub maturity: Maturity,
    /// Short description for console display.
    pub description: String,
    /// Long-form markdown details.
    pub details: String,
}

impl RuleInfo {
    /// Creates rule metadata, validating `name`.
    ///
    /// # Errors
    ///
    /// Returns [`NameError`] if `name` is not upper camel case.
    pub fn new(
        name: &str,
        kind: Kind,
        group: Group,
        description: impl Into<String>,
    ) -> Result<Self, NameError> {
        Ok(Self {
            name: RuleName::new(name)?,
            kind,
            group,
            maturity: Maturity::Stable,
            description: description.into(),
            details: String::new(),
        })
    }

    /// Sets the maturity (default: stable).
    #[must_use]
    pub fn maturity(mut self, maturity: Maturity) -> Self {
        self.maturity = maturity;
        self
    }

    /// Sets the long-form details.
    #[must_use]
    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = details.into();
        self
    }
}

impl PartialEq for RuleInfo {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RuleInfo {}

impl PartialOrd for RuleInfo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RuleInfo {
    fn cmp(&self, other: &Self) -> Ordering {
        self.kind
            .cmp(&other.kind)
            .then_with(|| self.name.as_str().cmp(other.name.as_str()))
    }
}

/// A lint rule.
///
/// Implementors supply their metadata through [`Rule::info`] and detection
/// logic through [`Rule::check`]. Findings are reported to the listener,
/// usually via [`Rule::report`] or [`Rule::report_span`].
///
/// # Example
///
/// ```
/// use lintframe_core::{DiagnosticListener, Group, Kind, Rule, RuleInfo, UnitContext};
///
/// pub struct NoTabs {
///     info: RuleInfo,
/// }
///
/// impl NoTabs {
///     pub fn new() -> Result<Self, lintframe_core::NameError> {
///         let info = RuleInfo::new("NoTabs", Kind::Dont, Group::StyleGuide, "Don't use tabs.")?;
///         Ok(Self { info })
///     }
/// }
///
/// impl Rule for NoTabs {
///     fn info(&self) -> &RuleInfo {
///         &self.info
///     }
///
///     fn check(&self, ctx: &UnitContext<'_>, sink: &mut dyn DiagnosticListener) {
///         for (i, line) in ctx.lines().enumerate() {
///             if let Some(col) = line.find('\t') {
///                 self.report(sink, ctx.location(i + 1, col + 1, 1));
///             }
///         }
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Identity and classification.
    fn info(&self) -> &RuleInfo;

    /// Severity of diagnostics reported by this rule.
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    /// Analyses one unit, reporting findings to `sink`.
    fn check(&self, ctx: &UnitContext<'_>, sink: &mut dyn DiagnosticListener);

    /// Validated name of this rule.
    fn name(&self) -> &RuleName {
        &self.info().name
    }

    /// Reports a violation at `location` with this rule's name and description.
    fn report(&self, sink: &mut dyn DiagnosticListener, location: Location) {
        self.report_message(sink, location, self.info().description.clone());
    }

    /// Reports a violation at `location` with a message specific to the finding.
    fn report_message(
        &self,
        sink: &mut dyn DiagnosticListener,
        location: Location,
        message: String,
    ) {
        sink.on_diagnostic(DiagnosticInfo::lint(
            self.info().name.as_str(),
            self.default_severity(),
            location,
            message,
        ));
    }

    /// Reports a violation at a syntax node.
    fn report_span(
        &self,
        ctx: &UnitContext<'_>,
        sink: &mut dyn DiagnosticListener,
        span: proc_macro2::Span,
    ) {
        self.report(sink, ctx.span_location(span));
    }
}

/// Shared handle to a rule.
pub type RuleRef = Arc<dyn Rule>;

/// Canonical rule order: kind ordinal, then name.
#[must_use]
pub fn compare_rules(a: &dyn Rule, b: &dyn Rule) -> Ordering {
    a.info().cmp(b.info())
}

/// Sorts rules into canonical order.
pub fn sort_rules(rules: &mut [RuleRef]) {
    rules.sort_by(|a, b| compare_rules(a.as_ref(), b.as_ref()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::DiagnosticCollector;
    use crate::source::SourceUnit;

    struct TestRule {
        info: RuleInfo,
    }

    impl TestRule {
        fn new(name: &str, kind: Kind) -> Self {
            Self {
                info: RuleInfo::new(name, kind, Group::StyleGuide, "A test rule").unwrap(),
            }
        }
    }

    impl Rule for TestRule {
        fn info(&self) -> &RuleInfo {
            &self.info
        }

        fn check(&self, ctx: &UnitContext<'_>, sink: &mut dyn DiagnosticListener) {
            self.report(sink, ctx.location(1, 1, 0));
        }
    }

    #[test]
    fn invalid_name_fails_construction() {
        let err = RuleInfo::new("badName", Kind::Do, Group::StyleGuide, "").unwrap_err();
        assert_eq!(err.name, "badName");
    }

    #[test]
    fn defaults() {
        let rule = TestRule::new("TestRule", Kind::Do);
        assert_eq!(rule.name().as_str(), "TestRule");
        assert_eq!(rule.default_severity(), Severity::Warning);
        assert!(matches!(rule.info().maturity, Maturity::Stable));
        assert!(rule.info().details.is_empty());
    }

    #[test]
    fn report_uses_name_and_description() {
        let rule = TestRule::new("TestRule", Kind::Do);
        let unit = SourceUnit::in_memory("TestLib", "x");
        let ctx = UnitContext::new(&unit, None);
        let mut sink = DiagnosticCollector::new();

        rule.check(&ctx, &mut sink);

        let diagnostics = sink.into_diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].rule, "TestRule");
        assert_eq!(diagnostics[0].message, "A test rule");
        assert!(diagnostics[0].is_lint());
    }

    #[test]
    fn kind_dominates_ordering() {
        let a = TestRule::new("Zebra", Kind::Do);
        let b = TestRule::new("Apple", Kind::Consider);
        assert_eq!(compare_rules(&a, &b), Kind::Do.cmp(&Kind::Consider));
        assert_eq!(compare_rules(&b, &a), Ordering::Greater);
    }

    #[test]
    fn name_breaks_ties() {
        let a = TestRule::new("Apple", Kind::Avoid);
        let b = TestRule::new("Banana", Kind::Avoid);
        assert_eq!(compare_rules(&a, &b), "Apple".cmp("Banana"));
        assert_eq!(compare_rules(&a, &a), Ordering::Equal);
    }

    #[test]
    fn sort_rules_canonical_order() {
        let mut rules: Vec<RuleRef> = vec![
            Arc::new(TestRule::new("Beta", Kind::Avoid)),
            Arc::new(TestRule::new("Alpha", Kind::Avoid)),
            Arc::new(TestRule::new("Omega", Kind::Do)),
            Arc::new(TestRule::new("Mid", Kind::Dont)),
        ];
        sort_rules(&mut rules);
        let names: Vec<&str> = rules.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, ["Omega", "Mid", "Alpha", "Beta"]);
    }
}
