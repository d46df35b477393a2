//! Analysis engine seam.
//!
//! An engine runs one analysis session over a single source unit with an
//! explicit rule set, pushing every diagnostic to a listener as it goes.

use tracing::{debug, trace};

use crate::context::UnitContext;
use crate::error::LinterError;
use crate::name;
use crate::rule::RuleRef;
use crate::source::SourceUnit;
use crate::types::DiagnosticInfo;
use crate::utils::Suppressions;

/// Receives diagnostics during an analysis session.
pub trait DiagnosticListener {
    /// Called once per diagnostic, in emission order.
    fn on_diagnostic(&mut self, diagnostic: DiagnosticInfo);
}

/// Ordered buffer of diagnostics for one analysis call.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<DiagnosticInfo>,
}

impl DiagnosticCollector {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Diagnostics received so far.
    #[must_use]
    pub fn diagnostics(&self) -> &[DiagnosticInfo] {
        &self.diagnostics
    }

    /// Consumes the collector, returning diagnostics in emission order.
    #[must_use]
    pub fn into_diagnostics(self) -> Vec<DiagnosticInfo> {
        self.diagnostics
    }
}

impl DiagnosticListener for DiagnosticCollector {
    fn on_diagnostic(&mut self, diagnostic: DiagnosticInfo) {
        self.diagnostics.push(diagnostic);
    }
}

/// Something that can analyse a source unit with a given rule set.
pub trait AnalysisEngine {
    /// Runs one session over `unit` with exactly `rules` active.
    ///
    /// # Errors
    ///
    /// Returns a [`LinterError`] if the session cannot be set up or run.
    fn analyze(
        &self,
        unit: &SourceUnit,
        rules: &[RuleRef],
        listener: &mut dyn DiagnosticListener,
    ) -> Result<(), LinterError>;
}

/// Built-in engine working on source text.
///
/// Rust units are parsed with `syn`; a parse failure is reported as a
/// syntax diagnostic and text-based rules still run. Findings on lines
/// covered by a `// lintframe: ignore(...)` comment are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceEngine;

impl SourceEngine {
    /// Creates the engine.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl AnalysisEngine for SourceEngine {
    fn analyze(
        &self,
        unit: &SourceUnit,
        rules: &[RuleRef],
        listener: &mut dyn DiagnosticListener,
    ) -> Result<(), LinterError> {
        debug!("Analyzing {} with {} rules", unit.uri(), rules.len());

        let mut pre = DiagnosticCollector::new();
        let mut ctx = UnitContext::new(unit, None);
        if unit.is_rust() {
            match syn::parse_file(unit.content()) {
                Ok(ast) => ctx.ast = Some(ast),
                Err(e) => {
                    let location = ctx.span_location(e.span());
                    pre.on_diagnostic(DiagnosticInfo::syntax(location, e.to_string()));
                }
            }
        }

        let suppressions = Suppressions::scan(unit.content());
        for (line, rule) in suppressions.entries() {
            if rule != "all" && !name::is_valid(rule) {
                pre.on_diagnostic(DiagnosticInfo::hint(
                    ctx.location(line, 1, 0),
                    format!("`{rule}` in an ignore comment is not a valid rule name"),
                ));
            }
        }

        for diagnostic in pre.into_diagnostics() {
            listener.on_diagnostic(diagnostic);
        }

        let mut filter = SuppressingListener {
            inner: listener,
            suppressions: &suppressions,
        };
        for rule in rules {
            trace!("Running rule {}", rule.name());
            rule.check(&ctx, &mut filter);
        }

        Ok(())
    }
}

struct SuppressingListener<'a, 'b> {
    inner: &'a mut dyn DiagnosticListener,
    suppressions: &'b Suppressions,
}

impl DiagnosticListener for SuppressingListener<'_, '_> {
    fn on_diagnostic(&mut self, diagnostic: DiagnosticInfo) {
        if self
            .suppressions
            .is_suppressed(&diagnostic.rule, diagnostic.location.line)
        {
            trace!("Suppressed {} at line {}", diagnostic.rule, diagnostic.location.line);
            return;
        }
        self.inner.on_diagnostic(diagnostic);
    }
}
