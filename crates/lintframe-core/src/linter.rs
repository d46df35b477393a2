//! Orchestrates rule installation, engine runs and diagnostic collection.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::catalog::RuleCatalog;
use crate::engine::{AnalysisEngine, DiagnosticCollector, SourceEngine};
use crate::error::LinterError;
use crate::options::LinterOptions;
use crate::registry::ActiveRules;
use crate::reporter::{PrintingReporter, Reporter};
use crate::rule::RuleRef;
use crate::source::SourceUnit;
use crate::types::{DiagnosticInfo, LintResult};

/// Builder for configuring a [`Linter`].
#[derive(Default)]
pub struct LinterBuilder {
    options: Option<LinterOptions>,
    catalog: Option<RuleCatalog>,
    engine: Option<Box<dyn AnalysisEngine>>,
    reporter: Option<Box<dyn Reporter>>,
}

impl LinterBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the options. Without them every catalog rule is enabled.
    #[must_use]
    pub fn options(mut self, options: LinterOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Sets the catalog used when no options are given.
    #[must_use]
    pub fn catalog(mut self, catalog: RuleCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Replaces the analysis engine (default: [`SourceEngine`]).
    #[must_use]
    pub fn engine<E: AnalysisEngine + 'static>(mut self, engine: E) -> Self {
        self.engine = Some(Box::new(engine));
        self
    }

    /// Replaces the reporter (default: [`PrintingReporter`] on stdout).
    #[must_use]
    pub fn reporter<R: Reporter + 'static>(mut self, reporter: R) -> Self {
        self.reporter = Some(Box::new(reporter));
        self
    }

    /// Builds the linter.
    #[must_use]
    pub fn build(self) -> Linter {
        let options = self
            .options
            .unwrap_or_else(|| LinterOptions::all_from(&self.catalog.unwrap_or_default()));
        Linter {
            options,
            engine: self.engine.unwrap_or_else(|| Box::new(SourceEngine::new())),
            reporter: self.reporter.unwrap_or_else(|| Box::new(PrintingReporter::default())),
            active: ActiveRules::new(),
            sources_analyzed: 0,
        }
    }
}

/// Runs the enabled rules against source units.
///
/// Every call re-evaluates the rule selector and installs the result as
/// the active set before analysing. A linter is not reentrant: the
/// `&mut self` receivers serialise calls on one instance.
pub struct Linter {
    options: LinterOptions,
    engine: Box<dyn AnalysisEngine>,
    reporter: Box<dyn Reporter>,
    active: ActiveRules,
    sources_analyzed: usize,
}

impl Linter {
    /// Creates a new builder for configuring a linter.
    #[must_use]
    pub fn builder() -> LinterBuilder {
        LinterBuilder::new()
    }

    /// Lints the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`LinterError`] if the file cannot be read or the engine
    /// fails. The error is also passed to the reporter.
    pub fn lint_file(&mut self, path: &Path) -> Result<Vec<DiagnosticInfo>, LinterError> {
        let unit = SourceUnit::from_path(path).map_err(|e| self.fail(e))?;
        self.lint_unit(&unit)
    }

    /// Lints in-memory `contents` under the synthetic name `name`.
    ///
    /// # Errors
    ///
    /// Returns [`LinterError`] if the engine fails. The error is also passed
    /// to the reporter.
    pub fn lint_library(
        &mut self,
        name: &str,
        contents: &str,
    ) -> Result<Vec<DiagnosticInfo>, LinterError> {
        self.lint_unit(&SourceUnit::in_memory(name, contents))
    }

    /// Lints several files, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first [`LinterError`] encountered.
    pub fn lint_files<P: AsRef<Path>>(&mut self, paths: &[P]) -> Result<LintResult, LinterError> {
        info!("Linting {} files", paths.len());
        let mut result = LintResult::new();
        for path in paths {
            result.push_unit(self.lint_file(path.as_ref())?);
        }
        info!(
            "Lint complete: {} diagnostics in {} files",
            result.diagnostics.len(),
            result.files_checked
        );
        Ok(result)
    }

    /// Replaces the active rule set directly; `None` keeps it unchanged.
    pub fn install_rules(&mut self, rules: Option<Vec<RuleRef>>) {
        self.active.install(rules);
    }

    /// Rules installed for the most recent run.
    #[must_use]
    pub fn active_rules(&self) -> &ActiveRules {
        &self.active
    }

    /// Number of units analysed successfully by this linter.
    #[must_use]
    pub fn sources_analyzed(&self) -> usize {
        self.sources_analyzed
    }

    /// The options in use.
    #[must_use]
    pub fn options(&self) -> &LinterOptions {
        &self.options
    }

    /// The reporter in use.
    #[must_use]
    pub fn reporter(&self) -> &dyn Reporter {
        self.reporter.as_ref()
    }

    fn lint_unit(&mut self, unit: &SourceUnit) -> Result<Vec<DiagnosticInfo>, LinterError> {
        let enabled = self.options.lints_enabled().then(|| self.options.enabled_lints());
        self.active.install(enabled);

        let mut collector = DiagnosticCollector::new();
        if let Err(e) = self
            .engine
            .analyze(unit, self.active.rules(), &mut collector)
        {
            return Err(self.fail(e));
        }
        self.sources_analyzed += 1;

        let emitted = collector.into_diagnostics();
        let total = emitted.len();
        let kept: Vec<DiagnosticInfo> = emitted
            .into_iter()
            .filter(|d| self.options.keep(d))
            .map(|mut d| {
                self.options.apply_severity(&mut d);
                d
            })
            .collect();
        debug!(
            "{}: kept {} of {} diagnostics",
            unit.name(),
            kept.len(),
            total
        );
        Ok(kept)
    }

    fn fail(&self, error: LinterError) -> LinterError {
        warn!("Linting failed: {error}");
        self.reporter.exception(&error);
        error
    }
}

impl std::fmt::Debug for Linter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Linter")
            .field("options", &self.options)
            .field("active", &self.active)
            .field("sources_analyzed", &self.sources_analyzed)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::UnitContext;
    use crate::engine::DiagnosticListener;
    use crate::rule::{Rule, RuleInfo};
    use crate::taxonomy::{Group, Kind};
    use crate::types::{Location, Severity};
    use std::sync::{Arc, Mutex};

    struct Shouty(RuleInfo);

    impl Rule for Shouty {
        fn info(&self) -> &RuleInfo {
            &self.0
        }

        fn check(&self, ctx: &UnitContext<'_>, sink: &mut dyn DiagnosticListener) {
            for (i, line) in ctx.lines().enumerate() {
                if line.contains('!') {
                    self.report(sink, ctx.location(i + 1, 1, line.len()));
                }
            }
        }
    }

    fn shouty() -> RuleRef {
        Arc::new(Shouty(
            RuleInfo::new("NoShouting", Kind::Avoid, Group::StyleGuide, "Avoid shouting.").unwrap(),
        ))
    }

    /// Emits one lint, then fails.
    struct FailingEngine;

    impl AnalysisEngine for FailingEngine {
        fn analyze(
            &self,
            unit: &SourceUnit,
            _rules: &[RuleRef],
            listener: &mut dyn DiagnosticListener,
        ) -> Result<(), LinterError> {
            listener.on_diagnostic(DiagnosticInfo::lint(
                "Partial",
                Severity::Warning,
                Location::new(unit.path().to_path_buf(), 1, 1),
                "partial",
            ));
            Err(LinterError::engine("boom"))
        }
    }

    fn capturing() -> (PrintingReporter, Arc<Mutex<Vec<String>>>) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let captured = Arc::clone(&lines);
        let reporter =
            PrintingReporter::new(Box::new(move |l| captured.lock().unwrap().push(l.to_string())));
        (reporter, lines)
    }

    #[test]
    fn default_options_enable_whole_catalog() {
        let mut catalog = RuleCatalog::new();
        catalog.register(shouty());
        let mut linter = Linter::builder().catalog(catalog).build();

        let diagnostics = linter.lint_library("TestLib", "calm\nloud!\n").unwrap();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].rule, "NoShouting");
        assert_eq!(diagnostics[0].location.line, 2);
        assert_eq!(linter.sources_analyzed(), 1);
    }

    #[test]
    fn active_set_follows_selector() {
        let enabled = Arc::new(Mutex::new(vec![shouty()]));
        let selector_state = Arc::clone(&enabled);
        let options = LinterOptions::new(move || selector_state.lock().unwrap().clone());
        let mut linter = Linter::builder().options(options).build();

        assert_eq!(linter.lint_library("TestLib", "hey!").unwrap().len(), 1);
        assert_eq!(linter.active_rules().names(), ["NoShouting"]);

        enabled.lock().unwrap().clear();
        assert!(linter.lint_library("TestLib", "hey!").unwrap().is_empty());
        assert!(linter.active_rules().is_empty());
    }

    #[test]
    fn custom_filter_controls_output() {
        let options = LinterOptions::new(move || vec![shouty()]).with_filter(|_| false);
        let mut linter = Linter::builder().options(options).build();
        assert!(linter.lint_library("TestLib", "hey!").unwrap().is_empty());
    }

    #[test]
    fn engine_failure_discards_partial_and_reports() {
        let (reporter, lines) = capturing();
        let mut linter = Linter::builder()
            .options(LinterOptions::new(Vec::new))
            .engine(FailingEngine)
            .reporter(reporter)
            .build();

        let err = linter.lint_library("TestLib", "x").unwrap_err();
        assert_eq!(err.message().as_deref(), Some("boom"));
        assert_eq!(linter.sources_analyzed(), 0);
        assert_eq!(
            lines.lock().unwrap().as_slice(),
            ["EXCEPTION: Analysis engine failed: boom"]
        );
    }

    #[test]
    fn unreadable_file_is_reported() {
        let (reporter, lines) = capturing();
        let mut linter = Linter::builder().reporter(reporter).build();

        let err = linter
            .lint_file(Path::new("/no/such/dir/source.rs"))
            .unwrap_err();
        assert!(matches!(err, LinterError::Io { .. }));
        assert!(lines.lock().unwrap()[0].starts_with("EXCEPTION: Failed to read"));
    }

    #[test]
    fn install_rules_none_is_noop() {
        let mut linter = Linter::builder().build();
        linter.install_rules(Some(vec![shouty()]));
        linter.install_rules(None);
        assert_eq!(linter.active_rules().len(), 1);
    }
}
