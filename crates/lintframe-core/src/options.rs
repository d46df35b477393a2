//! Options controlling which rules run and which diagnostics are kept.

use std::collections::HashMap;
use std::fmt;

use crate::catalog::RuleCatalog;
use crate::config::Config;
use crate::rule::RuleRef;
use crate::taxonomy::Maturity;
use crate::types::{DiagnosticInfo, Severity};

/// Produces the enabled rules; called again before every run.
pub type RuleSelector = Box<dyn Fn() -> Vec<RuleRef> + Send + Sync>;

/// Decides whether an emitted diagnostic is kept.
pub type DiagnosticFilter = Box<dyn Fn(&DiagnosticInfo) -> bool + Send + Sync>;

/// Options for a [`Linter`](crate::Linter).
pub struct LinterOptions {
    enabled_lints: RuleSelector,
    filter: DiagnosticFilter,
    severity_overrides: HashMap<String, Severity>,
}

impl LinterOptions {
    /// Options using `selector`, keeping only lint diagnostics.
    #[must_use]
    pub fn new(selector: impl Fn() -> Vec<RuleRef> + Send + Sync + 'static) -> Self {
        Self {
            enabled_lints: Box::new(selector),
            filter: Box::new(DiagnosticInfo::is_lint),
            severity_overrides: HashMap::new(),
        }
    }

    /// Enables every rule in `catalog`, regardless of maturity.
    #[must_use]
    pub fn all_from(catalog: &RuleCatalog) -> Self {
        let rules = catalog.rules();
        Self::new(move || rules.clone())
    }

    /// Enables catalog rules according to `config`.
    ///
    /// A rule runs when it is not disabled, and, if experimental, when it is
    /// explicitly enabled or `include_experimental` is set. Severity
    /// overrides from the config are applied to kept diagnostics.
    #[must_use]
    pub fn from_config(catalog: &RuleCatalog, config: &Config) -> Self {
        let rules: Vec<RuleRef> = catalog
            .rules()
            .into_iter()
            .filter(|rule| {
                let info = rule.info();
                match config.rule_enabled(info.name.as_str()) {
                    Some(enabled) => enabled,
                    None => {
                        !matches!(info.maturity, Maturity::Experimental)
                            || config.include_experimental
                    }
                }
            })
            .collect();

        let severity_overrides = config
            .rules
            .iter()
            .filter_map(|(name, rc)| rc.severity.map(|s| (name.clone(), s)))
            .collect();

        Self::new(move || rules.clone()).with_severity_overrides(severity_overrides)
    }

    /// Replaces the diagnostic filter.
    #[must_use]
    pub fn with_filter(
        mut self,
        filter: impl Fn(&DiagnosticInfo) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.filter = Box::new(filter);
        self
    }

    /// Sets per-rule severity overrides.
    #[must_use]
    pub fn with_severity_overrides(mut self, overrides: HashMap<String, Severity>) -> Self {
        self.severity_overrides = overrides;
        self
    }

    /// Evaluates the rule selector.
    #[must_use]
    pub fn enabled_lints(&self) -> Vec<RuleRef> {
        (self.enabled_lints)()
    }

    /// Lints are always enabled.
    #[must_use]
    pub fn lints_enabled(&self) -> bool {
        true
    }

    /// Whether `diagnostic` passes the filter.
    #[must_use]
    pub fn keep(&self, diagnostic: &DiagnosticInfo) -> bool {
        (self.filter)(diagnostic)
    }

    /// Applies any severity override to `diagnostic`.
    pub fn apply_severity(&self, diagnostic: &mut DiagnosticInfo) {
        if let Some(severity) = self.severity_overrides.get(&diagnostic.rule) {
            diagnostic.severity = *severity;
        }
    }
}

impl fmt::Debug for LinterOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinterOptions")
            .field("severity_overrides", &self.severity_overrides)
            .finish_non_exhaustive()
    }
}
