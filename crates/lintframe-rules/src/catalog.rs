//! Catalog of the built-in rules.

use std::sync::Arc;

use lintframe_core::{Config, NameError, RuleCatalog, RuleRef};
use tracing::debug;

use crate::{line_length, AvoidUnwrap, DocumentPublicItems, LineLength, TrailingWhitespace};

/// Returns a catalog holding every built-in rule with default settings.
///
/// # Errors
///
/// Returns [`NameError`] if a rule name is rejected.
pub fn builtin_catalog() -> Result<RuleCatalog, NameError> {
    configure(&Config::default())
}

/// Returns the built-in catalog with per-rule options taken from `config`.
///
/// Recognised options:
///
/// - `LineLength.max`
/// - `AvoidUnwrap.allow_in_tests`, `AvoidUnwrap.allow_expect`
/// - `DocumentPublicItems.require_fn_docs`, `DocumentPublicItems.require_type_docs`
///
/// # Errors
///
/// Returns [`NameError`] if a rule name is rejected.
pub fn configure(config: &Config) -> Result<RuleCatalog, NameError> {
    let mut catalog = RuleCatalog::new();
    for rule in builtin_rules(config)? {
        catalog.register(rule);
    }
    debug!("Built-in catalog holds {} rules", catalog.len());
    Ok(catalog)
}

fn builtin_rules(config: &Config) -> Result<Vec<RuleRef>, NameError> {
    let mut line_length = LineLength::new()?;
    let mut avoid_unwrap = AvoidUnwrap::new()?;
    let mut document = DocumentPublicItems::new()?;

    if let Some(rc) = config.rule(line_length::NAME) {
        let default = i64::try_from(line_length::DEFAULT_MAX).unwrap_or(i64::MAX);
        let max = usize::try_from(rc.get_int("max", default)).unwrap_or(line_length::DEFAULT_MAX);
        line_length = LineLength::with_max(max)?;
    }
    if let Some(rc) = config.rule(crate::avoid_unwrap::NAME) {
        avoid_unwrap = avoid_unwrap
            .allow_in_tests(rc.get_bool("allow_in_tests", true))
            .allow_expect(rc.get_bool("allow_expect", false));
    }
    if let Some(rc) = config.rule(crate::document_public_items::NAME) {
        document = document
            .require_fn_docs(rc.get_bool("require_fn_docs", true))
            .require_type_docs(rc.get_bool("require_type_docs", true));
    }

    Ok(vec![
        Arc::new(line_length),
        Arc::new(TrailingWhitespace::new()?),
        Arc::new(avoid_unwrap),
        Arc::new(document),
    ])
}
