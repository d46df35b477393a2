//! Caller-maintained catalog of known rules.

use tracing::debug;

use crate::reporter::Reporter;
use crate::rule::{sort_rules, RuleRef};
use crate::taxonomy::{Group, Kind};

/// Every rule a caller knows about, keyed by name.
#[derive(Default, Clone)]
pub struct RuleCatalog {
    rules: Vec<RuleRef>,
}

impl RuleCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule. Returns `false` if a rule with the same name exists.
    pub fn register(&mut self, rule: RuleRef) -> bool {
        if self.get(rule.name().as_str()).is_some() {
            return false;
        }
        debug!("Registered rule {}", rule.name());
        self.rules.push(rule);
        true
    }

    /// Like [`RuleCatalog::register`], telling `reporter` about duplicates.
    pub fn register_reporting(&mut self, rule: RuleRef, reporter: &dyn Reporter) -> bool {
        let name = rule.name().to_string();
        let added = self.register(rule);
        if !added {
            reporter.warn(&format!("Rule {name} is already registered; ignoring duplicate"));
        }
        added
    }

    /// Looks a rule up by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RuleRef> {
        self.rules.iter().find(|r| r.name().as_str() == name)
    }

    /// All rules in canonical (kind, name) order.
    #[must_use]
    pub fn rules(&self) -> Vec<RuleRef> {
        let mut rules = self.rules.clone();
        sort_rules(&mut rules);
        rules
    }

    /// Rules of the given kind, in name order.
    #[must_use]
    pub fn by_kind(&self, kind: &Kind) -> Vec<RuleRef> {
        self.rules()
            .into_iter()
            .filter(|r| r.info().kind == *kind)
            .collect()
    }

    /// Rules in the given group, in canonical order.
    #[must_use]
    pub fn by_group(&self, group: &Group) -> Vec<RuleRef> {
        self.rules()
            .into_iter()
            .filter(|r| r.info().group == *group)
            .collect()
    }

    /// Number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl std::fmt::Debug for RuleCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.rules.iter().map(|r| r.name().as_str()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::UnitContext;
    use crate::engine::DiagnosticListener;
    use crate::reporter::PrintingReporter;
    use crate::rule::{Rule, RuleInfo};
    use std::sync::{Arc, Mutex};

    struct Stub(RuleInfo);

    impl Rule for Stub {
        fn info(&self) -> &RuleInfo {
            &self.0
        }

        fn check(&self, _ctx: &UnitContext<'_>, _sink: &mut dyn DiagnosticListener) {}
    }

    fn stub(name: &str, kind: Kind, group: Group) -> RuleRef {
        Arc::new(Stub(RuleInfo::new(name, kind, group, "").unwrap()))
    }

    fn sample() -> RuleCatalog {
        let mut catalog = RuleCatalog::new();
        catalog.register(stub("Beta", Kind::Avoid, Group::StyleGuide));
        catalog.register(stub("Alpha", Kind::Avoid, Group::new("Errors")));
        catalog.register(stub("Gamma", Kind::Do, Group::StyleGuide));
        catalog
    }

    #[test]
    fn rules_in_canonical_order() {
        let names: Vec<String> = sample().rules().iter().map(|r| r.name().to_string()).collect();
        assert_eq!(names, ["Gamma", "Alpha", "Beta"]);
    }

    #[test]
    fn duplicates_are_rejected_and_reported() {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let captured = Arc::clone(&lines);
        let reporter =
            PrintingReporter::new(Box::new(move |l| captured.lock().unwrap().push(l.to_string())));

        let mut catalog = sample();
        assert!(!catalog.register_reporting(stub("Beta", Kind::Do, Group::StyleGuide), &reporter));
        assert_eq!(catalog.len(), 3);
        assert_eq!(
            lines.lock().unwrap().as_slice(),
            ["WARN: Rule Beta is already registered; ignoring duplicate"]
        );
    }

    #[test]
    fn filters_by_kind_and_group() {
        let catalog = sample();
        assert_eq!(catalog.by_kind(&Kind::Avoid).len(), 2);
        assert_eq!(catalog.by_kind(&Kind::Consider).len(), 0);
        let style: Vec<String> = catalog
            .by_group(&Group::StyleGuide)
            .iter()
            .map(|r| r.name().to_string())
            .collect();
        assert_eq!(style, ["Gamma", "Beta"]);
        assert!(catalog.get("Alpha").is_some());
        assert!(catalog.get("Delta").is_none());
    }
}
