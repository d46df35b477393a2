//! The set of rules active for the next analysis session.

use tracing::debug;

use crate::rule::RuleRef;

/// Active rules, replaced wholesale on every install.
///
/// Owned by a single [`Linter`](crate::Linter); not shared between threads.
#[derive(Default, Clone)]
pub struct ActiveRules {
    rules: Vec<RuleRef>,
}

impl ActiveRules {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the active set with `rules`, preserving their order.
    ///
    /// `None` leaves the current set untouched.
    pub fn install(&mut self, rules: Option<Vec<RuleRef>>) {
        let Some(rules) = rules else {
            debug!("No rule set supplied; keeping {} active rules", self.rules.len());
            return;
        };
        self.rules.clear();
        self.rules.extend(rules);
        debug!("Installed {} active rules", self.rules.len());
    }

    /// Active rules in install order.
    #[must_use]
    pub fn rules(&self) -> &[RuleRef] {
        &self.rules
    }

    /// Number of active rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules are active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Names of the active rules, in install order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name().as_str()).collect()
    }
}

impl std::fmt::Debug for ActiveRules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
