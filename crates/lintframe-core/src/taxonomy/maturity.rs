//! Stability classification of rules.

use std::cmp::Ordering;
use std::fmt;

use crate::error::TaxonomyError;

/// How settled a rule is.
#[derive(Debug, Clone, Default)]
pub enum Maturity {
    /// Safe to enable by default.
    #[default]
    Stable,
    /// Subject to change or removal.
    Experimental,
    /// A caller-defined maturity, possibly without an ordinal.
    Custom {
        /// Display name.
        name: String,
        /// Sort priority, if known.
        ordinal: Option<i32>,
    },
}

impl Maturity {
    /// Returns the canonical maturity for `name` (case-insensitive), or a
    /// custom one carrying `ordinal`.
    #[must_use]
    pub fn new(name: &str, ordinal: Option<i32>) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "stable" => Self::Stable,
            "experimental" => Self::Experimental,
            _ => Self::Custom {
                name: name.to_string(),
                ordinal,
            },
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Stable => "Stable",
            Self::Experimental => "Experimental",
            Self::Custom { name, .. } => name,
        }
    }

    /// Sort priority; `None` only for custom values built without one.
    #[must_use]
    pub fn ordinal(&self) -> Option<i32> {
        match self {
            Self::Stable => Some(0),
            Self::Experimental => Some(1),
            Self::Custom { ordinal, .. } => *ordinal,
        }
    }

    /// Whether this maturity was built by a caller.
    #[must_use]
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom { .. })
    }

    /// Orders two maturities by ordinal.
    ///
    /// # Errors
    ///
    /// Returns [`TaxonomyError::UnsetOrdinal`] if either side has no ordinal.
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering, TaxonomyError> {
        let lhs = self.ordinal().ok_or_else(|| TaxonomyError::UnsetOrdinal {
            name: self.name().to_string(),
        })?;
        let rhs = other.ordinal().ok_or_else(|| TaxonomyError::UnsetOrdinal {
            name: other.name().to_string(),
        })?;
        Ok(lhs.cmp(&rhs))
    }
}

/// Equal exactly when both ordinals are set and match.
impl PartialEq for Maturity {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

/// `None` whenever either side lacks an ordinal.
impl PartialOrd for Maturity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

impl fmt::Display for Maturity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_names_case_insensitive() {
        assert!(matches!(Maturity::new("Stable", None), Maturity::Stable));
        assert!(matches!(Maturity::new("STABLE", Some(7)), Maturity::Stable));
        assert!(matches!(
            Maturity::new("experimental", None),
            Maturity::Experimental
        ));
    }

    #[test]
    fn unset_ordinal_is_never_equal() {
        let unknown = Maturity::new("Incubating", None);
        assert_eq!(unknown.partial_cmp(&unknown.clone()), None);
        assert_ne!(unknown, unknown.clone());
        assert_eq!(Maturity::new("Graduated", Some(0)), Maturity::Stable);
    }

    #[test]
    fn canonical_display_names() {
        assert_eq!(Maturity::Stable.to_string(), "Stable");
        assert_eq!(Maturity::Experimental.name(), "Experimental");
    }

    #[test]
    fn default_is_stable() {
        assert!(matches!(Maturity::default(), Maturity::Stable));
    }

    #[test]
    fn ordering_by_ordinal() {
        assert!(Maturity::Stable < Maturity::Experimental);
        let deprecated = Maturity::new("Deprecated", Some(2));
        assert!(deprecated.is_custom());
        assert!(Maturity::Experimental < deprecated);
    }

    #[test]
    fn unset_ordinal_is_an_explicit_failure() {
        let unknown = Maturity::new("Incubating", None);
        assert_eq!(unknown.partial_cmp(&Maturity::Stable), None);
        assert_eq!(
            Maturity::Stable.try_cmp(&unknown),
            Err(TaxonomyError::UnsetOrdinal {
                name: "Incubating".into()
            })
        );
    }
}
