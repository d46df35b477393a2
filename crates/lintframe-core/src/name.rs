//! Validated rule identifiers.
//!
//! Rule names are upper camel case with optional leading underscores,
//! e.g. `LineLength`, `_PrivateRule`, `LinesLongerThan80Chars`.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

use crate::error::NameError;

fn valid_name() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        #[allow(clippy::unwrap_used)] // Literal pattern, checked by tests
        Regex::new(r"^(_*)(([A-Z][a-z0-9]*)+)$").unwrap()
    })
}

fn word_group() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        #[allow(clippy::unwrap_used)] // Literal pattern, checked by tests
        Regex::new(r"[A-Z][a-z]*").unwrap()
    })
}

/// Returns `true` if `raw` is a well-formed rule name.
#[must_use]
pub fn is_valid(raw: &str) -> bool {
    valid_name().is_match(raw)
}

/// Turns a camel-case identifier into a space-separated phrase.
///
/// Every run of an uppercase letter followed by lowercase letters is kept;
/// leading underscores and digits are dropped. Works on any input, valid
/// rule name or not.
///
/// ```
/// use lintframe_core::humanize;
///
/// assert_eq!(humanize("CamelCaseRule"), "Camel Case Rule");
/// assert_eq!(humanize("_PrivateRule"), "Private Rule");
/// ```
#[must_use]
pub fn humanize(name: &str) -> String {
    word_group()
        .find_iter(name)
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// A rule name guaranteed to match the camel-case naming convention.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RuleName(String);

impl RuleName {
    /// Validates `raw` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns [`NameError`] carrying the offending string if it does not
    /// match `^(_*)(([A-Z][a-z0-9]*)+)$`.
    pub fn new(raw: impl Into<String>) -> Result<Self, NameError> {
        let raw = raw.into();
        if is_valid(&raw) {
            Ok(Self(raw))
        } else {
            Err(NameError::new(raw))
        }
    }

    /// The name as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human-readable phrase, e.g. `"Line Length"`.
    #[must_use]
    pub fn humanized(&self) -> String {
        humanize(&self.0)
    }
}

impl AsRef<str> for RuleName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for RuleName {
    type Error = NameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for RuleName {
    type Error = NameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
