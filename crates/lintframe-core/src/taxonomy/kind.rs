//! How strongly a rule's guidance should be followed.

use std::cmp::Ordering;
use std::fmt;

/// Priority classification of a rule.
///
/// Lower ordinal means higher priority. Values compare by ordinal only, so
/// a custom kind with ordinal `2` sorts together with [`Kind::Prefer`].
#[derive(Debug, Clone)]
pub enum Kind {
    /// Practices that should always be followed.
    Do,
    /// Practices that should never be followed.
    Dont,
    /// Practices that should usually be followed.
    Prefer,
    /// Practices that should usually not be followed.
    Avoid,
    /// Practices that might or might not be followed.
    Consider,
    /// A caller-defined kind. Never interned.
    Custom {
        /// Display name.
        name: String,
        /// Sort priority.
        ordinal: i32,
        /// What following this kind means.
        description: String,
    },
}

static SUPPORTED: [Kind; 5] = [Kind::Do, Kind::Dont, Kind::Prefer, Kind::Avoid, Kind::Consider];

impl Kind {
    /// Returns the canonical kind for `name`, or builds a custom one.
    ///
    /// Names match case-insensitively (`"do"`, `"DON'T"`, `"dont"`, ...).
    /// `ordinal` and `description` are only used for custom kinds.
    #[must_use]
    pub fn new(name: &str, ordinal: i32, description: impl Into<String>) -> Self {
        match name.trim().to_ascii_uppercase().as_str() {
            "DO" => Self::Do,
            "DON'T" | "DONT" => Self::Dont,
            "PREFER" => Self::Prefer,
            "AVOID" => Self::Avoid,
            "CONSIDER" => Self::Consider,
            _ => Self::Custom {
                name: name.to_string(),
                ordinal,
                description: description.into(),
            },
        }
    }

    /// The five canonical kinds in priority order.
    #[must_use]
    pub fn supported_kinds() -> &'static [Kind] {
        &SUPPORTED
    }

    /// Display name, e.g. `"Don't"`.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Do => "Do",
            Self::Dont => "Don't",
            Self::Prefer => "Prefer",
            Self::Avoid => "Avoid",
            Self::Consider => "Consider",
            Self::Custom { name, .. } => name,
        }
    }

    /// Sort priority.
    #[must_use]
    pub fn ordinal(&self) -> i32 {
        match self {
            Self::Do => 0,
            Self::Dont => 1,
            Self::Prefer => 2,
            Self::Avoid => 3,
            Self::Consider => 4,
            Self::Custom { ordinal, .. } => *ordinal,
        }
    }

    /// What following rules of this kind means.
    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            Self::Do => "Always follow this guidance; nearly every case applies.",
            Self::Dont => "Never do this; the exceptions are vanishingly rare.",
            Self::Prefer => "Usually follow this guidance; deviate only with good reason.",
            Self::Avoid => "Usually steer clear of this; deviate only with good reason.",
            Self::Consider => "Might or might not apply depending on the circumstances.",
            Self::Custom { description, .. } => description,
        }
    }

    /// Whether this kind was built by a caller.
    #[must_use]
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom { .. })
    }
}

impl PartialEq for Kind {
    fn eq(&self, other: &Self) -> bool {
        self.ordinal() == other.ordinal()
    }
}

impl Eq for Kind {}

impl PartialOrd for Kind {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Kind {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordinal().cmp(&other.ordinal())
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
