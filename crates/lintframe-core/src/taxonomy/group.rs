//! Thematic buckets for rules.

use std::fmt;

/// A reference link attached to a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hyperlink {
    /// Link text.
    pub label: String,
    /// Link target.
    pub href: String,
    /// Render the label in bold.
    pub bold: bool,
}

impl Hyperlink {
    /// Creates a plain link.
    #[must_use]
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            bold: false,
        }
    }

    /// Renders the label in bold.
    #[must_use]
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// HTML anchor for this link.
    #[must_use]
    pub fn html(&self) -> String {
        let label = if self.bold {
            format!("<strong>{}</strong>", self.label)
        } else {
            self.label.clone()
        };
        format!("<a href=\"{}\">{label}</a>", self.href)
    }
}

/// A caller-defined group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomGroup {
    /// Group name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional reference link.
    pub link: Option<Hyperlink>,
}

/// The collection a rule belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Group {
    /// Matters of style.
    StyleGuide,
    /// Anything else.
    Custom(CustomGroup),
}

impl Group {
    /// Returns [`Group::StyleGuide`] for `"Style Guide"` or `"Styleguide"`,
    /// otherwise a fresh custom group. Matching is case-sensitive.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self::with_details(name, None, None)
    }

    /// Like [`Group::new`], attaching a description and link to custom groups.
    #[must_use]
    pub fn with_details(name: &str, description: Option<String>, link: Option<Hyperlink>) -> Self {
        match name {
            "Styleguide" | "Style Guide" => Self::StyleGuide,
            _ => Self::Custom(CustomGroup {
                name: name.to_string(),
                description,
                link,
            }),
        }
    }

    /// Group name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::StyleGuide => "Style Guide",
            Self::Custom(group) => &group.name,
        }
    }

    /// Group description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::StyleGuide => {
                Some("Matters of style, largely derived from the project style guide.")
            }
            Self::Custom(group) => group.description.as_deref(),
        }
    }

    /// Reference link, if any.
    #[must_use]
    pub fn link(&self) -> Option<&Hyperlink> {
        match self {
            Self::StyleGuide => None,
            Self::Custom(group) => group.link.as_ref(),
        }
    }

    /// Whether this group was built by a caller.
    #[must_use]
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_guide_aliases_are_canonical() {
        assert_eq!(Group::new("Style Guide"), Group::StyleGuide);
        assert_eq!(Group::new("Styleguide"), Group::StyleGuide);
        assert!(!Group::new("Style Guide").is_custom());
    }

    #[test]
    fn style_guide_match_is_case_sensitive() {
        assert!(Group::new("style guide").is_custom());
        assert!(Group::new("STYLEGUIDE").is_custom());
    }

    #[test]
    fn other_names_are_custom() {
        let group = Group::with_details(
            "Errors",
            Some("Possible runtime failures".into()),
            Some(Hyperlink::new("Handbook", "https://example.com/errors").bold(true)),
        );
        assert!(group.is_custom());
        assert_eq!(group.name(), "Errors");
        assert_eq!(group.description(), Some("Possible runtime failures"));
        assert_ne!(group, Group::StyleGuide);
    }

    #[test]
    fn hyperlink_html() {
        let plain = Hyperlink::new("Docs", "https://example.com");
        assert_eq!(plain.html(), "<a href=\"https://example.com\">Docs</a>");
        assert_eq!(
            plain.bold(true).html(),
            "<a href=\"https://example.com\"><strong>Docs</strong></a>"
        );
    }
}
