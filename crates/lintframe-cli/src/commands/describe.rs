//! Describe command implementation.

use anyhow::{bail, Context, Result};
use lintframe_core::Rule;

/// Prints the metadata and details of the named rule.
pub fn run(name: &str) -> Result<()> {
    let catalog = lintframe_rules::builtin_catalog().context("Failed to build rule catalog")?;
    let Some(rule) = catalog.get(name) else {
        bail!("Unknown rule `{name}`; see `lintframe list-rules`");
    };
    print!("{}", describe(rule.as_ref()));
    Ok(())
}

fn describe(rule: &dyn Rule) -> String {
    let info = rule.info();
    let mut out = format!(
        "{} ({})\n\n{}\n\nKind:     {}\nGroup:    {}\nMaturity: {}\nSeverity: {}\n",
        info.name.humanized(),
        info.name,
        info.description,
        info.kind.name(),
        info.group.name(),
        info.maturity.name(),
        rule.default_severity(),
    );
    if let Some(link) = info.group.link() {
        out.push_str(&format!("See:      {}\n", link.html()));
    }
    if !info.details.is_empty() {
        out.push_str(&format!("\n{}\n", info.details));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_metadata_and_details() {
        let catalog = lintframe_rules::builtin_catalog().unwrap();
        let text = describe(catalog.get("AvoidUnwrap").unwrap().as_ref());
        assert!(text.starts_with("Avoid Unwrap (AvoidUnwrap)"));
        assert!(text.contains("Group:    Errors"));
        assert!(text.contains("Severity: error"));
        assert!(text.contains("**AVOID**"));
    }

    #[test]
    fn unknown_rule_fails() {
        assert!(run("NoSuchRule").is_err());
    }
}
