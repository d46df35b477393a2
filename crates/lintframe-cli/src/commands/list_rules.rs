//! List rules command implementation.

use anyhow::{Context, Result};
use lintframe_core::{Kind, Maturity, RuleRef};

/// Runs the list-rules command, optionally restricted to one group.
pub fn run(group: Option<&str>) -> Result<()> {
    let catalog = lintframe_rules::builtin_catalog().context("Failed to build rule catalog")?;
    let rules: Vec<RuleRef> = catalog
        .rules()
        .into_iter()
        .filter(|r| group.map_or(true, |g| r.info().group.name() == g))
        .collect();

    print!("{}", render(&rules));
    println!("Use `lintframe describe <RULE>` for details.");
    Ok(())
}

/// Renders rules under a heading per supported kind, in priority order.
fn render(rules: &[RuleRef]) -> String {
    let mut out = String::new();
    for kind in Kind::supported_kinds() {
        let of_kind: Vec<&RuleRef> = rules.iter().filter(|r| r.info().kind == *kind).collect();
        if of_kind.is_empty() {
            continue;
        }
        out.push_str(&format!("{}\n{}\n", kind.name().to_uppercase(), "-".repeat(60)));
        for rule in of_kind {
            let info = rule.info();
            let maturity = match &info.maturity {
                Maturity::Stable => String::new(),
                other => format!(" ({})", other.name()),
            };
            out.push_str(&format!(
                "  {:<28} {:<12} {}{}\n",
                info.name.humanized(),
                info.group.name(),
                info.description,
                maturity
            ));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_by_kind_in_priority_order() {
        let rules = lintframe_rules::builtin_catalog().unwrap().rules();
        let text = render(&rules);

        let do_at = text.find("DO\n").unwrap();
        let avoid_at = text.find("AVOID\n").unwrap();
        assert!(do_at < avoid_at);
        assert!(text.contains("Document Public Items"));
        assert!(text.contains("(Experimental)"));
        assert!(!text.contains("PREFER"));
    }
}
