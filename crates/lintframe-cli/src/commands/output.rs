//! Shared output formatting for lint results.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use lintframe_core::{LintResult, RenderedDiagnostic, Severity};

use crate::OutputFormat;

/// Prints lint results in the specified format.
pub fn print(result: &LintResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print_compact(result),
        OutputFormat::Rich => return print_rich(result),
    }
    Ok(())
}

fn print_text(result: &LintResult) {
    for diagnostic in &result.diagnostics {
        let severity = match diagnostic.severity {
            Severity::Error => "\x1b[31merror\x1b[0m",
            Severity::Warning => "\x1b[33mwarning\x1b[0m",
            Severity::Info => "\x1b[34minfo\x1b[0m",
        };

        println!(
            "{} at {}:{}:{}",
            diagnostic.rule,
            diagnostic.location.file.display(),
            diagnostic.location.line,
            diagnostic.location.column,
        );
        println!("  {severity}: {}", diagnostic.message);
        if let Some(correction) = &diagnostic.correction {
            println!("  = help: {correction}");
        }
        println!();
    }
    println!("{}", summary_line(result));
}

fn summary_line(result: &LintResult) -> String {
    let (errors, warnings, infos) = result.count_by_severity();
    let color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };
    format!(
        "{color}Found {errors} error(s), {warnings} warning(s), {infos} info(s) \
         in {} file(s)\x1b[0m",
        result.files_checked
    )
}

fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn print_compact(result: &LintResult) {
    for diagnostic in &result.diagnostics {
        println!("{diagnostic}");
    }
}

/// Renders each diagnostic with its source snippet.
fn print_rich(result: &LintResult) -> Result<()> {
    let mut sources: HashMap<&Path, String> = HashMap::new();
    for diagnostic in &result.diagnostics {
        let file = diagnostic.location.file.as_path();
        if !sources.contains_key(file) {
            let text = std::fs::read_to_string(file)
                .with_context(|| format!("Failed to re-read {}", file.display()))?;
            sources.insert(file, text);
        }
        let source = sources.get(file).cloned().unwrap_or_default();
        let report = miette::Report::new(RenderedDiagnostic::new(diagnostic, source));
        eprintln!("{report:?}");
    }
    println!("{}", summary_line(result));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lintframe_core::{DiagnosticInfo, Location};
    use std::path::PathBuf;

    #[test]
    fn summary_counts_each_severity() {
        let mut result = LintResult::new();
        let loc = Location::new(PathBuf::from("a.rs"), 1, 1);
        result.push_unit(vec![
            DiagnosticInfo::lint("LineLength", Severity::Warning, loc.clone(), "m"),
            DiagnosticInfo::lint("AvoidUnwrap", Severity::Error, loc, "m"),
        ]);
        let line = summary_line(&result);
        assert!(line.contains("Found 1 error(s), 1 warning(s), 0 info(s) in 1 file(s)"));
        assert!(line.starts_with("\x1b[31m"));
    }
}
