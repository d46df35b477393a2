//! Check command implementation.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::Pattern;
use ignore::WalkBuilder;
use lintframe_core::{Config, Linter, LinterOptions, PrintingReporter, Reporter, RuleCatalog};
use tracing::{debug, info};

use crate::config_resolver;
use crate::OutputFormat;

/// Arguments of `lintframe check`.
#[derive(Debug)]
pub struct CheckRequest {
    /// Files or directories to lint.
    pub paths: Vec<PathBuf>,
    /// Output format.
    pub format: OutputFormat,
    /// Comma-separated rule names to run exclusively.
    pub rules: Option<String>,
    /// Extra exclude globs.
    pub exclude: Vec<String>,
    /// Enable experimental rules.
    pub include_experimental: bool,
}

/// Runs the check command. Returns whether any error-severity diagnostic was found.
pub fn run(request: &CheckRequest, config_path: Option<&Path>) -> Result<bool> {
    let project_dir = request
        .paths
        .first()
        .map_or_else(|| PathBuf::from("."), |p| project_dir_of(p));
    let mut config = config_resolver::resolve(&project_dir, config_path).load()?;
    config.include_experimental |= request.include_experimental;
    config.exclude.extend(request.exclude.iter().cloned());

    let reporter = PrintingReporter::stderr();
    let catalog = lintframe_rules::configure(&config).context("Failed to build rule catalog")?;
    if let Some(filter) = &request.rules {
        restrict_rules(&mut config, &catalog, filter, &reporter);
    }

    let files = collect_files(&request.paths, &config)?;
    info!("Linting {} files with {} known rules", files.len(), catalog.len());

    let mut linter = Linter::builder()
        .options(LinterOptions::from_config(&catalog, &config))
        .reporter(reporter)
        .build();
    let result = linter.lint_files(&files).context("Lint run aborted")?;

    super::output::print(&result, request.format)?;
    Ok(result.has_errors())
}

fn project_dir_of(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.to_path_buf()
    } else {
        path.parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
    }
}

/// Enables exactly the named rules, warning about names not in the catalog.
fn restrict_rules(
    config: &mut Config,
    catalog: &RuleCatalog,
    filter: &str,
    reporter: &dyn Reporter,
) {
    let wanted: HashSet<&str> = filter
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    for name in &wanted {
        if catalog.get(name).is_none() {
            reporter.warn(&format!("Unknown rule: {name}"));
        }
    }
    for rule in catalog.rules() {
        let name = rule.name().as_str();
        config.rules.entry(name.to_string()).or_default().enabled = Some(wanted.contains(name));
    }
}

/// Expands `paths` into the files to lint.
///
/// Explicit files are always kept. Directories are walked honouring
/// `.gitignore`, then filtered by extension and exclude globs.
fn collect_files(paths: &[PathBuf], config: &Config) -> Result<Vec<PathBuf>> {
    let excludes = config
        .exclude
        .iter()
        .map(|p| Pattern::new(p).with_context(|| format!("Invalid exclude pattern `{p}`")))
        .collect::<Result<Vec<_>>>()?;

    let mut files = Vec::new();
    for root in paths {
        if root.is_file() {
            files.push(root.clone());
            continue;
        }
        for entry in WalkBuilder::new(root).build() {
            let entry = entry.with_context(|| format!("Failed to walk {}", root.display()))?;
            let path = entry.path();
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            let matches_ext = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|ext| config.extensions.iter().any(|want| want == ext));
            if !matches_ext {
                continue;
            }
            if excludes.iter().any(|p| p.matches_path(path)) {
                debug!("Excluded {}", path.display());
                continue;
            }
            files.push(path.to_path_buf());
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}
