//! # lintframe-core
//!
//! Core framework for lint rules.
//!
//! This crate provides:
//!
//! - [`RuleName`] validation and [`humanize`]
//! - the rule taxonomy: [`Kind`], [`Group`], [`Maturity`]
//! - the [`Rule`] contract and its canonical ordering
//! - [`RuleCatalog`] and [`LinterOptions`] for choosing the active rules
//! - [`Linter`], which installs the active rules, runs an
//!   [`AnalysisEngine`] over a source unit and returns its diagnostics
//! - [`Reporter`] for framework-level failures
//!
//! ## Example
//!
//! ```ignore
//! use lintframe_core::{Linter, LinterOptions};
//!
//! let mut linter = Linter::builder()
//!     .options(LinterOptions::new(move || vec![line_length.clone()]))
//!     .build();
//!
//! let diagnostics = linter.lint_library("TestLib", "a very long line ...")?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod catalog;
mod config;
mod context;
mod engine;
mod error;
mod linter;
mod name;
mod options;
mod registry;
mod reporter;
mod rule;
mod source;
mod taxonomy;
mod types;

/// Utility modules for rule implementations.
pub mod utils;

pub use catalog::RuleCatalog;
pub use config::{Config, ConfigError, RuleConfig};
pub use context::UnitContext;
pub use engine::{AnalysisEngine, DiagnosticCollector, DiagnosticListener, SourceEngine};
pub use error::{LinterError, NameError, TaxonomyError};
pub use linter::{Linter, LinterBuilder};
pub use name::{humanize, is_valid, RuleName};
pub use options::{DiagnosticFilter, LinterOptions, RuleSelector};
pub use registry::ActiveRules;
pub use reporter::{LineSink, PrintingReporter, Reporter};
pub use rule::{compare_rules, sort_rules, Rule, RuleInfo, RuleRef};
pub use source::{Origin, SourceUnit, FILE_SCHEME};
pub use taxonomy::{CustomGroup, Group, Hyperlink, Kind, Maturity};
pub use types::{
    DiagnosticCategory, DiagnosticInfo, LintResult, Location, RenderedDiagnostic, Severity,
};
