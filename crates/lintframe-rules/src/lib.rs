//! # lintframe-rules
//!
//! Built-in lint rules for lintframe.
//!
//! ## Available Rules
//!
//! | Name | Kind | Group | Maturity |
//! |------|------|-------|----------|
//! | `DocumentPublicItems` | Do | Style Guide | Experimental |
//! | `TrailingWhitespace` | Don't | Style Guide | Stable |
//! | `AvoidUnwrap` | Avoid | Errors | Stable |
//! | `LineLength` | Avoid | Style Guide | Stable |
//!
//! ## Usage
//!
//! ```ignore
//! use lintframe_core::{Linter, LinterOptions};
//! use lintframe_rules::builtin_catalog;
//!
//! let catalog = builtin_catalog()?;
//! let mut linter = Linter::builder()
//!     .options(LinterOptions::all_from(&catalog))
//!     .build();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod avoid_unwrap;
mod catalog;
pub mod document_public_items;
pub mod line_length;
pub mod trailing_whitespace;

pub use avoid_unwrap::AvoidUnwrap;
pub use catalog::{builtin_catalog, configure};
pub use document_public_items::DocumentPublicItems;
pub use line_length::LineLength;
pub use trailing_whitespace::TrailingWhitespace;

/// Re-export core types for convenience.
pub use lintframe_core::{DiagnosticInfo, Rule, Severity};
