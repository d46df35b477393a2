//! Subcommand implementations.

pub mod check;
pub mod describe;
pub mod list_rules;
pub mod output;
