//! Rule classification: kind, group and maturity.
//!
//! Each classification has a fixed set of built-in values plus a custom
//! case. The `new` constructors map well-known names onto the built-ins
//! and build a custom value for everything else.

mod group;
mod kind;
mod maturity;

pub use group::{CustomGroup, Group, Hyperlink};
pub use kind::Kind;
pub use maturity::Maturity;
