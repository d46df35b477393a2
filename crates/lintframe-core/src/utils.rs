//! Utility modules for rule and engine implementations.

pub mod attributes;
pub mod suppression;

#[doc(inline)]
pub use attributes::{has_allow_attr, has_cfg_test, has_doc_comment, has_test_attr, path_to_string};
#[doc(inline)]
pub use suppression::Suppressions;
