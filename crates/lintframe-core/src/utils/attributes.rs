//! Attribute helpers for `syn`-based rules.

use syn::meta::ParseNestedMeta;
use syn::{Attribute, Path};

/// Converts a path such as `clippy::unwrap_used` to a string.
#[must_use]
pub fn path_to_string(path: &Path) -> String {
    path.segments
        .iter()
        .map(|seg| seg.ident.to_string())
        .collect::<Vec<_>>()
        .join("::")
}

/// Checks if attributes contain an `#[allow(...)]` for any of `lint_names`.
#[must_use]
pub fn has_allow_attr(attrs: &[Attribute], lint_names: &[&str]) -> bool {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("allow"))
        .any(|attr| {
            let mut found = false;
            let _ = attr.parse_nested_meta(|meta| {
                if lint_names.contains(&path_to_string(&meta.path).as_str()) {
                    found = true;
                }
                Ok(())
            });
            found
        })
}

/// Checks if attributes contain a `#[test]` attribute.
#[must_use]
pub fn has_test_attr(attrs: &[Attribute]) -> bool {
    attrs.iter().any(|attr| attr.path().is_ident("test"))
}

/// Checks for `#[cfg(test)]`, including `test` inside `all(...)`/`any(...)`.
#[must_use]
pub fn has_cfg_test(attrs: &[Attribute]) -> bool {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("cfg"))
        .any(|attr| {
            let mut found = false;
            let _ = attr.parse_nested_meta(|meta| scan_cfg(&meta, &mut found));
            found
        })
}

fn scan_cfg(meta: &ParseNestedMeta<'_>, found: &mut bool) -> syn::Result<()> {
    if meta.path.is_ident("test") {
        *found = true;
    } else if meta.path.is_ident("all") || meta.path.is_ident("any") {
        meta.parse_nested_meta(|inner| scan_cfg(&inner, found))?;
    } else if meta.input.peek(syn::Token![=]) {
        meta.value()?.parse::<syn::Lit>()?;
    } else if meta.input.peek(syn::token::Paren) {
        // `not(...)` and friends never enable test-only code.
        meta.parse_nested_meta(|inner| {
            if inner.input.peek(syn::Token![=]) {
                inner.value()?.parse::<syn::Lit>()?;
            }
            Ok(())
        })?;
    }
    Ok(())
}

/// Checks if attributes carry documentation (`///` or `#[doc = "..."]`).
#[must_use]
pub fn has_doc_comment(attrs: &[Attribute]) -> bool {
    attrs.iter().any(|attr| attr.path().is_ident("doc"))
}
