//! Rule requiring doc comments on public items.
//!
//! # Configuration
//!
//! - `require_fn_docs`: Check public functions (default: true)
//! - `require_type_docs`: Check public structs, enums and traits (default: true)
//!
//! Experimental: enable it explicitly or with `include_experimental`.

use lintframe_core::utils::has_doc_comment;
use lintframe_core::{
    DiagnosticInfo, DiagnosticListener, Group, Kind, Maturity, NameError, Rule, RuleInfo,
    UnitContext,
};
use syn::visit::Visit;
use syn::{ItemEnum, ItemFn, ItemStruct, ItemTrait, Visibility};

/// Rule name for document-public-items.
pub const NAME: &str = "DocumentPublicItems";

/// Flags public items without a `///` doc comment.
#[derive(Debug, Clone)]
pub struct DocumentPublicItems {
    info: RuleInfo,
    /// Check public functions.
    pub require_fn_docs: bool,
    /// Check public structs, enums and traits.
    pub require_type_docs: bool,
}

impl DocumentPublicItems {
    /// Creates the rule with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`NameError`] if the rule name is rejected.
    pub fn new() -> Result<Self, NameError> {
        let info = RuleInfo::new(
            NAME,
            Kind::Do,
            Group::StyleGuide,
            "Do document public items.",
        )?
        .maturity(Maturity::Experimental)
        .details("**DO** write a `///` doc comment for every public function and type.");
        Ok(Self {
            info,
            require_fn_docs: true,
            require_type_docs: true,
        })
    }

    /// Sets whether public functions are checked.
    #[must_use]
    pub fn require_fn_docs(mut self, require: bool) -> Self {
        self.require_fn_docs = require;
        self
    }

    /// Sets whether public types are checked.
    #[must_use]
    pub fn require_type_docs(mut self, require: bool) -> Self {
        self.require_type_docs = require;
        self
    }
}

impl Rule for DocumentPublicItems {
    fn info(&self) -> &RuleInfo {
        &self.info
    }

    fn check(&self, ctx: &UnitContext<'_>, sink: &mut dyn DiagnosticListener) {
        let Some(ast) = &ctx.ast else {
            return;
        };
        let mut visitor = DocVisitor {
            ctx,
            rule: self,
            sink,
        };
        visitor.visit_file(ast);
    }
}

struct DocVisitor<'a, 'b> {
    ctx: &'a UnitContext<'a>,
    rule: &'a DocumentPublicItems,
    sink: &'b mut dyn DiagnosticListener,
}

impl DocVisitor<'_, '_> {
    fn check_item(
        &mut self,
        what: &str,
        vis: &Visibility,
        attrs: &[syn::Attribute],
        ident: &syn::Ident,
    ) {
        if !matches!(vis, Visibility::Public(_)) || has_doc_comment(attrs) {
            return;
        }
        let location = self.ctx.span_location(ident.span());
        self.sink.on_diagnostic(
            DiagnosticInfo::lint(
                NAME,
                self.rule.default_severity(),
                location,
                format!("Public {what} `{ident}` is missing a doc comment"),
            )
            .with_correction(format!("Add a /// comment describing `{ident}`")),
        );
    }
}

impl<'ast> Visit<'ast> for DocVisitor<'_, '_> {
    fn visit_item_fn(&mut self, node: &'ast ItemFn) {
        if self.rule.require_fn_docs {
            self.check_item("function", &node.vis, &node.attrs, &node.sig.ident);
        }
        syn::visit::visit_item_fn(self, node);
    }

    fn visit_item_struct(&mut self, node: &'ast ItemStruct) {
        if self.rule.require_type_docs {
            self.check_item("struct", &node.vis, &node.attrs, &node.ident);
        }
        syn::visit::visit_item_struct(self, node);
    }

    fn visit_item_enum(&mut self, node: &'ast ItemEnum) {
        if self.rule.require_type_docs {
            self.check_item("enum", &node.vis, &node.attrs, &node.ident);
        }
        syn::visit::visit_item_enum(self, node);
    }

    fn visit_item_trait(&mut self, node: &'ast ItemTrait) {
        if self.rule.require_type_docs {
            self.check_item("trait", &node.vis, &node.attrs, &node.ident);
        }
        syn::visit::visit_item_trait(self, node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lintframe_core::{DiagnosticCollector, SourceUnit};

    fn check_code(rule: &DocumentPublicItems, code: &str) -> Vec<DiagnosticInfo> {
        let unit = SourceUnit::in_memory("lib.rs", code);
        let ctx = UnitContext::new(&unit, Some(syn::parse_file(code).unwrap()));
        let mut sink = DiagnosticCollector::new();
        rule.check(&ctx, &mut sink);
        sink.into_diagnostics()
    }

    #[test]
    fn detects_undocumented_pub_items() {
        let code = r"
pub fn process() {}
pub struct Data;
pub enum Mode { A }
pub trait Handler {}
";
        let diagnostics = check_code(&DocumentPublicItems::new().unwrap(), code);
        assert_eq!(diagnostics.len(), 4);
        assert_eq!(
            diagnostics[0].message,
            "Public function `process` is missing a doc comment"
        );
        assert_eq!(diagnostics[0].location.line, 2);
        assert!(diagnostics[0].correction.is_some());
    }

    #[test]
    fn allows_documented_and_private_items() {
        let code = r"
/// Processes things.
pub fn process() {}
fn helper() {}
struct Internal;
";
        assert!(check_code(&DocumentPublicItems::new().unwrap(), code).is_empty());
    }

    #[test]
    fn toggles() {
        let code = "pub fn f() {}\npub struct S;\n";
        let rule = DocumentPublicItems::new().unwrap().require_fn_docs(false);
        assert_eq!(check_code(&rule, code).len(), 1);
        let rule = rule.require_type_docs(false);
        assert!(check_code(&rule, code).is_empty());
    }

    #[test]
    fn is_experimental() {
        let rule = DocumentPublicItems::new().unwrap();
        assert_eq!(rule.info().maturity, Maturity::Experimental);
        assert_eq!(rule.info().kind, Kind::Do);
    }
}
