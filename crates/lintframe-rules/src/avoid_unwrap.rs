//! Rule flagging `.unwrap()` and `.expect()` in production code.
//!
//! # Configuration
//!
//! - `allow_in_tests`: Allow in test code (default: true)
//! - `allow_expect`: Allow `.expect()` but flag `.unwrap()` (default: false)
//!
//! # Suppression
//!
//! - `#[allow(clippy::unwrap_used)]` or `#[allow(clippy::expect_used)]` on the function
//! - `// lintframe: ignore(AvoidUnwrap)` on or above the line

use lintframe_core::utils::{has_allow_attr, has_cfg_test, has_test_attr};
use lintframe_core::{
    DiagnosticListener, Group, Kind, NameError, Rule, RuleInfo, Severity, UnitContext,
};
use syn::visit::Visit;
use syn::{ExprMethodCall, ItemFn, ItemMod};

/// Rule name for avoid-unwrap.
pub const NAME: &str = "AvoidUnwrap";

const DETAILS: &str = r"**AVOID** `.unwrap()` and `.expect()` outside of tests.

Both panic on failure. Propagate the error with `?` or handle it explicitly.";

/// Flags `.unwrap()` and `.expect()` calls.
#[derive(Debug, Clone)]
pub struct AvoidUnwrap {
    info: RuleInfo,
    /// Allow in test code.
    pub allow_in_tests: bool,
    /// Allow `.expect()` (only flag `.unwrap()`).
    pub allow_expect: bool,
}

impl AvoidUnwrap {
    /// Creates the rule with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`NameError`] if the rule name is rejected.
    pub fn new() -> Result<Self, NameError> {
        let info = RuleInfo::new(
            NAME,
            Kind::Avoid,
            Group::new("Errors"),
            "Avoid .unwrap() and .expect() in production code.",
        )?
        .details(DETAILS);
        Ok(Self {
            info,
            allow_in_tests: true,
            allow_expect: false,
        })
    }

    /// Sets whether to allow in test code.
    #[must_use]
    pub fn allow_in_tests(mut self, allow: bool) -> Self {
        self.allow_in_tests = allow;
        self
    }

    /// Sets whether to allow `.expect()`.
    #[must_use]
    pub fn allow_expect(mut self, allow: bool) -> Self {
        self.allow_expect = allow;
        self
    }
}

impl Rule for AvoidUnwrap {
    fn info(&self) -> &RuleInfo {
        &self.info
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, ctx: &UnitContext<'_>, sink: &mut dyn DiagnosticListener) {
        if self.allow_in_tests && ctx.is_test {
            return;
        }
        let Some(ast) = &ctx.ast else {
            return;
        };

        let mut visitor = UnwrapVisitor {
            ctx,
            rule: self,
            sink,
            in_test_context: false,
            in_allowed_context: false,
        };
        visitor.visit_file(ast);
    }
}

struct UnwrapVisitor<'a, 'b> {
    ctx: &'a UnitContext<'a>,
    rule: &'a AvoidUnwrap,
    sink: &'b mut dyn DiagnosticListener,
    in_test_context: bool,
    in_allowed_context: bool,
}

impl<'ast> Visit<'ast> for UnwrapVisitor<'_, '_> {
    fn visit_item_mod(&mut self, node: &'ast ItemMod) {
        let was_in_test = self.in_test_context;
        if has_cfg_test(&node.attrs) {
            self.in_test_context = true;
        }

        syn::visit::visit_item_mod(self, node);
        self.in_test_context = was_in_test;
    }

    fn visit_item_fn(&mut self, node: &'ast ItemFn) {
        let was_in_test = self.in_test_context;
        let was_allowed = self.in_allowed_context;

        if has_test_attr(&node.attrs) {
            self.in_test_context = true;
        }
        if has_allow_attr(&node.attrs, &["clippy::unwrap_used", "clippy::expect_used"]) {
            self.in_allowed_context = true;
        }

        syn::visit::visit_item_fn(self, node);

        self.in_test_context = was_in_test;
        self.in_allowed_context = was_allowed;
    }

    fn visit_expr_method_call(&mut self, node: &'ast ExprMethodCall) {
        let skip = (self.rule.allow_in_tests && self.in_test_context) || self.in_allowed_context;
        if !skip {
            let method = node.method.to_string();
            if method == "unwrap" || (method == "expect" && !self.rule.allow_expect) {
                let location = self.ctx.span_location(node.method.span());
                self.rule.report_message(
                    self.sink,
                    location,
                    format!("Avoid .{method}() in production code; propagate the error instead."),
                );
            }
        }
        syn::visit::visit_expr_method_call(self, node);
    }
}
