//! Whole-tree scan for `$emit` call sites.
//!
//! Emissions can hide anywhere: methods, computed getters, watchers, nested
//! closures. This pass walks the entire program rather than the sub-tree of
//! any single top-level field.

use oxc_ast::ast::{CallExpression, Expression, Program};
use oxc_ast_visit::{walk, Visit};
use oxc_span::GetSpan;
use tracing::debug;

use crate::model::EventDescriptor;
use crate::shape::{classify, snippet, ValueShape};

/// Collects every informative `$emit` call in the program, in first-seen
/// depth-first order.
pub(crate) fn scan_events(program: &Program<'_>, source: &str) -> Vec<EventDescriptor> {
    debug!("scanning for emitted events");

    let mut scanner = EmitScanner {
        source,
        events: Vec::new(),
    };
    scanner.visit_program(program);
    scanner.events
}

struct EmitScanner<'s> {
    source: &'s str,
    events: Vec<EventDescriptor>,
}

impl<'ast> Visit<'ast> for EmitScanner<'_> {
    fn visit_call_expression(&mut self, call: &CallExpression<'ast>) {
        if is_emit_callee(&call.callee) {
            if let Some(event) = self.record_emit(call) {
                self.events.push(event);
            }
        }
        walk::walk_call_expression(self, call);
    }
}

impl EmitScanner<'_> {
    fn record_emit(&self, call: &CallExpression<'_>) -> Option<EventDescriptor> {
        // A bare `$emit()` carries nothing worth documenting.
        if call.arguments.is_empty() {
            return None;
        }

        let name = call
            .arguments
            .first()
            .and_then(|argument| argument.as_expression())
            .and_then(|expression| match classify(expression) {
                ValueShape::Literal(literal) => Some(literal.to_string()),
                _ => None, // anonymous event, still recorded
            });

        let data = call
            .arguments
            .get(1)
            .map(|argument| snippet(self.source, argument.span()).to_string());

        Some(EventDescriptor {
            code: snippet(self.source, call.span).to_string(),
            name,
            data,
        })
    }
}

fn is_emit_callee(callee: &Expression<'_>) -> bool {
    match callee {
        Expression::StaticMemberExpression(member) => member.property.name == "$emit",
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use crate::extractor::ComponentExtractor;
    use crate::model::EventDescriptor;

    fn events(source: &str) -> Vec<EventDescriptor> {
        ComponentExtractor::new()
            .extract(source)
            .expect("extraction should succeed")
            .events
    }

    #[test]
    fn emit_with_name_and_data() {
        let found = events(
            "export default { methods: { change(value) { this.$emit('changed', value) } } }",
        );
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name.as_deref(), Some("changed"));
        assert_eq!(found[0].data.as_deref(), Some("value"));
        assert_eq!(found[0].code, "this.$emit('changed', value)");
    }

    #[test]
    fn emissions_outside_methods_are_found() {
        let found = events(
            "export default { computed: { total() { this.$emit('computed-total'); return 0 } } }",
        );
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name.as_deref(), Some("computed-total"));
    }

    #[test]
    fn non_literal_name_is_anonymous() {
        let found = events("export default { methods: { fire(name) { this.$emit(name) } } }");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, None);
        assert_eq!(found[0].code, "this.$emit(name)");
    }

    #[test]
    fn zero_argument_emit_is_discarded() {
        assert!(events("export default { methods: { noop() { this.$emit() } } }").is_empty());
    }

    #[test]
    fn only_static_emit_members_match() {
        let found = events(
            "export default { methods: { a() { vm['$emit']('x') }, b() { emit('y') } } }",
        );
        assert!(found.is_empty());
    }

    #[test]
    fn nested_closures_are_scanned() {
        let found = events(
            "export default { methods: { defer() { setTimeout(() => { this.$emit('late', 1) }, 0) } } }",
        );
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name.as_deref(), Some("late"));
        assert_eq!(found[0].data.as_deref(), Some("1"));
    }
}
