//! Methods and computed accessors share one extraction algorithm: both are
//! object literals mapping a name to a function value or an indirect
//! reference.

use oxc_ast::ast::{Expression, ObjectPropertyKind};
use tracing::debug;

use crate::model::MemberDescriptor;
use crate::shape::{classify, function_signature, var_ref, ValueShape};

/// Extracts member records from the value of a `methods` or `computed` key.
///
/// A non-object declaration is a format error in the component, not a fatal
/// one: it yields an empty list.
pub(crate) fn extract_members(value: &Expression<'_>, source: &str) -> Vec<MemberDescriptor> {
    debug!("extracting members");

    let ValueShape::Object(object) = classify(value) else {
        return Vec::new();
    };

    let mut members = Vec::new();

    for property in &object.properties {
        let ObjectPropertyKind::ObjectProperty(property) = property else {
            continue;
        };
        let Some(name) = property.key.static_name() else {
            continue;
        };
        match classify(&property.value) {
            ValueShape::Function(params) => {
                members.push(MemberDescriptor::new(
                    name,
                    function_signature(source, params),
                ));
            }
            ValueShape::Identifier(identifier) => {
                members.push(MemberDescriptor::new(name, var_ref(identifier)));
            }
            _ => {}
        }
    }

    members
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::ComponentExtractor;

    fn methods(source: &str) -> Vec<MemberDescriptor> {
        ComponentExtractor::new()
            .extract(source)
            .expect("extraction should succeed")
            .methods
    }

    #[test]
    fn shorthand_method_renders_signature() {
        let members = methods("export default { methods: { greet(a, b) {} } }");
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].name, "greet");
        assert_eq!(members[0].code, "Function(a,b)");
    }

    #[test]
    fn destructured_parameters_survive_verbatim() {
        let members = methods("export default { methods: { update({ id, value }, flag = true) {} } }");
        assert_eq!(members[0].code, "Function({ id, value },flag = true)");
    }

    #[test]
    fn indirect_member_renders_var_marker() {
        let members = methods("export default { methods: { save: persist } }");
        assert_eq!(members[0].code, "persist(var)");
    }

    #[test]
    fn non_function_members_are_omitted() {
        let members = methods("export default { methods: { limit: 3, greet() {} } }");
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].name, "greet");
    }

    #[test]
    fn non_object_declaration_yields_nothing() {
        assert!(methods("export default { methods: [1, 2] }").is_empty());
    }

    #[test]
    fn computed_uses_the_same_algorithm() {
        let descriptor = ComponentExtractor::new()
            .extract("export default { computed: { total() { return this.a + this.b } } }")
            .expect("extraction should succeed");
        assert_eq!(descriptor.computeds.len(), 1);
        assert_eq!(descriptor.computeds[0].code, "Function()");
    }
}
