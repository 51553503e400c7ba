//! Prop declarations: the array form and the per-prop descriptor form.

use oxc_ast::ast::{Expression, ObjectExpression, ObjectPropertyKind};
use tracing::debug;

use crate::model::{PropDescriptor, PropValue};
use crate::shape::{classify, function_signature, var_ref, ValueShape};

/// Extracts prop records from the value of a `props` key.
///
/// Two shapes are recognized: `props: ['a', b]` (names only) and
/// `props: { name: Type }` / `props: { name: { type, required, default,
/// validator } }`. Anything else yields an empty list.
pub(crate) fn extract_props(value: &Expression<'_>, source: &str) -> Vec<PropDescriptor> {
    debug!("extracting props");

    let mut props = Vec::new();

    match classify(value) {
        ValueShape::Array(array) => {
            for element in &array.elements {
                let Some(expression) = element.as_expression() else {
                    continue;
                };
                match classify(expression) {
                    ValueShape::Literal(literal) => {
                        props.push(PropDescriptor::named(literal.to_string()));
                    }
                    ValueShape::Identifier(name) => {
                        props.push(PropDescriptor::named(var_ref(name)));
                    }
                    _ => {}
                }
            }
        }
        ValueShape::Object(object) => {
            for property in &object.properties {
                let ObjectPropertyKind::ObjectProperty(property) = property else {
                    continue;
                };
                let Some(name) = property.key.static_name() else {
                    continue;
                };
                match classify(&property.value) {
                    // count: Number
                    ValueShape::Identifier(type_name) => {
                        let mut prop = PropDescriptor::named(name);
                        prop.prop_type = Some(type_name.to_string());
                        props.push(prop);
                    }
                    // count: { type: Number, default: 0, ... }
                    ValueShape::Object(descriptor) => {
                        props.push(extract_prop_descriptor(name.to_string(), descriptor, source));
                    }
                    _ => {}
                }
            }
        }
        _ => {}
    }

    props
}

/// Extracts the `type` / `required` / `default` / `validator` sub-fields of
/// one per-prop descriptor object, independent of their order or presence.
fn extract_prop_descriptor(
    name: String,
    object: &ObjectExpression<'_>,
    source: &str,
) -> PropDescriptor {
    let mut prop = PropDescriptor::named(name);

    for property in &object.properties {
        let ObjectPropertyKind::ObjectProperty(property) = property else {
            continue;
        };
        let Some(key) = property.key.static_name() else {
            continue;
        };
        let shape = classify(&property.value);
        match key.as_ref() {
            "type" => {
                prop.prop_type = match shape {
                    ValueShape::Function(params) => Some(function_signature(source, params)),
                    ValueShape::Identifier(type_name) => Some(type_name.to_string()),
                    // `type: 'Number'` is not a normal Vue shape, but it must
                    // not derail extraction of the sibling sub-fields.
                    ValueShape::Literal(literal) => Some(literal.to_string()),
                    _ => None,
                };
            }
            "required" => {
                prop.required = match shape {
                    ValueShape::Literal(literal) => Some(literal),
                    ValueShape::Identifier(name) => Some(PropValue::Text(var_ref(name))),
                    _ => None,
                };
            }
            "default" => {
                prop.default = match shape {
                    ValueShape::Literal(literal) => Some(literal),
                    ValueShape::Identifier(name) => Some(PropValue::Text(var_ref(name))),
                    ValueShape::Function(params) => {
                        Some(PropValue::Text(function_signature(source, params)))
                    }
                    _ => None,
                };
            }
            "validator" => {
                prop.validator = match shape {
                    ValueShape::Function(params) => Some(function_signature(source, params)),
                    ValueShape::Identifier(name) => Some(var_ref(name)),
                    _ => None,
                };
            }
            _ => {}
        }
    }

    prop
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::ComponentExtractor;

    fn extract(source: &str) -> Vec<PropDescriptor> {
        ComponentExtractor::new()
            .extract(source)
            .expect("extraction should succeed")
            .props
    }

    #[test]
    fn array_form_literals_and_identifiers() {
        let props = extract("export default { props: ['a', b] }");
        assert_eq!(props.len(), 2);
        assert_eq!(props[0].name, "a");
        assert_eq!(props[1].name, "b(var)");
    }

    #[test]
    fn object_form_type_shorthand() {
        let props = extract("export default { props: { count: Number } }");
        assert_eq!(props.len(), 1);
        assert_eq!(props[0].name, "count");
        assert_eq!(props[0].prop_type.as_deref(), Some("Number"));
    }

    #[test]
    fn object_form_full_descriptor() {
        let props = extract(
            "export default { props: { count: { type: Number, default: 0, required: true } } }",
        );
        assert_eq!(props.len(), 1);
        let prop = &props[0];
        assert_eq!(prop.prop_type.as_deref(), Some("Number"));
        assert_eq!(prop.default, Some(PropValue::Number(0.0)));
        assert_eq!(prop.required, Some(PropValue::Bool(true)));
    }

    #[test]
    fn factory_default_renders_signature() {
        let props = extract(
            "export default { props: { items: { type: Array, default: function () { return [] } } } }",
        );
        assert_eq!(props[0].default, Some(PropValue::Text("Function()".into())));
    }

    #[test]
    fn arrow_default_renders_signature() {
        let props = extract("export default { props: { items: { default: () => [] } } }");
        assert_eq!(props[0].default, Some(PropValue::Text("Function()".into())));
    }

    #[test]
    fn indirect_sub_fields_render_var_markers() {
        let props = extract(
            "export default { props: { count: { required: isRequired, default: fallback, validator: check } } }",
        );
        let prop = &props[0];
        assert_eq!(prop.required, Some(PropValue::Text("isRequired(var)".into())));
        assert_eq!(prop.default, Some(PropValue::Text("fallback(var)".into())));
        assert_eq!(prop.validator.as_deref(), Some("check(var)"));
    }

    #[test]
    fn validator_signature_preserves_parameter_text() {
        let props = extract(
            "export default { props: { count: { validator: function (value) { return value > 0 } } } }",
        );
        assert_eq!(props[0].validator.as_deref(), Some("Function(value)"));
    }

    #[test]
    fn literal_type_does_not_crash() {
        let props = extract("export default { props: { count: { type: 'Number' } } }");
        assert_eq!(props[0].prop_type.as_deref(), Some("Number"));
    }

    #[test]
    fn non_collection_props_yield_nothing() {
        assert!(extract("export default { props: 42 }").is_empty());
    }

    #[test]
    fn unexpected_element_shapes_are_skipped() {
        let props = extract("export default { props: ['a', 1 + 2, 'b'] }");
        assert_eq!(props.len(), 2);
        assert_eq!(props[0].name, "a");
        assert_eq!(props[1].name, "b");
    }
}
