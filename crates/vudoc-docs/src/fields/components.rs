//! Registered sub-components.

use oxc_ast::ast::{Expression, ObjectPropertyKind};
use tracing::debug;

use crate::model::ComponentRef;
use crate::shape::{classify, var_ref, ValueShape};

/// Extracts sub-component references from the value of a `components` key.
///
/// Registration is a keyed mapping; any other declaration shape yields an
/// empty list, never partial results.
pub(crate) fn extract_components(value: &Expression<'_>) -> Vec<ComponentRef> {
    debug!("extracting components");

    let ValueShape::Object(object) = classify(value) else {
        return Vec::new();
    };

    let mut components = Vec::new();

    for property in &object.properties {
        let ObjectPropertyKind::ObjectProperty(property) = property else {
            continue;
        };
        match classify(&property.value) {
            ValueShape::Identifier(name) => components.push(var_ref(name)),
            ValueShape::Literal(literal) => components.push(literal.to_string()),
            _ => {}
        }
    }

    components
}
