//! Shape classification over OXC expressions.
//!
//! The field extractors only ever distinguish a handful of node shapes:
//! literals, bare identifiers, array/object literals, and function
//! expressions. [`ValueShape`] models exactly that set; everything else is
//! [`ValueShape::Other`], which every extractor ignores.

use oxc_ast::ast::{ArrayExpression, Expression, FormalParameters, ObjectExpression};
use oxc_span::Span;

use crate::model::PropValue;

/// The node shapes the field extractors consume.
pub(crate) enum ValueShape<'a, 'b> {
    /// A boolean, numeric, string, or null literal.
    Literal(PropValue),
    /// A bare identifier reference.
    Identifier(&'b str),
    /// An array literal.
    Array(&'b ArrayExpression<'a>),
    /// An object literal.
    Object(&'b ObjectExpression<'a>),
    /// A function or arrow-function expression, reduced to its parameters.
    Function(&'b FormalParameters<'a>),
    /// Any other expression kind.
    Other,
}

/// Classifies an expression, looking through parentheses.
pub(crate) fn classify<'a, 'b>(expression: &'b Expression<'a>) -> ValueShape<'a, 'b> {
    let mut expression = expression;
    while let Expression::ParenthesizedExpression(paren) = expression {
        expression = &paren.expression;
    }

    match expression {
        Expression::BooleanLiteral(literal) => ValueShape::Literal(PropValue::Bool(literal.value)),
        Expression::NullLiteral(_) => ValueShape::Literal(PropValue::Null),
        Expression::NumericLiteral(literal) => {
            ValueShape::Literal(PropValue::Number(literal.value))
        }
        Expression::StringLiteral(literal) => {
            ValueShape::Literal(PropValue::Text(literal.value.to_string()))
        }
        Expression::Identifier(identifier) => ValueShape::Identifier(identifier.name.as_str()),
        Expression::ArrayExpression(array) => ValueShape::Array(array),
        Expression::ObjectExpression(object) => ValueShape::Object(object),
        Expression::FunctionExpression(function) => ValueShape::Function(&function.params),
        Expression::ArrowFunctionExpression(arrow) => ValueShape::Function(&arrow.params),
        _ => ValueShape::Other,
    }
}

/// Renders a `Function(args...)` signature from a parameter list.
///
/// Each parameter is sliced out of the original source, so destructuring and
/// default values appear exactly as written.
pub(crate) fn function_signature(source: &str, params: &FormalParameters<'_>) -> String {
    let mut rendered: Vec<&str> = params
        .items
        .iter()
        .map(|param| snippet(source, param.span))
        .collect();
    if let Some(rest) = &params.rest {
        rendered.push(snippet(source, rest.span));
    }
    format!("Function({})", rendered.join(","))
}

/// Renders the indirection marker for an identifier-valued field.
pub(crate) fn var_ref(name: &str) -> String {
    format!("{name}(var)")
}

/// Slices the source text covered by a span.
pub(crate) fn snippet(source: &str, span: Span) -> &str {
    &source[span.start as usize..span.end as usize]
}
