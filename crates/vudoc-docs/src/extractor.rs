//! The component extractor: locates the exported configuration object and
//! dispatches per-field extraction.

use std::fs;
use std::path::Path;

use oxc_allocator::Allocator;
use oxc_ast::ast::{
    AssignmentTarget, ExportDefaultDeclarationKind, Expression, ObjectExpression,
    ObjectPropertyKind, Statement,
};
use tracing::debug;

use crate::error::{DocgenError, Result};
use crate::fields;
use crate::model::{ComponentDescriptor, PropValue};
use crate::parser::parse;
use crate::shape::{classify, ValueShape};

/// Recognized top-level fields of the export object. Every other key is
/// recorded in `options` and otherwise ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OptionField {
    Name,
    Props,
    Methods,
    Computed,
    Components,
}

impl OptionField {
    fn from_key(key: &str) -> Option<Self> {
        match key {
            "name" => Some(Self::Name),
            "props" => Some(Self::Props),
            "methods" => Some(Self::Methods),
            "computed" => Some(Self::Computed),
            "components" => Some(Self::Components),
            _ => None,
        }
    }
}

/// Extracts a [`ComponentDescriptor`] from component script text using OXC.
///
/// Extraction is pure and synchronous; separate calls share no state, so
/// extracting many files concurrently needs no coordination.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentExtractor;

impl ComponentExtractor {
    /// Creates a new extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extracts a descriptor from a script file on disk.
    ///
    /// The file must contain plain script text; `.vue` component files are
    /// split first by the documentation pipeline.
    pub fn extract_from_path(&self, path: impl AsRef<Path>) -> Result<ComponentDescriptor> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|error| DocgenError::Io {
            path: path.to_path_buf(),
            error,
        })?;
        self.extract(&source)
    }

    /// Extracts a descriptor from in-memory script text.
    ///
    /// The only hard failure is a script that does not parse. A script with
    /// no exported configuration object yields a default descriptor.
    pub fn extract(&self, source: &str) -> Result<ComponentDescriptor> {
        let allocator = Allocator::default();
        let parsed = parse(&allocator, source)?;
        let program = &parsed.program;

        let mut descriptor = ComponentDescriptor::default();

        let Some(export_object) = find_export_object(&program.body) else {
            debug!("no exported configuration object found");
            return Ok(descriptor);
        };

        // The event scan runs over the entire tree, not just `methods`:
        // emissions may sit in computed properties, watchers, or any nested
        // function.
        descriptor.events = fields::scan_events(program, parsed.source_text);

        for property in &export_object.properties {
            let ObjectPropertyKind::ObjectProperty(property) = property else {
                continue; // spread entries carry no key
            };
            let Some(key) = property.key.static_name() else {
                continue;
            };
            descriptor.options.push(key.to_string());

            match OptionField::from_key(&key) {
                Some(OptionField::Name) => {
                    if let ValueShape::Literal(PropValue::Text(name)) = classify(&property.value) {
                        descriptor.name = name;
                    }
                }
                Some(OptionField::Props) => {
                    descriptor.props = fields::extract_props(&property.value, parsed.source_text);
                }
                Some(OptionField::Methods) => {
                    descriptor.methods =
                        fields::extract_members(&property.value, parsed.source_text);
                }
                Some(OptionField::Computed) => {
                    descriptor.computeds =
                        fields::extract_members(&property.value, parsed.source_text);
                }
                Some(OptionField::Components) => {
                    descriptor.components = fields::extract_components(&property.value);
                }
                None => {} // unrecognized keys live in `options` only
            }
        }

        Ok(descriptor)
    }
}

/// Finds the exported configuration object: the first `export default
/// <object-literal>` or `module.exports = <object-literal>` in a pre-order
/// walk of the statement tree.
///
/// The walk descends through block-level constructs but not into nested
/// function scopes; an export buried inside a function body is not a
/// component definition.
fn find_export_object<'a, 'b>(
    statements: &'b [Statement<'a>],
) -> Option<&'b ObjectExpression<'a>> {
    statements.iter().find_map(find_in_statement)
}

fn find_in_statement<'a, 'b>(statement: &'b Statement<'a>) -> Option<&'b ObjectExpression<'a>> {
    match statement {
        Statement::ExportDefaultDeclaration(export) => match &export.declaration {
            ExportDefaultDeclarationKind::ObjectExpression(object) => Some(object),
            _ => None,
        },
        Statement::ExpressionStatement(statement) => as_exports_assignment(&statement.expression),
        Statement::BlockStatement(block) => find_export_object(&block.body),
        Statement::IfStatement(if_statement) => find_in_statement(&if_statement.consequent)
            .or_else(|| if_statement.alternate.as_ref().and_then(find_in_statement)),
        Statement::ForStatement(for_statement) => find_in_statement(&for_statement.body),
        Statement::ForInStatement(for_statement) => find_in_statement(&for_statement.body),
        Statement::ForOfStatement(for_statement) => find_in_statement(&for_statement.body),
        Statement::WhileStatement(while_statement) => find_in_statement(&while_statement.body),
        Statement::DoWhileStatement(do_statement) => find_in_statement(&do_statement.body),
        Statement::LabeledStatement(labeled) => find_in_statement(&labeled.body),
        Statement::TryStatement(try_statement) => find_export_object(&try_statement.block.body)
            .or_else(|| {
                try_statement
                    .handler
                    .as_ref()
                    .and_then(|handler| find_export_object(&handler.body.body))
            })
            .or_else(|| {
                try_statement
                    .finalizer
                    .as_ref()
                    .and_then(|finalizer| find_export_object(&finalizer.body))
            }),
        Statement::SwitchStatement(switch) => switch
            .cases
            .iter()
            .find_map(|case| find_export_object(&case.consequent)),
        _ => None,
    }
}

/// Matches `module.exports = <object-literal>`.
fn as_exports_assignment<'a, 'b>(
    expression: &'b Expression<'a>,
) -> Option<&'b ObjectExpression<'a>> {
    let Expression::AssignmentExpression(assignment) = expression else {
        return None;
    };
    let AssignmentTarget::StaticMemberExpression(target) = &assignment.left else {
        return None;
    };
    let Expression::Identifier(object) = &target.object else {
        return None;
    };
    if object.name != "module" || target.property.name != "exports" {
        return None;
    }
    match &assignment.right {
        Expression::ObjectExpression(object) => Some(object),
        _ => None,
    }
}
