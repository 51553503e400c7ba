//! Parser facade over OXC for component script text.
//!
//! Scripts are parsed with the ES-module grammar; spread properties and
//! other modern syntax are first-class nodes here, so there is no separate
//! "experimental" switch. Any parser diagnostic is a hard error: a script
//! that does not parse yields no descriptor at all.

use oxc_allocator::Allocator;
use oxc_ast::ast::Program;
use oxc_parser::Parser;
use oxc_span::SourceType;

use crate::error::{DocgenError, Result};

/// Parsed script with its AST and the source it borrows from.
pub(crate) struct ParsedScript<'a> {
    /// The parsed AST program.
    pub program: Program<'a>,
    /// Original source text.
    pub source_text: &'a str,
}

/// Parse component script text into an AST.
///
/// The allocator must outlive the returned program.
pub(crate) fn parse<'a>(allocator: &'a Allocator, source: &'a str) -> Result<ParsedScript<'a>> {
    let parser = Parser::new(allocator, source, SourceType::mjs());
    let result = parser.parse();

    if !result.errors.is_empty() {
        let diagnostics: Vec<String> = result
            .errors
            .iter()
            .map(|error| format!("{error:?}"))
            .collect();
        return Err(DocgenError::parse_error(&diagnostics));
    }

    Ok(ParsedScript {
        program: result.program,
        source_text: source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_module_syntax() {
        let allocator = Allocator::default();
        let parsed = parse(&allocator, "export default { name: 'x' }").unwrap();
        assert_eq!(parsed.program.body.len(), 1);
        assert_eq!(parsed.source_text, "export default { name: 'x' }");
    }

    #[test]
    fn rejects_malformed_script() {
        let allocator = Allocator::default();
        let result = parse(&allocator, "export default {");
        assert!(matches!(result, Err(DocgenError::Parse { .. })));
    }
}
