#![deny(clippy::all)]

//! Vue component API extraction and documentation generation.
//!
//! This crate statically analyzes the script of a Vue component — the single
//! exported object-literal configuration — and recovers its documentable
//! surface: declared props, instance methods, computed accessors, registered
//! sub-components, and every `$emit` call site anywhere in the tree. Nothing
//! is ever evaluated; values that cannot be read off the AST are rendered as
//! indirection markers (`name(var)`) or synthesized signatures
//! (`Function(args...)`).
//!
//! The crate provides:
//! - A descriptor model for one component's public surface.
//! - The extractor itself, built on the OXC parser and AST.
//! - Markdown and JSON generators for extracted descriptors.
//! - A documentation pipeline that splits `.vue` files (via `vudoc-sfc`),
//!   extracts, renders, and caches fragments per file path.

pub mod error;
pub mod extractor;
pub mod generators;
pub mod model;
pub mod pipeline;

mod fields;
mod parser;
mod shape;

pub use error::{DocgenError, Result};
pub use extractor::ComponentExtractor;
pub use model::{
    ComponentDescriptor, ComponentRef, EventDescriptor, MemberDescriptor, PropDescriptor,
    PropValue,
};
pub use pipeline::DocsPipeline;

pub use generators::json::render_json;
pub use generators::markdown::render_markdown;
