//! Shared types for script extraction.

use thiserror::Error;

/// Maximum accepted component file size (10 MiB).
pub const MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

/// Maximum number of script tags per component file.
pub const MAX_SCRIPT_TAGS: usize = 100;

/// Which kind of script block a slice was extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptContext {
    /// A plain `<script>` block (Options API).
    Options,
    /// A `<script setup>` block (Composition API).
    Setup,
}

/// One script block carved out of a component file.
///
/// `source_text` borrows from the component source; `start_offset` is the
/// byte position of the block's content within that source, kept so callers
/// can map positions back to the original file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractedScript<'a> {
    /// The script content between the opening and closing tags.
    pub source_text: &'a str,
    /// Byte offset of `source_text` within the component file.
    pub start_offset: usize,
    /// Block kind.
    pub context: ScriptContext,
    /// Value of the `lang` attribute, `"js"` when absent.
    pub lang: &'a str,
}

impl<'a> ExtractedScript<'a> {
    /// Creates a new extracted script record.
    pub fn new(
        source_text: &'a str,
        start_offset: usize,
        context: ScriptContext,
        lang: &'a str,
    ) -> Self {
        Self {
            source_text,
            start_offset,
            context,
            lang,
        }
    }
}

/// Errors surfaced while scanning a component file for script blocks.
#[derive(Debug, Error)]
pub enum ExtractorError {
    /// The component file exceeds [`MAX_FILE_SIZE`].
    #[error("component file is {size} bytes, exceeding the {max} byte limit")]
    FileTooLarge {
        /// Observed file size.
        size: usize,
        /// The enforced limit.
        max: usize,
    },

    /// The component file contains more than [`MAX_SCRIPT_TAGS`] script tags.
    #[error("component file contains {count} script tags, exceeding the limit of {max}")]
    TooManyScriptTags {
        /// Observed tag count.
        count: usize,
        /// The enforced limit.
        max: usize,
    },

    /// A `<script` tag was opened but never closed.
    #[error("unclosed script tag at byte {position}")]
    UnclosedScriptTag {
        /// Byte position of the opening tag.
        position: usize,
    },
}

/// Extraction seam for component file formats.
pub trait ScriptExtractor {
    /// Extracts every script block from `source`, in document order.
    fn extract<'a>(&self, source: &'a str) -> Result<Vec<ExtractedScript<'a>>, ExtractorError>;

    /// File extension this extractor handles, including the leading dot.
    fn file_extension(&self) -> &'static str;
}
