//! Vue component script extractor.
//!
//! Carves `<script>` blocks out of `.vue` files without parsing the markup.

use memchr::memmem;

use crate::common::{
    ExtractedScript, ExtractorError, ScriptContext, ScriptExtractor, MAX_FILE_SIZE,
    MAX_SCRIPT_TAGS,
};

/// Vue component script extractor
#[derive(Debug, Clone, Copy, Default)]
pub struct VueExtractor;

impl ScriptExtractor for VueExtractor {
    fn extract<'a>(&self, source: &'a str) -> Result<Vec<ExtractedScript<'a>>, ExtractorError> {
        // Enforce file size limit
        if source.len() > MAX_FILE_SIZE {
            return Err(ExtractorError::FileTooLarge {
                size: source.len(),
                max: MAX_FILE_SIZE,
            });
        }

        let mut scripts = Vec::new();
        let mut pointer = 0;
        let mut script_count = 0;

        // Extract all script blocks
        while let Some(script) = parse_script(source, &mut pointer)? {
            scripts.push(script);
            script_count += 1;

            // Enforce script tag count limit
            if script_count > MAX_SCRIPT_TAGS {
                return Err(ExtractorError::TooManyScriptTags {
                    count: script_count,
                    max: MAX_SCRIPT_TAGS,
                });
            }
        }

        Ok(scripts)
    }

    fn file_extension(&self) -> &'static str {
        ".vue"
    }
}

/// Merges extracted script blocks into a single parseable unit.
///
/// Returns `None` when the component carries no script block at all. With
/// both a `<script setup>` and a regular `<script>`, the setup block comes
/// first, matching Vue's execution order.
pub fn combine_scripts(scripts: &[ExtractedScript<'_>]) -> Option<String> {
    if scripts.is_empty() {
        return None;
    }

    if scripts.len() == 1 {
        return Some(scripts[0].source_text.to_string());
    }

    let mut setup_script = None;
    let mut options_script = None;

    for script in scripts {
        match script.context {
            ScriptContext::Setup => setup_script = Some(script),
            ScriptContext::Options => options_script = Some(script),
        }
    }

    let mut combined = String::new();

    if let Some(setup) = setup_script {
        combined.push_str(setup.source_text);
    }

    if let Some(options) = options_script {
        if !combined.is_empty() {
            combined.push_str("\n\n");
        }
        combined.push_str(options.source_text);
    }

    Some(combined)
}

/// Parses a single script block starting from the given position.
fn parse_script<'a>(
    source_text: &'a str,
    pointer: &mut usize,
) -> Result<Option<ExtractedScript<'a>>, ExtractorError> {
    let bytes = source_text.as_bytes();

    // Find the start of a <script tag
    let script_start = match find_script_start(bytes, *pointer) {
        Some(pos) => pos,
        None => return Ok(None), // No more script tags
    };

    // Move pointer past "<script"
    *pointer = script_start + 7; // 7 = "<script".len()

    // Check if this is a script tag (not "scripts" or "scripting")
    if *pointer < bytes.len() {
        let next_char = bytes[*pointer];
        if !matches!(next_char, b' ' | b'\t' | b'\n' | b'\r' | b'>' | b'/') {
            // Not a script tag, keep searching
            return parse_script(source_text, pointer);
        }
    }

    // Find the end of the opening tag (the closing >)
    let tag_end = match find_script_closing_angle(bytes, *pointer) {
        Some(pos) => pos,
        None => {
            return Err(ExtractorError::UnclosedScriptTag {
                position: script_start,
            })
        }
    };

    // Extract the tag attributes (between "<script" and ">")
    let tag_content = &source_text[*pointer..tag_end];

    // Parse attributes
    let context = if has_setup_attribute(tag_content) {
        ScriptContext::Setup
    } else {
        ScriptContext::Options
    };
    let lang = extract_lang_attribute(tag_content);

    // Check for self-closing tag <script ... />
    if tag_end > 0 && bytes[tag_end - 1] == b'/' {
        // Self-closing tag, no content
        *pointer = tag_end + 1;
        return Ok(Some(ExtractedScript::new("", tag_end + 1, context, lang)));
    }

    // Move pointer past the closing >
    *pointer = tag_end + 1;
    let content_start = *pointer;

    // Find the closing </script> tag
    let script_end = match find_script_end(bytes, *pointer) {
        Some(pos) => pos,
        None => {
            return Err(ExtractorError::UnclosedScriptTag {
                position: script_start,
            })
        }
    };

    // Extract the script content
    let content = &source_text[content_start..script_end];

    // Move pointer past the closing </script>
    *pointer = script_end + 9; // 9 = "</script>".len()

    Ok(Some(ExtractedScript::new(
        content,
        content_start,
        context,
        lang,
    )))
}

/// Finds the start of a `<script` tag using memchr.
fn find_script_start(bytes: &[u8], start: usize) -> Option<usize> {
    let search_slice = &bytes[start..];
    memmem::find(search_slice, b"<script").map(|pos| start + pos)
}

/// Finds the closing `>` of a script tag, handling quoted attributes.
fn find_script_closing_angle(bytes: &[u8], start: usize) -> Option<usize> {
    let mut in_quote = false;
    let mut quote_char = 0u8;

    for (i, &byte) in bytes[start..].iter().enumerate() {
        match byte {
            b'"' | b'\'' => {
                if !in_quote {
                    in_quote = true;
                    quote_char = byte;
                } else if byte == quote_char {
                    in_quote = false;
                }
            }
            b'>' if !in_quote => return Some(start + i),
            _ => {}
        }
    }

    None
}

/// Finds the closing `</script>` tag.
fn find_script_end(bytes: &[u8], start: usize) -> Option<usize> {
    let search_slice = &bytes[start..];
    memmem::find(search_slice, b"</script>").map(|pos| start + pos)
}

/// Detects a bare `setup` attribute on the opening tag.
fn has_setup_attribute(tag_content: &str) -> bool {
    tag_content
        .split_whitespace()
        .any(|attr| attr == "setup" || attr.starts_with("setup="))
}

/// Extracts the `lang` attribute value from a script tag.
fn extract_lang_attribute(tag_content: &str) -> &str {
    // Find "lang=" or 'lang='
    if let Some(lang_pos) = tag_content.find("lang=") {
        let after_equals = &tag_content[lang_pos + 5..];

        // Skip whitespace
        let after_equals = after_equals.trim_start();

        if after_equals.is_empty() {
            return "js";
        }

        // Check for quoted value
        let quote_char = match after_equals.chars().next() {
            Some(ch) => ch,
            None => return "js",
        };
        if quote_char == '"' || quote_char == '\'' {
            // Find closing quote
            if let Some(end_quote) = after_equals[1..].find(quote_char) {
                return &after_equals[1..=end_quote];
            }
        } else {
            // Unquoted value (non-standard but handle it)
            let end = after_equals
                .find(|c: char| c.is_whitespace() || c == '>')
                .unwrap_or(after_equals.len());
            return &after_equals[..end];
        }
    }

    "js" // Default to JavaScript
}
