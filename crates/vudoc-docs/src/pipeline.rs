//! The documentation pipeline: split, extract, render, cache.

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use vudoc_sfc::{combine_scripts, ScriptExtractor, VueExtractor};

use crate::error::{DocgenError, Result};
use crate::extractor::ComponentExtractor;
use crate::generators::markdown::render_markdown;
use crate::model::ComponentDescriptor;

/// Drives one component file through split → extract → render, keeping the
/// rendered fragment in a per-path cache.
///
/// The cache is the only cross-call state anywhere in vudoc: it maps a file
/// path to the most recently rendered fragment for that path. The mutex
/// serializes writers, so concurrent documentation runs need no further
/// coordination; entries never expire.
pub struct DocsPipeline {
    extractor: ComponentExtractor,
    cache: Mutex<FxHashMap<PathBuf, String>>,
}

impl DocsPipeline {
    /// Creates a pipeline with an empty cache.
    pub fn new() -> Self {
        Self {
            extractor: ComponentExtractor::new(),
            cache: Mutex::new(FxHashMap::default()),
        }
    }

    /// Documents a component file on disk and caches the fragment.
    pub fn document_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|error| DocgenError::Io {
            path: path.to_path_buf(),
            error,
        })?;
        self.document_source(path, &source)
    }

    /// Documents in-memory component source under the given path key.
    ///
    /// `.vue` input is split into its script blocks first; any other input
    /// is treated as script text directly.
    pub fn document_source(&self, path: impl AsRef<Path>, source: &str) -> Result<String> {
        let path = path.as_ref();

        let descriptor = if is_vue_file(path) {
            self.extract_component(source)?
        } else {
            self.extractor.extract(source)?
        };

        if descriptor.is_empty() {
            debug!(path = %path.display(), "component has no documentable surface");
        }

        let fragment = render_markdown(&descriptor);
        self.cache
            .lock()
            .insert(path.to_path_buf(), fragment.clone());
        Ok(fragment)
    }

    /// Returns the most recently rendered fragment for `path`, if any.
    pub fn cached(&self, path: impl AsRef<Path>) -> Option<String> {
        self.cache.lock().get(path.as_ref()).cloned()
    }

    fn extract_component(&self, source: &str) -> Result<ComponentDescriptor> {
        let scripts = VueExtractor.extract(source)?;
        let script = match combine_scripts(&scripts) {
            Some(script) => script,
            None => {
                // No script block: extract from nothing rather than fail, so
                // the caller still gets a (placeholder) fragment.
                warn!("component file contains no script block");
                String::new()
            }
        };
        self.extractor.extract(&script)
    }
}

impl Default for DocsPipeline {
    fn default() -> Self {
        Self::new()
    }
}

fn is_vue_file(path: &Path) -> bool {
    path.extension().and_then(|extension| extension.to_str()) == Some("vue")
}
