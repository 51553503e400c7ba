use std::path::PathBuf;

use thiserror::Error;

use vudoc_sfc::ExtractorError;

/// Result type alias for documentation operations.
pub type Result<T> = std::result::Result<T, DocgenError>;

/// Error variants for component extraction and documentation generation.
#[derive(Debug, Error)]
pub enum DocgenError {
    /// Failed to read or access a source file.
    #[error("failed to read source '{path}': {error}")]
    Io {
        /// Path to the source file that caused the error.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        error: std::io::Error,
    },

    /// Parsing the component script with OXC failed.
    ///
    /// This is the only failure the extractor itself propagates; every other
    /// anomaly degrades to an absent or empty descriptor field.
    #[error("failed to parse component script: {message}")]
    Parse {
        /// Aggregated parser error message.
        message: String,
    },

    /// Splitting a component file into script blocks failed.
    #[error(transparent)]
    Split(#[from] ExtractorError),

    /// Rendering a descriptor into a documentation fragment failed.
    #[error("failed to render documentation: {message}")]
    Render {
        /// Human-readable error message.
        message: String,
    },
}

impl DocgenError {
    /// Helper to create a parse error from multiple diagnostic strings.
    pub fn parse_error(diagnostics: &[String]) -> Self {
        let message = diagnostics.join("; ");
        Self::Parse { message }
    }
}
