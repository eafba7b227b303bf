//! File processor for the bundling pipeline.
//!
//! Reads a file, decodes it tolerantly and strips local includes so the
//! content is ready to be written into the bundle.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::BundleError;
use crate::processing::includes::IncludeFilter;
use crate::types::{FileKind, ProcessedFile};

/// File processor for reading and filtering input files.
#[derive(Debug, Clone, Default)]
pub struct FileProcessor {
    include_filter: IncludeFilter,
}

impl FileProcessor {
    /// Create a new file processor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `path` and remove its local include lines.
    ///
    /// The file handle is released before this returns, on success or error.
    pub fn process(&self, path: &Path, kind: FileKind) -> Result<ProcessedFile, BundleError> {
        let bytes = fs::read(path).map_err(|source| BundleError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let text = self.decode(&bytes);
        let filtered = self.include_filter.filter(&text);

        debug!(
            path = %path.display(),
            kind = %kind,
            removed = filtered.removed,
            "Processed file"
        );

        Ok(ProcessedFile {
            path: path.to_path_buf(),
            kind,
            content: filtered.content,
            removed_includes: filtered.removed,
        })
    }

    /// Decode content as UTF-8, dropping any invalid byte sequences.
    pub fn decode(&self, content: &[u8]) -> String {
        // Fast path for well-formed files
        if let Ok(s) = std::str::from_utf8(content) {
            return s.to_string();
        }

        let mut text = String::with_capacity(content.len());
        for chunk in content.utf8_chunks() {
            text.push_str(chunk.valid());
        }
        text
    }
}
