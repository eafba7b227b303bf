//! Source file types.

use serde::Serialize;
use std::path::PathBuf;

/// The category of a discovered file.
///
/// Determines which section of the bundle the file is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    /// Header file (`.h`, `.hpp`)
    Header,
    /// Source file (`.cpp`, `.cxx`, `.cc`)
    Source,
}

impl FileKind {
    /// Plural label used in bundle banners.
    pub fn section_label(&self) -> &'static str {
        match self {
            FileKind::Header => "Header Files",
            FileKind::Source => "Source Files",
        }
    }

    /// Lowercase noun used in placeholders and log lines.
    pub fn noun(&self) -> &'static str {
        match self {
            FileKind::Header => "header",
            FileKind::Source => "source",
        }
    }
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.noun())
    }
}

/// A file whose content has been read and filtered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedFile {
    /// Absolute path of the original file
    pub path: PathBuf,

    /// Header or source
    pub kind: FileKind,

    /// Content with local includes removed
    pub content: String,

    /// Number of local include lines dropped
    pub removed_includes: usize,
}
