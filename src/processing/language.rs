//! File kind detection from extensions.

use std::path::Path;

use crate::types::FileKind;
use crate::{HEADER_EXTENSIONS, SOURCE_EXTENSIONS};

/// Classify a path as header or source by its extension.
///
/// The comparison is case-insensitive. Files with any other extension,
/// or none at all, return `None`.
pub fn classify(path: &Path) -> Option<FileKind> {
    let ext = path.extension()?.to_str()?.to_lowercase();

    if HEADER_EXTENSIONS.contains(&ext.as_str()) {
        Some(FileKind::Header)
    } else if SOURCE_EXTENSIONS.contains(&ext.as_str()) {
        Some(FileKind::Source)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_extensions() {
        assert_eq!(classify(Path::new("a/b.h")), Some(FileKind::Header));
        assert_eq!(classify(Path::new("b.hpp")), Some(FileKind::Header));
        assert_eq!(classify(Path::new("B.HPP")), Some(FileKind::Header));
    }

    #[test]
    fn test_source_extensions() {
        assert_eq!(classify(Path::new("main.cpp")), Some(FileKind::Source));
        assert_eq!(classify(Path::new("main.cxx")), Some(FileKind::Source));
        assert_eq!(classify(Path::new("main.cc")), Some(FileKind::Source));
        assert_eq!(classify(Path::new("Main.CPP")), Some(FileKind::Source));
    }

    #[test]
    fn test_unrecognized_extensions() {
        assert_eq!(classify(Path::new("main.c")), None);
        assert_eq!(classify(Path::new("impl.inl")), None);
        assert_eq!(classify(Path::new("Makefile")), None);
        assert_eq!(classify(Path::new("notes.h.txt")), None);
        // A bare dotfile has no extension.
        assert_eq!(classify(Path::new(".h")), None);
    }
}
