//! Include directive detection and local include stripping.
//!
//! Local includes (`#include "..."`) are dropped because the files they name
//! are inlined elsewhere in the bundle. System includes (`#include <...>`)
//! are kept where they are.

use regex::Regex;

lazy_static::lazy_static! {
    /// Include directive anchored at line start, after optional whitespace.
    static ref INCLUDE_RE: Regex =
        Regex::new(r#"^\s*#\s*include\s+([<"])([^>"]+)([>"])"#).unwrap();
}

/// Delimiter style of an include directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IncludeKind {
    /// `#include "..."`, a project-relative file.
    Local,
    /// `#include <...>`, a library or standard header.
    System,
}

/// Result of filtering one file's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredContent {
    /// Kept lines, concatenated with their original terminators
    pub content: String,
    /// Number of local include lines dropped
    pub removed: usize,
}

/// Classify a single physical line.
///
/// Returns `None` when the line is not an include directive.
pub fn include_kind(line: &str) -> Option<IncludeKind> {
    let caps = INCLUDE_RE.captures(line)?;
    match caps.get(1).map(|m| m.as_str()) {
        Some("\"") => Some(IncludeKind::Local),
        _ => Some(IncludeKind::System),
    }
}

/// Line filter that removes local include directives.
#[derive(Debug, Clone, Copy, Default)]
pub struct IncludeFilter;

impl IncludeFilter {
    pub fn new() -> Self {
        Self
    }

    /// Drop every local include line from `text`.
    ///
    /// All other lines, including system includes, are kept byte-for-byte
    /// with their line terminators.
    pub fn filter(&self, text: &str) -> FilteredContent {
        let mut content = String::with_capacity(text.len());
        let mut removed = 0;

        for line in physical_lines(text) {
            if include_kind(line) == Some(IncludeKind::Local) {
                removed += 1;
                continue;
            }
            content.push_str(line);
        }

        FilteredContent { content, removed }
    }
}

/// Split `text` into lines ending in `\n`, `\r\n` or a bare `\r`.
///
/// Each line keeps its terminator. The last line may have none.
pub fn physical_lines(text: &str) -> impl Iterator<Item = &str> {
    let bytes = text.as_bytes();
    let mut start = 0;

    std::iter::from_fn(move || {
        if start >= bytes.len() {
            return None;
        }
        let mut end = start;
        while end < bytes.len() {
            match bytes[end] {
                b'\n' => {
                    end += 1;
                    break;
                }
                b'\r' => {
                    end += 1;
                    if bytes.get(end) == Some(&b'\n') {
                        end += 1;
                    }
                    break;
                }
                _ => end += 1,
            }
        }
        let line = &text[start..end];
        start = end;
        Some(line)
    })
}
